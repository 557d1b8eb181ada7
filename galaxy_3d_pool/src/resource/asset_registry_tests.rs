/// Tests for AssetRegistry
///
/// These tests validate named insertion, handle and name lookup, removal,
/// and handle invalidation when slots are reused.

use super::*;
use crate::pool::GrowthPolicy;

#[derive(Debug, Default, Clone, PartialEq)]
struct Sprite {
    texture: String,
    frames: u32,
}

fn sprite(texture: &str, frames: u32) -> Sprite {
    Sprite { texture: texture.to_string(), frames }
}

// ============================================================================
// Tests: Creation
// ============================================================================

#[test]
fn test_registry_new_is_empty() {
    let registry = AssetRegistry::<Sprite>::new();
    assert!(registry.is_empty());
    assert_eq!(registry.len(), 0);
    assert!(registry.names().is_empty());
}

#[test]
fn test_registry_default_is_empty() {
    let registry = AssetRegistry::<Sprite>::default();
    assert!(registry.is_empty());
}

// ============================================================================
// Tests: Insert / Lookup
// ============================================================================

#[test]
fn test_insert_and_get() {
    let mut registry = AssetRegistry::new();
    let id = registry.insert("hero", sprite("hero.png", 4)).unwrap();

    assert_eq!(registry.len(), 1);
    assert!(registry.contains("hero"));
    assert!(registry.is_valid(id));
    assert_eq!(registry.id("hero"), Some(id));
    assert_eq!(registry.get(id), Some(&sprite("hero.png", 4)));
    assert_eq!(registry.get_by_name("hero"), Some(&sprite("hero.png", 4)));
}

#[test]
fn test_insert_duplicate_name_fails() {
    let mut registry = AssetRegistry::new();
    let first = registry.insert("hero", sprite("a.png", 1)).unwrap();

    let result = registry.insert("hero", sprite("b.png", 2));
    assert_eq!(result, Err(Error::DuplicateName("hero".to_string())));

    // Original entry untouched
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.get(first), Some(&sprite("a.png", 1)));
}

#[test]
fn test_get_mut_by_handle() {
    let mut registry = AssetRegistry::new();
    let id = registry.insert("hero", sprite("hero.png", 1)).unwrap();
    registry.get_mut(id).unwrap().frames = 8;
    assert_eq!(registry.get(id).map(|s| s.frames), Some(8));
}

#[test]
fn test_unknown_name_lookups() {
    let registry = AssetRegistry::<Sprite>::new();
    assert_eq!(registry.id("missing"), None);
    assert!(registry.get_by_name("missing").is_none());
    assert!(!registry.contains("missing"));
}

#[test]
fn test_names() {
    let mut registry = AssetRegistry::new();
    registry.insert("hero", sprite("hero.png", 1)).unwrap();
    registry.insert("enemy", sprite("enemy.png", 1)).unwrap();

    let mut names = registry.names();
    names.sort();
    assert_eq!(names, vec!["enemy", "hero"]);
}

// ============================================================================
// Tests: Remove
// ============================================================================

#[test]
fn test_remove_by_name_returns_asset() {
    let mut registry = AssetRegistry::new();
    let id = registry.insert("hero", sprite("hero.png", 3)).unwrap();

    assert_eq!(registry.remove("hero"), Some(sprite("hero.png", 3)));
    assert!(!registry.contains("hero"));
    assert!(!registry.is_valid(id));
    assert!(registry.get(id).is_none());
    assert!(registry.is_empty());
    assert_eq!(registry.remove("hero"), None);
}

#[test]
fn test_remove_by_id_drops_name() {
    let mut registry = AssetRegistry::new();
    let id = registry.insert("hero", sprite("hero.png", 3)).unwrap();
    registry.insert("enemy", sprite("enemy.png", 1)).unwrap();

    assert_eq!(registry.remove_by_id(id), Some(sprite("hero.png", 3)));
    assert!(!registry.contains("hero"));
    assert!(registry.contains("enemy"));
    assert_eq!(registry.remove_by_id(id), None);
}

#[test]
fn test_removed_handle_stays_invalid_after_slot_reuse() {
    let mut registry = AssetRegistry::with_config(PoolConfig {
        initial_capacity: 1,
        growth: GrowthPolicy::Chunk(1),
    });
    let old = registry.insert("hero", sprite("hero.png", 1)).unwrap();
    registry.remove("hero");

    let new = registry.insert("enemy", sprite("enemy.png", 2)).unwrap();
    assert_eq!(new.index(), old.index());
    assert!(registry.get(old).is_none());
    assert_eq!(registry.get(new), Some(&sprite("enemy.png", 2)));
}

#[test]
fn test_registry_grows() {
    let mut registry = AssetRegistry::with_config(PoolConfig {
        initial_capacity: 2,
        growth: GrowthPolicy::Double,
    });
    let ids: Vec<PoolId> = (0..10)
        .map(|i| registry.insert(&format!("sprite_{}", i), sprite("s.png", i)).unwrap())
        .collect();

    assert_eq!(registry.len(), 10);
    for (i, id) in (0u32..).zip(&ids) {
        assert_eq!(registry.get(*id).map(|s| s.frames), Some(i));
    }
}

#[test]
fn test_clear() {
    let mut registry = AssetRegistry::new();
    let id = registry.insert("hero", sprite("hero.png", 1)).unwrap();
    registry.clear();

    assert!(registry.is_empty());
    assert!(!registry.contains("hero"));
    assert!(!registry.is_valid(id));

    // Name can be registered again afterwards
    assert!(registry.insert("hero", sprite("hero.png", 1)).is_ok());
}
