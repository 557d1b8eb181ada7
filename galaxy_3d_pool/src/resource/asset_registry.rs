/// Named asset storage keyed by pool handles.
///
/// Assets live in a growable pool; callers keep the `PoolId` returned by
/// `insert` instead of a pointer. A name index lets assets be looked up by
/// their path or label, and a removed asset's handle stops resolving even if
/// its slot is reused by a later insert.

use rustc_hash::FxHashMap;
use crate::error::{Error, Result};
use crate::engine_bail;
use crate::pool::{Pool, PoolConfig, PoolId};

/// Asset registry (one per asset type)
pub struct AssetRegistry<T> {
    assets: Pool<T>,
    names: FxHashMap<String, PoolId>,
}

impl<T: Default> AssetRegistry<T> {
    /// Create an empty registry with the default pool configuration
    pub fn new() -> Self {
        Self::with_config(PoolConfig::default())
    }

    /// Create an empty registry backed by a pool built from `config`
    pub fn with_config(config: PoolConfig) -> Self {
        Self {
            assets: Pool::with_config(config),
            names: FxHashMap::default(),
        }
    }

    /// Store a named asset
    ///
    /// Returns a handle that stays valid until the asset is removed.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateName` if an asset with the same name already exists.
    pub fn insert(&mut self, name: &str, asset: T) -> Result<PoolId> {
        if self.names.contains_key(name) {
            engine_bail!("galaxy3d::AssetRegistry", Error::DuplicateName(name.to_string()));
        }

        let id = self.assets.checkout();
        if let Some(slot) = self.assets.get_mut(id) {
            *slot = asset;
        }
        self.names.insert(name.to_string(), id);
        Ok(id)
    }

    /// Remove an asset by name, returning it
    pub fn remove(&mut self, name: &str) -> Option<T> {
        let id = self.names.remove(name)?;
        self.take(id)
    }

    /// Remove an asset by handle, returning it
    ///
    /// Linear in the number of names.
    pub fn remove_by_id(&mut self, id: PoolId) -> Option<T> {
        if !self.assets.is_valid(id) {
            return None;
        }
        self.names.retain(|_, registered| *registered != id);
        self.take(id)
    }

    /// Remove every asset
    ///
    /// All outstanding handles become invalid.
    pub fn clear(&mut self) {
        self.names.clear();
        self.assets.clear();
    }

    fn take(&mut self, id: PoolId) -> Option<T> {
        let asset = std::mem::take(self.assets.get_mut(id)?);
        self.assets.put_back(id);
        Some(asset)
    }
}

impl<T> AssetRegistry<T> {
    /// Handle of a named asset
    pub fn id(&self, name: &str) -> Option<PoolId> {
        self.names.get(name).copied()
    }

    /// Get an asset by handle
    pub fn get(&self, id: PoolId) -> Option<&T> {
        self.assets.get(id)
    }

    /// Get a mutable asset by handle
    pub fn get_mut(&mut self, id: PoolId) -> Option<&mut T> {
        self.assets.get_mut(id)
    }

    /// Get an asset by name
    pub fn get_by_name(&self, name: &str) -> Option<&T> {
        self.id(name).and_then(|id| self.assets.get(id))
    }

    /// Whether `name` is registered
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    /// Whether `id` refers to a registered asset
    pub fn is_valid(&self, id: PoolId) -> bool {
        self.assets.is_valid(id)
    }

    /// Number of registered assets
    pub fn len(&self) -> usize {
        self.assets.live_count()
    }

    /// Whether no asset is registered
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get all asset names
    pub fn names(&self) -> Vec<&str> {
        self.names.keys().map(|k| k.as_str()).collect()
    }
}

impl<T: Default> Default for AssetRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "asset_registry_tests.rs"]
mod tests;
