//! Resource management module
//!
//! Provides handle-keyed storage for engine assets.

mod asset_registry;

pub use asset_registry::AssetRegistry;
