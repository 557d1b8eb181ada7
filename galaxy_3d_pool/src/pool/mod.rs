//! Generational slot pools
//!
//! Fixed and growable pools handing out `PoolId` handles to pooled objects.

mod capacity;
mod pool_id;
mod slot_pool;
mod slot_storage;
mod stamper;

pub use capacity::{
    CapacityPolicy, Bounded, Growable,
    PoolConfig, GrowthPolicy, MAX_SLOTS,
};
pub use pool_id::{PoolId, SENTINEL};
pub use slot_pool::{SlotPool, FixedPool, Pool};
pub use stamper::{GenerationStamper, MonotonicStamper, SaltedStamper};
