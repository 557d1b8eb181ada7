/*!
# Galaxy 3D Pool

Generational slot pools for the Galaxy3D engine.

Engine subsystems keep `PoolId` handles to pooled objects instead of raw
pointers. A handle is an `(index, generation)` pair: it resolves to its object
while the slot is live and stops resolving as soon as the slot is put back,
even after the slot has been reused for another object.

## Architecture

- **FixedPool**: bounded pool over one contiguous block, checkout fails when full
- **Pool**: growable pool over paged storage, checkout appends slots when full
- **PoolId**: copyable handle, plain-old-data for GPU upload
- **GenerationStamper**: strategy deriving a fresh generation on each checkout
- **AssetRegistry**: named assets stored in a pool and addressed by handle

Both pool flavors share one allocator (`SlotPool`) parameterized by a
capacity policy and a generation stamper.
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod pool;
pub mod resource;

// Main galaxy3d namespace module
pub mod galaxy3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging host
    pub use crate::engine::Engine;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Pool sub-module
    pub mod pool {
        pub use crate::pool::*;
    }

    // Resource sub-module
    pub mod resource {
        pub use crate::resource::*;
    }
}
