/// Pool handle: an `(index, generation)` pair naming one life of one slot.
///
/// A `PoolId` carries no ownership. The pool owns every object; the handle is
/// a lookup capability that turns invalid as soon as its slot is put back.

use std::fmt;
use bytemuck::{Pod, Zeroable};

/// Reserved index/generation value meaning "none"
pub const SENTINEL: u32 = u32::MAX;

/// Handle to a pooled object
///
/// Plain-old-data so it can be copied into GPU buffers with `bytemuck`.
/// The default value is the null handle, which no pool ever validates.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct PoolId {
    index: u32,
    generation: u32,
}

impl PoolId {
    /// The null handle (sentinel index and generation)
    pub const NULL: PoolId = PoolId {
        index: SENTINEL,
        generation: SENTINEL,
    };

    /// Build a handle from its raw parts
    pub const fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Slot index
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Generation stamp of the slot life this handle names
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Whether this is the null handle
    pub fn is_null(&self) -> bool {
        self.index == SENTINEL
    }

    /// Pack into a single `u64` (generation in the high half)
    pub fn to_bits(self) -> u64 {
        (u64::from(self.generation) << 32) | u64::from(self.index)
    }

    /// Unpack a value produced by [`PoolId::to_bits`]
    pub fn from_bits(bits: u64) -> Self {
        Self {
            index: bits as u32,
            generation: (bits >> 32) as u32,
        }
    }
}

impl Default for PoolId {
    fn default() -> Self {
        Self::NULL
    }
}

impl fmt::Debug for PoolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            write!(f, "PoolId(null)")
        } else {
            write!(f, "PoolId({}v{})", self.index, self.generation)
        }
    }
}

impl fmt::Display for PoolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            write!(f, "null")
        } else {
            write!(f, "{}v{}", self.index, self.generation)
        }
    }
}

#[cfg(test)]
#[path = "pool_id_tests.rs"]
mod tests;
