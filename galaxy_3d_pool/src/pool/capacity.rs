/// Capacity policies and pool configuration.
///
/// A policy decides what happens when the free list runs dry: a bounded pool
/// reports exhaustion, a growable pool asks for a new chunk of slots.

use crate::error::{Error, Result};
use super::pool_id::SENTINEL;

/// Largest number of slots a pool can hold (every index except `SENTINEL`)
pub const MAX_SLOTS: usize = SENTINEL as usize;

/// Growable pools store slots in pages of `1 << PAGE_SHIFT`
pub(crate) const PAGE_SHIFT: u32 = 8;

/// Largest page a 32-bit index space allows
const MAX_PAGE_SHIFT: u32 = 31;

/// Smallest shift whose page holds `capacity` slots
fn block_shift(capacity: usize) -> u32 {
    if capacity <= 1 {
        return 0;
    }
    (usize::BITS - (capacity - 1).leading_zeros()).min(MAX_PAGE_SHIFT)
}

/// How a growable pool sizes its next chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrowthPolicy {
    /// Append as many slots as the pool already holds
    Double,
    /// Append a fixed number of slots
    Chunk(usize),
}

/// Growable pool configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConfig {
    /// Slots allocated up front
    pub initial_capacity: usize,
    /// Chunk sizing on exhaustion
    pub growth: GrowthPolicy,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 16,
            growth: GrowthPolicy::Double,
        }
    }
}

/// Reaction to an empty free list
pub trait CapacityPolicy {
    /// Number of slots to append to a pool of `size` slots, or the error to report
    ///
    /// A returned count is at least 1 and keeps the pool within `MAX_SLOTS`.
    fn on_exhausted(&mut self, size: usize) -> Result<usize>;

    /// Page size, as a shift, for a pool created with `initial_capacity` slots
    fn page_shift(&self, initial_capacity: usize) -> u32;

    /// Most slots a pool created with `initial_capacity` slots will ever hold
    fn slot_limit(&self, initial_capacity: usize) -> usize;
}

/// Fixed capacity: exhaustion is an error
#[derive(Debug, Default, Clone, Copy)]
pub struct Bounded;

impl CapacityPolicy for Bounded {
    fn on_exhausted(&mut self, size: usize) -> Result<usize> {
        Err(Error::CapacityExhausted { capacity: size })
    }

    /// One page covering the whole pool
    fn page_shift(&self, initial_capacity: usize) -> u32 {
        block_shift(initial_capacity)
    }

    fn slot_limit(&self, initial_capacity: usize) -> usize {
        initial_capacity.min(MAX_SLOTS)
    }
}

/// Unbounded capacity: exhaustion appends a chunk
#[derive(Debug, Clone, Copy)]
pub struct Growable {
    growth: GrowthPolicy,
}

impl Growable {
    /// Growable policy appending chunks sized by `growth`
    pub fn new(growth: GrowthPolicy) -> Self {
        Self { growth }
    }

    /// Chunk sizing applied on exhaustion
    pub fn growth(&self) -> GrowthPolicy {
        self.growth
    }
}

impl Default for Growable {
    fn default() -> Self {
        Self::new(GrowthPolicy::Double)
    }
}

impl CapacityPolicy for Growable {
    fn on_exhausted(&mut self, size: usize) -> Result<usize> {
        let room = MAX_SLOTS.saturating_sub(size);
        if room == 0 {
            return Err(Error::IndexSpaceExhausted);
        }
        let wanted = match self.growth {
            GrowthPolicy::Double => size,
            GrowthPolicy::Chunk(count) => count,
        };
        Ok(wanted.clamp(1, room))
    }

    fn page_shift(&self, _initial_capacity: usize) -> u32 {
        PAGE_SHIFT
    }

    fn slot_limit(&self, _initial_capacity: usize) -> usize {
        MAX_SLOTS
    }
}

#[cfg(test)]
#[path = "capacity_tests.rs"]
mod tests;
