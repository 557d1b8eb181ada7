//! Generational slot pool.
//!
//! One allocator serves both pool flavors: `FixedPool` (bounded, checkout
//! fails when full) and `Pool` (growable, checkout appends slots). Objects
//! are default-constructed when their slot is created and recycled in place.
//! Callers hold `PoolId` handles instead of references; a handle stops
//! resolving as soon as its slot is put back, even after the slot is reused.
//!
//! # Example
//!
//! ```
//! use galaxy_3d_pool::galaxy3d::pool::FixedPool;
//!
//! let mut pool = FixedPool::<String>::new(2);
//! let a = pool.checkout().unwrap();
//! pool.get_mut(a).unwrap().push_str("hero");
//!
//! pool.put_back(a);
//! assert!(pool.get(a).is_none());
//!
//! let b = pool.checkout().unwrap();
//! assert_eq!(a.index(), b.index());
//! assert_ne!(a.generation(), b.generation());
//! ```

use crate::error::{Error, Result};
use crate::{engine_debug, engine_err, engine_trace, engine_warn};
use super::capacity::{Bounded, CapacityPolicy, Growable, PoolConfig, MAX_SLOTS};
use super::pool_id::{PoolId, SENTINEL};
use super::slot_storage::{Slot, SlotStorage};
use super::stamper::{GenerationStamper, MonotonicStamper};

const SOURCE: &str = "galaxy3d::Pool";

/// Generic pool over slots of `T`
///
/// `P` decides what happens on exhaustion, `S` how generations are stamped.
/// Use the [`FixedPool`] and [`Pool`] aliases.
pub struct SlotPool<T, P, S = MonotonicStamper> {
    slots: SlotStorage<T>,
    /// Head of the free list (`SENTINEL` when no slot is dormant)
    next_free: u32,
    alive_count: usize,
    policy: P,
    stamper: S,
}

/// Bounded pool over one contiguous block
pub type FixedPool<T, S = MonotonicStamper> = SlotPool<T, Bounded, S>;

/// Growable pool over paged storage
pub type Pool<T, S = MonotonicStamper> = SlotPool<T, Growable, S>;

// ===== SHARED PROTOCOL =====

impl<T, P, S> SlotPool<T, P, S>
where
    P: CapacityPolicy,
    S: GenerationStamper,
{
    fn from_parts(capacity: usize, policy: P, stamper: S) -> Self
    where
        T: Default,
    {
        let capacity = capacity.min(MAX_SLOTS);
        let slots = SlotStorage::new(policy.page_shift(capacity), policy.slot_limit(capacity));
        let mut pool = Self {
            slots,
            next_free: SENTINEL,
            alive_count: 0,
            policy,
            stamper,
        };
        if capacity > 0 {
            pool.next_free = pool.slots.push_chunk(capacity, SENTINEL);
        }
        pool
    }

    /// Check out a dormant slot, applying the capacity policy when none is left
    ///
    /// # Errors
    ///
    /// Returns the policy's error (`CapacityExhausted` for bounded pools,
    /// `IndexSpaceExhausted` for growable ones). The pool is left unmodified.
    pub fn try_checkout(&mut self) -> Result<PoolId>
    where
        T: Default,
    {
        if self.next_free == SENTINEL {
            let size = self.slots.len();
            let additional = self.policy.on_exhausted(size)
                .map_err(|error| engine_err!(SOURCE, error))?;
            self.next_free = self.slots.push_chunk(additional, SENTINEL);
            engine_debug!(SOURCE, "Grew pool from {} to {} slots ({} pages)",
                size, self.slots.len(), self.slots.page_count());
        }

        let index = self.next_free;
        let slot = &mut self.slots[index];
        self.next_free = slot.next;
        slot.generation = self.stamper.stamp(index, slot.generation);
        slot.next = SENTINEL;
        slot.alive = true;
        self.alive_count += 1;

        Ok(PoolId::new(index, slot.generation))
    }

    /// Return a slot to the free list
    ///
    /// Returns false (and changes nothing) if the handle is null, out of
    /// bounds, or stale. Putting back the same handle twice is harmless.
    pub fn put_back(&mut self, id: PoolId) -> bool {
        let size = self.slots.len();
        let Some(slot) = self.slots.get_mut(id.index()) else {
            if !id.is_null() {
                engine_warn!(SOURCE, "put_back: handle {} out of bounds (size = {})", id, size);
            }
            return false;
        };
        if !slot.is_live(id.generation()) {
            engine_trace!(SOURCE, "put_back: ignoring stale handle {}", id);
            return false;
        }

        slot.alive = false;
        slot.next = self.next_free;
        self.next_free = id.index();
        self.alive_count -= 1;
        true
    }

    /// Return every slot to the free list, leaving payloads untouched
    ///
    /// All outstanding handles become invalid.
    pub fn put_back_all(&mut self) {
        self.next_free = self.slots.relink_all();
        self.alive_count = 0;
        engine_trace!(SOURCE, "put_back_all: {} slots dormant", self.slots.len());
    }

    /// Whether `id` names a live object of this pool
    pub fn is_valid(&self, id: PoolId) -> bool {
        self.live_slot(id).is_some()
    }

    /// Borrow the object behind `id`, or `None` if the handle is invalid
    pub fn get(&self, id: PoolId) -> Option<&T> {
        self.live_slot(id).map(|slot| &slot.object)
    }

    /// Mutably borrow the object behind `id`, or `None` if the handle is invalid
    pub fn get_mut(&mut self, id: PoolId) -> Option<&mut T> {
        self.slots.get_mut(id.index())
            .filter(|slot| slot.is_live(id.generation()))
            .map(|slot| &mut slot.object)
    }

    /// Borrow the object behind `id`, reporting why the handle failed
    ///
    /// # Errors
    ///
    /// - `OutOfBounds` if the index is past the end of the pool (null included)
    /// - `StaleHandle` if the slot is dormant or was recycled
    pub fn try_get(&self, id: PoolId) -> Result<&T> {
        let size = self.slots.len();
        let slot = self.slots.get(id.index())
            .ok_or(Error::OutOfBounds { index: id.index(), size })?;
        if slot.is_live(id.generation()) {
            Ok(&slot.object)
        } else {
            Err(Error::StaleHandle(id))
        }
    }

    /// Mutable counterpart of [`SlotPool::try_get`]
    pub fn try_get_mut(&mut self, id: PoolId) -> Result<&mut T> {
        let size = self.slots.len();
        let slot = self.slots.get_mut(id.index())
            .ok_or(Error::OutOfBounds { index: id.index(), size })?;
        if slot.is_live(id.generation()) {
            Ok(&mut slot.object)
        } else {
            Err(Error::StaleHandle(id))
        }
    }

    /// Live objects with their handles, in index order
    pub fn iter(&self) -> impl Iterator<Item = (PoolId, &T)> + '_ {
        (0u32..).zip(self.slots.iter())
            .filter(|(_, slot)| slot.alive)
            .map(|(index, slot)| (PoolId::new(index, slot.generation), &slot.object))
    }

    /// Live objects with their handles, in index order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PoolId, &mut T)> + '_ {
        (0u32..).zip(self.slots.iter_mut())
            .filter(|(_, slot)| slot.alive)
            .map(|(index, slot)| (PoolId::new(index, slot.generation), &mut slot.object))
    }

    /// Number of live objects
    pub fn live_count(&self) -> usize {
        self.alive_count
    }

    /// Number of dormant slots (`size() - live_count()`)
    pub fn remaining_count(&self) -> usize {
        self.slots.len() - self.alive_count
    }

    /// Total number of slots
    pub fn size(&self) -> usize {
        self.slots.len()
    }

    /// Largest number of slots a handle can address
    pub fn max_size(&self) -> usize {
        MAX_SLOTS
    }

    /// Hard reset: fresh default payloads, every slot dormant
    ///
    /// All outstanding handles become invalid. Slots keep their generation so
    /// handles issued before the reset never validate again.
    pub fn clear(&mut self)
    where
        T: Default,
    {
        for slot in self.slots.iter_mut() {
            slot.object = T::default();
        }
        self.next_free = self.slots.relink_all();
        self.alive_count = 0;
        engine_trace!(SOURCE, "clear: {} slots reset", self.slots.len());
    }

    /// Exchange the whole contents of two pools
    ///
    /// Handles follow the slots they name.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    fn live_slot(&self, id: PoolId) -> Option<&Slot<T>> {
        self.slots.get(id.index())
            .filter(|slot| slot.is_live(id.generation()))
    }
}

// ===== FIXED POOL =====

impl<T: Default> SlotPool<T, Bounded, MonotonicStamper> {
    /// Create a bounded pool of `size` default-constructed slots
    pub fn new(size: usize) -> Self {
        Self::from_parts(size, Bounded, MonotonicStamper)
    }
}

impl<T: Default, S: GenerationStamper> SlotPool<T, Bounded, S> {
    /// Create a bounded pool with a custom generation stamper
    pub fn with_stamper(size: usize, stamper: S) -> Self {
        Self::from_parts(size, Bounded, stamper)
    }

    /// Check out a dormant slot
    ///
    /// # Errors
    ///
    /// Returns `CapacityExhausted` when every slot is live. The pool is left
    /// unmodified.
    pub fn checkout(&mut self) -> Result<PoolId> {
        self.try_checkout()
    }
}

// ===== GROWABLE POOL =====

impl<T: Default> SlotPool<T, Growable, MonotonicStamper> {
    /// Create a growable pool with `initial_capacity` slots, doubling on exhaustion
    pub fn new(initial_capacity: usize) -> Self {
        Self::with_config(PoolConfig {
            initial_capacity,
            ..PoolConfig::default()
        })
    }

    /// Create a growable pool from a configuration
    pub fn with_config(config: PoolConfig) -> Self {
        Self::with_stamper(config, MonotonicStamper)
    }
}

impl<T: Default, S: GenerationStamper> SlotPool<T, Growable, S> {
    /// Create a growable pool with a custom generation stamper
    pub fn with_stamper(config: PoolConfig, stamper: S) -> Self {
        Self::from_parts(config.initial_capacity, Growable::new(config.growth), stamper)
    }

    /// Check out a dormant slot, growing the pool if none is left
    ///
    /// Growth appends slots in fixed-size pages; existing slots never move
    /// and every outstanding handle stays valid.
    ///
    /// # Panics
    ///
    /// Panics if the pool already holds `max_size()` slots, like `Vec::push`
    /// on capacity overflow. Use [`SlotPool::try_checkout`] to get an error instead.
    pub fn checkout(&mut self) -> PoolId {
        match self.try_checkout() {
            Ok(id) => id,
            Err(error) => panic!("{}", error),
        }
    }
}

#[cfg(test)]
#[path = "slot_pool_tests.rs"]
mod tests;
