/// Generation stamping strategies.
///
/// A stamper is asked for a fresh generation every time a slot is checked out.
/// The returned value must never be `SENTINEL` and never the slot's previous
/// generation, so handles from the previous life of the slot stop validating.

use std::sync::atomic::{AtomicU32, Ordering};
use super::pool_id::SENTINEL;

/// Source of salts for `SaltedStamper`, one per stamper instance
static NEXT_SALT: AtomicU32 = AtomicU32::new(1);

/// Produces the generation stamped into a slot on checkout
pub trait GenerationStamper {
    /// Compute the next generation for slot `index`
    ///
    /// `previous` is the generation the slot held during its last life, or
    /// `SENTINEL` if it was never checked out.
    fn stamp(&mut self, index: u32, previous: u32) -> u32;
}

/// Per-slot monotonic counter (the default)
///
/// Each slot counts its own lives, wrapping around and skipping `SENTINEL`.
/// A slot never sees the same generation twice before 2^32 - 1 checkouts.
#[derive(Debug, Default, Clone, Copy)]
pub struct MonotonicStamper;

impl GenerationStamper for MonotonicStamper {
    fn stamp(&mut self, _index: u32, previous: u32) -> u32 {
        let next = previous.wrapping_add(1);
        if next == SENTINEL {
            next.wrapping_add(1)
        } else {
            next
        }
    }
}

/// Ticket-based stamper salted with the pool instance and the slot index
///
/// Generation = `ticket * 13 + salt * 17 + index * 23` (wrapping), where the
/// ticket increases on every checkout. Handles from different pools are
/// unlikely to collide, but two lives of the same slot may in theory receive
/// equal stamps after enough checkouts. Only `SENTINEL` and the immediately
/// preceding generation are ruled out.
#[derive(Debug, Clone)]
pub struct SaltedStamper {
    ticket: u32,
    salt: u32,
}

impl SaltedStamper {
    /// Create a stamper with a salt unique to this process
    pub fn new() -> Self {
        Self::with_salt(NEXT_SALT.fetch_add(1, Ordering::Relaxed))
    }

    /// Create a stamper with an explicit salt
    pub fn with_salt(salt: u32) -> Self {
        Self { ticket: 0, salt }
    }

    /// Number of stamps issued so far (wrapping)
    pub fn ticket(&self) -> u32 {
        self.ticket
    }

    /// Salt identifying the owning pool
    pub fn salt(&self) -> u32 {
        self.salt
    }
}

impl Default for SaltedStamper {
    fn default() -> Self {
        Self::new()
    }
}

impl GenerationStamper for SaltedStamper {
    fn stamp(&mut self, index: u32, previous: u32) -> u32 {
        // 13 is odd, so consecutive tickets always map to distinct values:
        // at most two retries are ever needed.
        loop {
            self.ticket = self.ticket.wrapping_add(1);
            let generation = self.ticket.wrapping_mul(13)
                .wrapping_add(self.salt.wrapping_mul(17))
                .wrapping_add(index.wrapping_mul(23));
            if generation != SENTINEL && generation != previous {
                return generation;
            }
        }
    }
}

#[cfg(test)]
#[path = "stamper_tests.rs"]
mod tests;
