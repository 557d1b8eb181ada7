//! Error types for the Galaxy3D pools
//!
//! This module defines the error types reported by the slot pools and the
//! handle-keyed registries built on top of them.

use std::fmt;
use crate::pool::PoolId;

/// Result type for Galaxy3D pool operations
pub type Result<T> = std::result::Result<T, Error>;

/// Galaxy3D pool errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A bounded pool has no dormant slot left
    CapacityExhausted {
        /// Total slot count of the pool
        capacity: usize,
    },

    /// A growable pool reached the largest index a handle can address
    IndexSpaceExhausted,

    /// Handle index is past the end of the pool
    OutOfBounds {
        /// Index carried by the handle
        index: u32,
        /// Total slot count of the pool
        size: usize,
    },

    /// Handle refers to a slot that was put back or recycled since
    StaleHandle(PoolId),

    /// A registry entry with this name already exists
    DuplicateName(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::CapacityExhausted { capacity } => {
                write!(f, "Pool capacity exhausted ({} slots in use)", capacity)
            }
            Error::IndexSpaceExhausted => write!(f, "Pool index space exhausted"),
            Error::OutOfBounds { index, size } => {
                write!(f, "Handle index {} out of bounds (size = {})", index, size)
            }
            Error::StaleHandle(id) => write!(f, "Stale handle: {}", id),
            Error::DuplicateName(name) => write!(f, "Name already registered: {}", name),
        }
    }
}

impl std::error::Error for Error {}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
