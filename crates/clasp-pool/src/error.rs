//! Error types for the block pool.

use std::error::Error;
use std::fmt;

/// Errors from [`BlockPool`](crate::BlockPool) operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PoolError {
    /// The pool configuration was rejected at construction.
    InvalidConfig {
        /// Human-readable description of the rejected setting.
        reason: String,
    },
    /// All blocks are currently outstanding.
    Exhausted,
    /// The released block does not belong to this pool's current cycle for
    /// its slot: it came from another pool, or the slot has since been
    /// recycled.
    StaleBlock {
        /// Slot index carried by the rejected block.
        slot: usize,
    },
}

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig { reason } => write!(f, "invalid pool config: {reason}"),
            Self::Exhausted => write!(f, "block pool exhausted"),
            Self::StaleBlock { slot } => {
                write!(f, "released block is stale for slot {slot}")
            }
        }
    }
}

impl Error for PoolError {}
