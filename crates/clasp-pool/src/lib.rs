//! Fixed-capacity memory-block pool.
//!
//! A small allocator in the style of an RTOS block pool: a fixed number of
//! equally sized byte blocks, handed out by [`BlockPool::acquire`] and
//! returned by [`BlockPool::release`]. It exists as the resource
//! collaborator for the `clasp` scope construct (`acquire` in a scope's
//! declaration, `release` in its exit action), but it is usable on its own.
//!
//! Blocks own their buffers while outstanding, so a block can be read and
//! written without holding a borrow of the pool. Each slot carries a
//! generation tag that advances on every release, which lets the pool
//! reject a block that was not acquired from it (or not from this slot's
//! current cycle).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod pool;

// Public re-exports for the primary API surface.
pub use config::PoolConfig;
pub use error::PoolError;
pub use pool::{Block, BlockPool};
