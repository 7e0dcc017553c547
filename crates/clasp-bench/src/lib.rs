//! Benchmark fixtures for the clasp scope construct.
//!
//! Provides pool builders shared by the criterion benches.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use clasp_pool::{BlockPool, PoolConfig};

/// Build a 64-block pool of 128-byte blocks, the shape used by the
/// acquire/release cycle benches.
pub fn bench_pool() -> BlockPool {
    BlockPool::new(PoolConfig::new(64)).expect("bench pool config is valid")
}
