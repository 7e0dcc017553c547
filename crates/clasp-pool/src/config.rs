//! Pool sizing configuration.

/// Configuration for a [`BlockPool`](crate::BlockPool).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolConfig {
    /// Number of blocks in the pool. Must be at least 1.
    pub block_count: usize,
    /// Size of each block in bytes. Must be a power of two and at least 16.
    pub block_size: usize,
}

impl PoolConfig {
    /// Create a config with the given block count and the default 128-byte
    /// block size.
    pub fn new(block_count: usize) -> Self {
        Self {
            block_count,
            ..Self::default()
        }
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            block_count: 32,
            block_size: 128,
        }
    }
}
