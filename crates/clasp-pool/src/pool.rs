//! The block pool and its outstanding-block handle.

use std::ops::{Deref, DerefMut};

use smallvec::SmallVec;

use crate::config::PoolConfig;
use crate::error::PoolError;

/// An outstanding block acquired from a [`BlockPool`].
///
/// Owns its buffer while outstanding, so reads and writes go through the
/// block itself (it dereferences to `[u8]`) without borrowing the pool.
/// Return it with [`BlockPool::release`]; a block dropped without release
/// simply never returns to the pool, which the pool's accounting will show
/// as a permanently outstanding block.
#[must_use = "a block never returns to the pool unless released"]
#[derive(Debug)]
pub struct Block {
    /// Buffer owned for the duration of the acquisition.
    buf: Box<[u8]>,
    /// Pool slot this block came from.
    slot: usize,
    /// Slot generation at acquisition time; checked on release.
    generation: u32,
}

impl Block {
    /// Pool slot index this block occupies.
    pub fn slot(&self) -> usize {
        self.slot
    }

    /// Block size in bytes.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether the block has zero length (never true for a valid pool).
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

impl Deref for Block {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.buf
    }
}

impl DerefMut for Block {
    fn deref_mut(&mut self) -> &mut [u8] {
        &mut self.buf
    }
}

/// One pool slot: its recycle generation and, while free, its buffer.
struct Slot {
    /// Advances on every release, so a handle from an earlier cycle is
    /// rejected.
    generation: u32,
    /// `Some` while the slot is free, `None` while its block is outstanding.
    buf: Option<Box<[u8]>>,
}

/// Fixed-capacity pool of equally sized byte blocks.
///
/// ```rust
/// use clasp_pool::{BlockPool, PoolConfig};
///
/// let mut pool = BlockPool::new(PoolConfig::new(4)).unwrap();
/// let mut block = pool.acquire().unwrap();
/// block[0] = 0xAB;
/// assert_eq!(pool.outstanding(), 1);
/// pool.release(block).unwrap();
/// assert_eq!(pool.outstanding(), 0);
/// ```
pub struct BlockPool {
    /// All slots, indexed by `Block::slot`.
    slots: Vec<Slot>,
    /// Free slot indices; acquisition pops from the end.
    free: SmallVec<[usize; 32]>,
    /// Sizing, kept for accounting queries.
    config: PoolConfig,
    /// Most blocks simultaneously outstanding over the pool's lifetime.
    high_water: usize,
}

impl BlockPool {
    /// Create a pool with `config.block_count` blocks of
    /// `config.block_size` bytes each.
    ///
    /// Returns `Err(PoolError::InvalidConfig)` if the block count is zero
    /// or the block size is not a power of two of at least 16 bytes, as
    /// documented on [`PoolConfig`].
    pub fn new(config: PoolConfig) -> Result<Self, PoolError> {
        if config.block_count == 0 {
            return Err(PoolError::InvalidConfig {
                reason: "block_count must be >= 1".into(),
            });
        }
        if !config.block_size.is_power_of_two() || config.block_size < 16 {
            return Err(PoolError::InvalidConfig {
                reason: format!(
                    "block_size must be a power of two and >= 16 (got {})",
                    config.block_size,
                ),
            });
        }

        let slots = (0..config.block_count)
            .map(|_| Slot {
                generation: 0,
                buf: Some(vec![0u8; config.block_size].into_boxed_slice()),
            })
            .collect();
        // Reverse so that slot 0 is handed out first.
        let free = (0..config.block_count).rev().collect();

        Ok(Self {
            slots,
            free,
            config,
            high_water: 0,
        })
    }

    /// Acquire a zero-filled block.
    ///
    /// Returns `Err(PoolError::Exhausted)` when every block is outstanding.
    pub fn acquire(&mut self) -> Result<Block, PoolError> {
        let slot = self.free.pop().ok_or(PoolError::Exhausted)?;
        let mut buf = self.slots[slot]
            .buf
            .take()
            .expect("free slot retains its buffer");
        buf.fill(0);

        self.high_water = self.high_water.max(self.outstanding());
        Ok(Block {
            buf,
            slot,
            generation: self.slots[slot].generation,
        })
    }

    /// Return a block to the pool.
    ///
    /// Returns `Err(PoolError::StaleBlock)` if the block does not match this
    /// pool's current cycle for its slot: it was acquired from a different
    /// pool, or the slot has been recycled since. The generation tag is a
    /// debugging aid, not a security boundary: two pools of identical shape
    /// and history carry identical tags.
    pub fn release(&mut self, block: Block) -> Result<(), PoolError> {
        let Block {
            buf,
            slot,
            generation,
        } = block;
        if slot >= self.slots.len() {
            return Err(PoolError::StaleBlock { slot });
        }
        let entry = &mut self.slots[slot];
        if entry.buf.is_some() || entry.generation != generation {
            return Err(PoolError::StaleBlock { slot });
        }

        entry.buf = Some(buf);
        entry.generation = entry.generation.wrapping_add(1);
        self.free.push(slot);
        Ok(())
    }

    /// Number of blocks currently outstanding.
    pub fn outstanding(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Total number of blocks in the pool.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Size of each block in bytes.
    pub fn block_size(&self) -> usize {
        self.config.block_size
    }

    /// Most blocks simultaneously outstanding over the pool's lifetime.
    pub fn high_water(&self) -> usize {
        self.high_water
    }

    /// Total byte commitment of the pool, counting outstanding blocks.
    pub fn memory_bytes(&self) -> usize {
        self.config.block_count * self.config.block_size
    }
}
