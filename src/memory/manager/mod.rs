/*!
 * Address-Space Manager
 *
 * Ordered block sequence over a fixed range `[0, total)`:
 * - Allocation: fit selection and split-on-allocate
 * - Release: mark by owner and merge adjacent holes
 * - Compaction: slide owned blocks to the lowest addresses
 * - Snapshot: read-side view of every region
 */

mod allocator;
mod arena;
mod compact;
mod release;
mod snapshot;

use arena::{Block, BlockArena, BlockId};

use crate::core::limits::DEFAULT_MEMORY_SIZE;
use crate::core::types::{Address, Size};
use crate::memory::traits::{Allocator, Compaction, MemoryInfo};
use crate::memory::types::*;

use log::info;

/// Contiguous address-space model
///
/// The blocks form a partition of `[0, total_memory)`: they are ordered by
/// address, never overlap and leave no gaps. Exactly one block covers any
/// given address, and no two adjacent blocks are both free.
#[derive(Debug)]
pub struct AddressSpace {
    arena: BlockArena,
    head: BlockId,
    total_memory: Size,
}

impl AddressSpace {
    /// Create a model covering the default range
    pub fn new() -> Self {
        Self::init(DEFAULT_MEMORY_SIZE)
    }

    /// Create a model covering `[0, total)`
    pub fn with_capacity(total: Size) -> MemoryResult<Self> {
        if total == 0 {
            return Err(MemoryError::InvalidSize(total));
        }
        Ok(Self::init(total))
    }

    fn init(total: Size) -> Self {
        let mut arena = BlockArena::new();
        let head = arena.insert(Block {
            low: 0,
            high: total - 1,
            owner: None,
            prev: None,
            next: None,
        });

        info!("address space initialized: {} bytes, one hole", total);

        Self {
            arena,
            head,
            total_memory: total,
        }
    }

    /// Simulated address-space size in bytes
    pub fn total_memory(&self) -> Size {
        self.total_memory
    }

    /// Number of blocks, holes included
    pub fn block_count(&self) -> usize {
        self.arena.len()
    }

    /// Walk the blocks in ascending address order
    fn blocks(&self) -> impl Iterator<Item = &Block> + '_ {
        std::iter::successors(Some(&self.arena[self.head]), move |block| {
            block.next.map(|id| &self.arena[id])
        })
    }

    /// Whether any block is owned by `owner`
    fn owns_block(&self, owner: &str) -> bool {
        self.blocks().any(|block| block.owner.as_deref() == Some(owner))
    }
}

impl Default for AddressSpace {
    fn default() -> Self {
        Self::new()
    }
}

impl Allocator for AddressSpace {
    fn allocate(&mut self, owner: &str, size: Size, strategy: FitStrategy) -> MemoryResult<Address> {
        AddressSpace::allocate(self, owner, size, strategy)
    }

    fn release(&mut self, owner: &str) -> MemoryResult<Size> {
        AddressSpace::release(self, owner)
    }
}

impl MemoryInfo for AddressSpace {
    fn stats(&self) -> MemoryStats {
        AddressSpace::stats(self)
    }

    fn snapshot(&self) -> MemorySnapshot {
        AddressSpace::snapshot(self)
    }

    fn owned_bytes(&self, owner: &str) -> Size {
        AddressSpace::owned_bytes(self, owner)
    }
}

impl Compaction for AddressSpace {
    fn compact(&mut self) -> Size {
        AddressSpace::compact(self)
    }
}
