/*!
 * Block Arena
 * Slab storage giving blocks stable handles and option-typed neighbor links
 */

use crate::core::types::{Address, OwnerName, Size};
use std::ops::{Index, IndexMut};

/// Stable handle to a block slot (32-bit to keep links small)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct BlockId(u32);

impl BlockId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// One contiguous block of the address space
///
/// A block is a hole when `owner` is `None`. Bounds are inclusive, and the
/// links order blocks by ascending address.
#[derive(Debug, Clone)]
pub(super) struct Block {
    pub low: Address,
    pub high: Address,
    pub owner: Option<OwnerName>,
    pub prev: Option<BlockId>,
    pub next: Option<BlockId>,
}

impl Block {
    pub fn size(&self) -> Size {
        self.high - self.low + 1
    }

    pub fn is_free(&self) -> bool {
        self.owner.is_none()
    }
}

/// Vec-backed slab with slot recycling
///
/// Splits claim a slot, merges return one. A handle stays valid until its
/// slot is removed; the model never keeps handles across removals.
#[derive(Debug, Default)]
pub(super) struct BlockArena {
    slots: Vec<Option<Block>>,
    vacant: Vec<BlockId>,
    live: usize,
}

impl BlockArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a block, reusing a vacant slot when one exists
    pub fn insert(&mut self, block: Block) -> BlockId {
        self.live += 1;
        match self.vacant.pop() {
            Some(id) => {
                self.slots[id.index()] = Some(block);
                id
            }
            None => {
                let id = BlockId(self.slots.len() as u32);
                self.slots.push(Some(block));
                id
            }
        }
    }

    /// Take a block out and mark its slot for reuse
    pub fn remove(&mut self, id: BlockId) -> Block {
        let block = self.slots[id.index()].take().expect("stale block handle");
        self.vacant.push(id);
        self.live -= 1;
        block
    }

    /// Number of live blocks
    pub fn len(&self) -> usize {
        self.live
    }
}

impl Index<BlockId> for BlockArena {
    type Output = Block;

    fn index(&self, id: BlockId) -> &Block {
        self.slots[id.index()].as_ref().expect("stale block handle")
    }
}

impl IndexMut<BlockId> for BlockArena {
    fn index_mut(&mut self, id: BlockId) -> &mut Block {
        self.slots[id.index()].as_mut().expect("stale block handle")
    }
}
