/*!
 * Release
 * Mark-by-owner and merge-on-release
 */

use super::arena::BlockId;
use super::AddressSpace;
use crate::core::types::Size;
use crate::memory::types::{MemoryError, MemoryResult};

use log::{info, warn};

impl AddressSpace {
    /// Free every block owned by `owner`, coalescing adjacent holes
    ///
    /// One left-to-right pass: a block whose owner matches is marked free,
    /// then merged into an immediately preceding hole. Blocks behind the
    /// cursor are already maximal, so the pass leaves no two adjacent holes
    /// anywhere in the sequence.
    pub fn release(&mut self, owner: &str) -> MemoryResult<Size> {
        let mut freed: Size = 0;
        let mut merges = 0usize;

        let mut cursor = Some(self.head);
        while let Some(id) = cursor {
            if self.arena[id].owner.as_deref() == Some(owner) {
                freed += self.arena[id].size();
                self.arena[id].owner = None;
            }
            if self.arena[id].is_free() {
                if let Some(prev_id) = self.arena[id].prev {
                    if self.arena[prev_id].is_free() {
                        self.absorb_prev(id, prev_id);
                        merges += 1;
                    }
                }
            }
            cursor = self.arena[id].next;
        }

        if freed == 0 {
            warn!("release failed: no block owned by {:?}", owner);
            return Err(MemoryError::OwnerNotFound(owner.into()));
        }

        info!("released {} bytes owned by {} ({} hole merges)", freed, owner, merges);
        Ok(freed)
    }

    /// Absorb the hole directly before `id` and recycle its slot
    pub(super) fn absorb_prev(&mut self, id: BlockId, prev_id: BlockId) {
        let prev = self.arena.remove(prev_id);
        self.arena[id].low = prev.low;
        self.arena[id].prev = prev.prev;
        match prev.prev {
            Some(before) => self.arena[before].next = Some(id),
            None => self.head = id,
        }
    }
}
