/*!
 * Compaction
 * Slide owned blocks to the lowest addresses in one pass
 */

use super::arena::BlockId;
use super::AddressSpace;
use crate::core::types::Size;

use log::info;

impl AddressSpace {
    /// Pack every owned block at the bottom of the range, preserving order
    ///
    /// Walking left to right, an owned block directly after a hole trades
    /// ranges with it, and a hole directly after a hole merges into it. The
    /// result is all owned blocks first, then at most one trailing hole.
    /// Owner names never change, only addresses do.
    pub fn compact(&mut self) -> Size {
        let mut moved: Size = 0;

        let mut cursor = Some(self.head);
        while let Some(id) = cursor {
            if let Some(prev_id) = self.arena[id].prev {
                if self.arena[prev_id].is_free() {
                    if self.arena[id].is_free() {
                        self.absorb_prev(id, prev_id);
                    } else {
                        moved += self.swap_down(id, prev_id);
                    }
                }
            }
            cursor = self.arena[id].next;
        }

        info!("compaction relocated {} bytes", moved);
        moved
    }

    /// Move the owner of `id` down into the hole before it
    ///
    /// The two blocks trade extents: the hole takes the owner and shrinks
    /// or grows to the owned length at its own low address, and `id`
    /// becomes the hole covering what is left above.
    fn swap_down(&mut self, id: BlockId, prev_id: BlockId) -> Size {
        let length = self.arena[id].size();
        let owner = self.arena[id].owner.take();

        let prev_low = self.arena[prev_id].low;
        self.arena[prev_id].high = prev_low + length - 1;
        self.arena[prev_id].owner = owner;
        self.arena[id].low = prev_low + length;

        length
    }
}
