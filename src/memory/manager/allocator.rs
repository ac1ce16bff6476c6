/*!
 * Allocation
 * Fit selection and split-on-allocate
 */

use super::arena::{Block, BlockId};
use super::AddressSpace;
use crate::core::limits::MAX_OWNER_NAME_LENGTH;
use crate::core::types::{Address, Size};
use crate::memory::types::{FitStrategy, MemoryError, MemoryResult};

use log::{debug, error, info, warn};

impl AddressSpace {
    /// Place `owner` into a hole chosen by `strategy`
    ///
    /// An exact fit converts the hole in place. Otherwise the hole splits
    /// into a leading owned block and a trailing hole, so the returned
    /// address is always the low bound of the chosen hole. On failure the
    /// model is left untouched.
    pub fn allocate(
        &mut self,
        owner: &str,
        size: Size,
        strategy: FitStrategy,
    ) -> MemoryResult<Address> {
        if size == 0 {
            warn!("allocation rejected: zero-byte request from {:?}", owner);
            return Err(MemoryError::InvalidSize(size));
        }
        if owner.is_empty() || owner.len() > MAX_OWNER_NAME_LENGTH {
            warn!("allocation rejected: bad owner name {:?}", owner);
            return Err(MemoryError::InvalidOwner(owner.to_string()));
        }
        if self.owns_block(owner) {
            warn!("allocation rejected: {} already owns a block", owner);
            return Err(MemoryError::DuplicateOwner(owner.into()));
        }

        let hole = self.select_hole(size, strategy)?;
        let low = self.arena[hole].low;
        self.place(hole, owner, size);

        info!(
            "allocated [{} - {}] to {} ({} bytes, {})",
            low,
            low + size - 1,
            owner,
            size,
            strategy
        );
        Ok(low)
    }

    /// Scan every hole once and pick one according to `strategy`
    ///
    /// First-fit stops at the first match; best-fit and worst-fit keep the
    /// smallest and largest sufficient hole seen so far, which makes the
    /// lowest-addressed hole win ties.
    fn select_hole(&self, size: Size, strategy: FitStrategy) -> MemoryResult<BlockId> {
        let mut chosen: Option<(BlockId, Size)> = None;
        let mut largest_hole: Size = 0;

        let mut cursor = Some(self.head);
        while let Some(id) = cursor {
            let block = &self.arena[id];
            cursor = block.next;

            if !block.is_free() {
                continue;
            }
            let hole_size = block.size();
            largest_hole = largest_hole.max(hole_size);
            if hole_size < size {
                continue;
            }

            match strategy {
                FitStrategy::FirstFit => {
                    chosen = Some((id, hole_size));
                    break;
                }
                FitStrategy::BestFit => {
                    if chosen.map_or(true, |(_, best)| hole_size < best) {
                        chosen = Some((id, hole_size));
                    }
                }
                FitStrategy::WorstFit => {
                    if chosen.map_or(true, |(_, worst)| hole_size > worst) {
                        chosen = Some((id, hole_size));
                    }
                }
            }
        }

        match chosen {
            Some((id, hole_size)) => {
                debug!(
                    "{} chose hole [{} - {}] ({} bytes) for a {}-byte request",
                    strategy, self.arena[id].low, self.arena[id].high, hole_size, size
                );
                Ok(id)
            }
            None => {
                error!(
                    "no fitting hole: {} bytes requested, largest hole is {} bytes",
                    size, largest_hole
                );
                Err(MemoryError::NoFittingHole {
                    requested: size,
                    largest_hole,
                })
            }
        }
    }

    /// Claim the low end of `hole` for `owner`, splitting off the remainder
    fn place(&mut self, hole: BlockId, owner: &str, size: Size) {
        let (low, high, next) = {
            let block = &self.arena[hole];
            (block.low, block.high, block.next)
        };

        self.arena[hole].owner = Some(owner.into());
        if high - low + 1 == size {
            // exact fit, no remainder
            return;
        }

        let remainder = self.arena.insert(Block {
            low: low + size,
            high,
            owner: None,
            prev: Some(hole),
            next,
        });
        self.arena[hole].high = low + size - 1;
        self.arena[hole].next = Some(remainder);
        if let Some(next_id) = next {
            self.arena[next_id].prev = Some(remainder);
        }
    }
}
