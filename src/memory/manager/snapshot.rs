/*!
 * Snapshot and Statistics
 * Read-side projections of the block sequence
 */

use super::AddressSpace;
use crate::core::types::Size;
use crate::memory::types::{MemorySnapshot, MemoryStats, Region};

impl AddressSpace {
    /// Every region in ascending address order; pure read
    pub fn snapshot(&self) -> MemorySnapshot {
        let regions = self
            .blocks()
            .map(|block| Region {
                low: block.low,
                high: block.high,
                owner: block.owner.clone(),
            })
            .collect();

        MemorySnapshot {
            total_memory: self.total_memory,
            regions,
        }
    }

    /// Aggregate counters computed in one walk
    pub fn stats(&self) -> MemoryStats {
        let mut used_memory: Size = 0;
        let mut allocated_blocks = 0;
        let mut free_blocks = 0;
        let mut largest_hole: Size = 0;

        for block in self.blocks() {
            if block.is_free() {
                free_blocks += 1;
                largest_hole = largest_hole.max(block.size());
            } else {
                allocated_blocks += 1;
                used_memory += block.size();
            }
        }

        MemoryStats {
            total_memory: self.total_memory,
            used_memory,
            available_memory: self.total_memory - used_memory,
            usage_percentage: (used_memory as f64 / self.total_memory as f64) * 100.0,
            allocated_blocks,
            free_blocks,
            largest_hole,
        }
    }

    /// Bytes owned by `owner` across all of its fragments
    pub fn owned_bytes(&self, owner: &str) -> Size {
        self.blocks()
            .filter(|block| block.owner.as_deref() == Some(owner))
            .map(|block| block.size())
            .sum()
    }
}
