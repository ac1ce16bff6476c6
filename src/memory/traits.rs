/*!
 * Memory Traits
 * Seams between the address-space model and its callers
 */

use super::types::*;
use crate::core::types::{Address, Size};

/// Contiguous allocation interface
pub trait Allocator {
    /// Place `owner` into a hole chosen by `strategy`; returns the start address
    fn allocate(&mut self, owner: &str, size: Size, strategy: FitStrategy) -> MemoryResult<Address>;

    /// Free every block owned by `owner`; returns the bytes freed
    fn release(&mut self, owner: &str) -> MemoryResult<Size>;
}

/// Memory layout inspection
pub trait MemoryInfo {
    /// Aggregate statistics computed in one walk
    fn stats(&self) -> MemoryStats;

    /// Every region in ascending address order
    fn snapshot(&self) -> MemorySnapshot;

    /// Bytes currently owned by `owner`, across all fragments
    fn owned_bytes(&self, owner: &str) -> Size;
}

/// Compaction interface
pub trait Compaction {
    /// Pack owned blocks at the lowest addresses; returns the bytes relocated
    fn compact(&mut self) -> Size;
}

/// Full model trait combining all memory interfaces
pub trait MemoryModel: Allocator + MemoryInfo + Compaction {}

impl<T> MemoryModel for T where T: Allocator + MemoryInfo + Compaction {}
