/*!
 * Contiguous Allocation Simulator
 *
 * Models one span of memory as an ordered sequence of blocks, with
 * fit-based placement, coalescing release and compaction, plus the
 * line-oriented shell that drives it.
 */

pub mod core;
pub mod memory;
pub mod shell;

// Re-export the common surface
pub use memory::{
    AddressSpace, Allocator, Compaction, FitStrategy, MemoryError, MemoryInfo, MemoryModel,
    MemoryResult, MemorySnapshot, MemoryStats, Region,
};
pub use shell::{Command, Shell, ShellError};
