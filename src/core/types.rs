/*!
 * Core Types
 * Common aliases shared by the model and the shell
 */

use smartstring::alias::String as InlineString;

/// Byte offset into the simulated address range
pub type Address = usize;

/// Size in bytes
pub type Size = usize;

/// Name of the process owning a block
///
/// Process names are short, so they stay inline (up to 23 bytes on 64-bit)
/// and a block split never heap-allocates for the name.
pub type OwnerName = InlineString;
