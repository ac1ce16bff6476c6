/*!
 * Limits and Defaults
 *
 * Centralized constants for the simulator. Keeping them here makes the
 * accepted ranges easy to audit and tune.
 */

use crate::core::types::Size;

// =============================================================================
// MEMORY LIMITS
// =============================================================================

/// Default simulated address-space size (1MB)
/// Used by `AddressSpace::new()` when no size is given on startup
pub const DEFAULT_MEMORY_SIZE: Size = 1024 * 1024;

/// Maximum accepted owner-name length in bytes
/// Longer names are rejected rather than truncated
pub const MAX_OWNER_NAME_LENGTH: usize = 128;

// =============================================================================
// SHELL LIMITS
// =============================================================================

/// Upper bound on one command line in bytes
/// Lines past this are rejected before tokenizing
pub const MAX_COMMAND_LENGTH: usize = 256;
