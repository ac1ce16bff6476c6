/*!
 * Core Module
 * Shared types and limits
 */

pub mod limits;
pub mod types;

pub use types::*;
