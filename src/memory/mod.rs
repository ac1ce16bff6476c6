/*!
 * Memory Module
 * Contiguous address-space model with fit-based placement
 */

pub mod manager;
pub mod traits;
pub mod types;

pub use manager::AddressSpace;
pub use traits::*;
pub use types::*;
