/*!
 * Memory Types
 * Common types for the contiguous address-space model
 */

use crate::core::types::{Address, OwnerName, Size};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Memory operation result
pub type MemoryResult<T> = Result<T, MemoryError>;

/// Memory operation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MemoryError {
    #[error("no hole fits {requested} bytes (largest hole: {largest_hole} bytes)")]
    NoFittingHole { requested: Size, largest_hole: Size },

    #[error("unknown fit strategy {0:?} (expected F, B or W)")]
    UnknownStrategy(String),

    #[error("no block owned by {0:?}")]
    OwnerNotFound(OwnerName),

    #[error("{0:?} already owns a block")]
    DuplicateOwner(OwnerName),

    #[error("invalid size: {0} bytes")]
    InvalidSize(Size),

    #[error("invalid owner name {0:?}")]
    InvalidOwner(String),
}

/// Hole-selection policy for allocation requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitStrategy {
    /// Lowest-addressed hole that is large enough
    FirstFit,
    /// Smallest hole that is large enough
    BestFit,
    /// Largest hole, provided it is large enough
    WorstFit,
}

impl FitStrategy {
    /// Single-letter tag used by the request command
    pub fn tag(&self) -> char {
        match self {
            FitStrategy::FirstFit => 'F',
            FitStrategy::BestFit => 'B',
            FitStrategy::WorstFit => 'W',
        }
    }
}

impl FromStr for FitStrategy {
    type Err = MemoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "F" => Ok(FitStrategy::FirstFit),
            "B" => Ok(FitStrategy::BestFit),
            "W" => Ok(FitStrategy::WorstFit),
            other => Err(MemoryError::UnknownStrategy(other.to_string())),
        }
    }
}

impl fmt::Display for FitStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FitStrategy::FirstFit => write!(f, "first-fit"),
            FitStrategy::BestFit => write!(f, "best-fit"),
            FitStrategy::WorstFit => write!(f, "worst-fit"),
        }
    }
}

/// One contiguous region of the address space, hole or owned
///
/// Bounds are inclusive: a region covers `[low, high]` and its size is
/// `high - low + 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Region {
    pub low: Address,
    pub high: Address,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<OwnerName>,
}

impl Region {
    pub fn size(&self) -> Size {
        self.high - self.low + 1
    }

    pub fn is_free(&self) -> bool {
        self.owner.is_none()
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.owner {
            Some(owner) => write!(f, "[{:06} - {:06}] Process {}", self.low, self.high, owner),
            None => write!(f, "[{:06} - {:06}] Unused", self.low, self.high),
        }
    }
}

/// Point-in-time view of every region, in ascending address order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct MemorySnapshot {
    pub total_memory: Size,
    pub regions: Vec<Region>,
}

impl fmt::Display for MemorySnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for region in &self.regions {
            writeln!(f, "{}", region)?;
        }
        Ok(())
    }
}

/// Aggregate memory statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct MemoryStats {
    pub total_memory: Size,
    pub used_memory: Size,
    pub available_memory: Size,
    pub usage_percentage: f64,
    pub allocated_blocks: usize,
    pub free_blocks: usize,
    pub largest_hole: Size,
}
