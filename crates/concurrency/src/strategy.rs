//! Strategy selection
//!
//! The locking strategy is fixed when a store is built. [`StrategyController`]
//! lets the choice be made from configuration at runtime while engine code
//! stays generic over [`Controller`].

use crate::batch::BatchKeys;
use crate::controller::Controller;
use crate::global::GlobalLockController;
use crate::partitioned::PartitionedLockController;
use bookstore_core::{Result, StockRecord, StoreError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which locking discipline protects the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LockStrategy {
    /// One exclusive lock around every operation
    Global,
    /// Structure lock plus per-record locks
    #[default]
    Partitioned,
}

impl LockStrategy {
    /// Every strategy, for running the same checks against each
    pub const ALL: [LockStrategy; 2] = [LockStrategy::Global, LockStrategy::Partitioned];

    /// Configuration name
    pub fn as_str(&self) -> &'static str {
        match self {
            LockStrategy::Global => "global",
            LockStrategy::Partitioned => "partitioned",
        }
    }
}

impl fmt::Display for LockStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LockStrategy {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "global" => Ok(LockStrategy::Global),
            "partitioned" => Ok(LockStrategy::Partitioned),
            other => Err(StoreError::validation(format!(
                "unknown lock strategy '{}' (expected 'global' or 'partitioned')",
                other
            ))),
        }
    }
}

/// A controller of either strategy, chosen at construction
#[derive(Debug)]
pub enum StrategyController {
    /// Single-lock controller
    Global(GlobalLockController),
    /// Two-level lock controller
    Partitioned(PartitionedLockController),
}

impl StrategyController {
    /// Create an empty controller for the given strategy
    pub fn new(strategy: LockStrategy) -> Self {
        match strategy {
            LockStrategy::Global => StrategyController::Global(GlobalLockController::new()),
            LockStrategy::Partitioned => {
                StrategyController::Partitioned(PartitionedLockController::new())
            }
        }
    }
}

impl Default for StrategyController {
    fn default() -> Self {
        Self::new(LockStrategy::default())
    }
}

impl From<LockStrategy> for StrategyController {
    fn from(strategy: LockStrategy) -> Self {
        Self::new(strategy)
    }
}

impl Controller for StrategyController {
    fn strategy(&self) -> LockStrategy {
        match self {
            StrategyController::Global(c) => c.strategy(),
            StrategyController::Partitioned(c) => c.strategy(),
        }
    }

    fn add_books(&self, records: Vec<StockRecord>) -> Result<usize> {
        match self {
            StrategyController::Global(c) => c.add_books(records),
            StrategyController::Partitioned(c) => c.add_books(records),
        }
    }

    fn remove_all_books(&self) -> usize {
        match self {
            StrategyController::Global(c) => c.remove_all_books(),
            StrategyController::Partitioned(c) => c.remove_all_books(),
        }
    }

    fn read_batch<R, F>(&self, keys: &BatchKeys, f: F) -> Result<R>
    where
        F: FnOnce(&[&StockRecord]) -> Result<R>,
    {
        match self {
            StrategyController::Global(c) => c.read_batch(keys, f),
            StrategyController::Partitioned(c) => c.read_batch(keys, f),
        }
    }

    fn write_batch<R, F>(&self, keys: &BatchKeys, f: F) -> Result<R>
    where
        F: FnOnce(&mut [&mut StockRecord]) -> Result<R>,
    {
        match self {
            StrategyController::Global(c) => c.write_batch(keys, f),
            StrategyController::Partitioned(c) => c.write_batch(keys, f),
        }
    }

    fn read_all<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&[&StockRecord]) -> R,
    {
        match self {
            StrategyController::Global(c) => c.read_all(f),
            StrategyController::Partitioned(c) => c.read_all(f),
        }
    }

    fn record_count(&self) -> usize {
        match self {
            StrategyController::Global(c) => c.record_count(),
            StrategyController::Partitioned(c) => c.record_count(),
        }
    }
}
