//! Operation counters
//!
//! Lock-free counters bumped once per engine operation. A rejected
//! operation is one that returned an error; it changed nothing.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Live counters owned by an engine
#[derive(Debug, Default)]
pub struct EngineMetrics {
    committed: AtomicU64,
    rejected: AtomicU64,
}

impl EngineMetrics {
    /// Create zeroed counters
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a successful operation
    #[inline]
    pub fn record_commit(&self) {
        self.committed.fetch_add(1, Ordering::Relaxed);
    }

    /// Count a failed operation
    #[inline]
    pub fn record_reject(&self) {
        self.rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Read the counters
    ///
    /// The two counters are read independently; under concurrent load the
    /// snapshot is approximate.
    pub fn snapshot(&self) -> MetricsSnapshot {
        let committed = self.committed.load(Ordering::Relaxed);
        let rejected = self.rejected.load(Ordering::Relaxed);
        let operations = committed + rejected;
        MetricsSnapshot {
            operations_committed: committed,
            operations_rejected: rejected,
            operations,
            commit_rate: if operations == 0 {
                1.0
            } else {
                committed as f64 / operations as f64
            },
        }
    }
}

/// Point-in-time copy of [`EngineMetrics`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    /// Operations that succeeded
    pub operations_committed: u64,
    /// Operations that failed without effect
    pub operations_rejected: u64,
    /// Total operations (commits + rejections)
    pub operations: u64,
    /// Commit success rate (0.0 - 1.0); 1.0 before any operation
    pub commit_rate: f64,
}
