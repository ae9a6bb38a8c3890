//! Two-level lock controller
//!
//! ## Lock levels
//!
//! 1. Structure lock: shared/exclusive lock over the key set. Taken
//!    exclusively only by operations that add or remove records.
//! 2. Record locks: one shared/exclusive lock per ISBN, living in the
//!    catalog slot next to the record it guards.
//!
//! ## Protocol
//!
//! ```text
//! batch op:      structure.read  -> presence check -> record locks (ascending ISBN)
//!                -> run callback -> release records -> release structure
//! structural op: structure.write -> mutate key set -> release
//! read_all:      structure.read  -> every record read lock (ascending ISBN)
//! ```
//!
//! Every batch locks its records in ascending ISBN order, and a record lock
//! is only ever taken while the structure lock is held, so no cycle of waits
//! can form. Presence is checked before any record lock is taken, so a
//! `NotFound` batch never blocks on another batch.

use crate::batch::BatchKeys;
use crate::controller::Controller;
use crate::strategy::LockStrategy;
use bookstore_core::{Result, StockRecord};
use bookstore_storage::{Catalog, RecordLock};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use smallvec::SmallVec;
use tracing::trace;

/// Record guards held inline before spilling to the heap
///
/// Most batches touch a handful of ISBNs.
const INLINE_LOCKS: usize = 8;

type ReadGuards<'a> = SmallVec<[RwLockReadGuard<'a, StockRecord>; INLINE_LOCKS]>;
type WriteGuards<'a> = SmallVec<[RwLockWriteGuard<'a, StockRecord>; INLINE_LOCKS]>;

/// Fine-grained controller: structure lock plus per-record locks
///
/// Batches over disjoint ISBN sets run in parallel. Readers of the same
/// ISBN share its lock. Adding or removing books excludes everything else.
pub struct PartitionedLockController {
    /// Structure lock; the catalog's slots are the record locks
    catalog: RwLock<Catalog<RecordLock>>,
}

impl PartitionedLockController {
    /// Create a controller over an empty catalog
    pub fn new() -> Self {
        Self {
            catalog: RwLock::new(Catalog::new()),
        }
    }
}

impl Default for PartitionedLockController {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller for PartitionedLockController {
    fn strategy(&self) -> LockStrategy {
        LockStrategy::Partitioned
    }

    fn add_books(&self, records: Vec<StockRecord>) -> Result<usize> {
        let mut structure = self.catalog.write();
        trace!(records = records.len(), "structure write lock acquired");
        structure.add_books(records)
    }

    fn remove_all_books(&self) -> usize {
        let mut structure = self.catalog.write();
        trace!("structure write lock acquired");
        structure.clear()
    }

    fn read_batch<R, F>(&self, keys: &BatchKeys, f: F) -> Result<R>
    where
        F: FnOnce(&[&StockRecord]) -> Result<R>,
    {
        let structure = self.catalog.read();
        let slots = structure.slots(keys.as_slice())?;

        let guards: ReadGuards<'_> = slots.into_iter().map(|slot| slot.read()).collect();
        trace!(records = guards.len(), "record read locks acquired");

        let records: SmallVec<[&StockRecord; INLINE_LOCKS]> =
            guards.iter().map(|guard| &**guard).collect();
        let result = f(records.as_slice());

        drop(records);
        drop(guards);
        drop(structure);
        result
    }

    fn write_batch<R, F>(&self, keys: &BatchKeys, f: F) -> Result<R>
    where
        F: FnOnce(&mut [&mut StockRecord]) -> Result<R>,
    {
        let structure = self.catalog.read();
        let slots = structure.slots(keys.as_slice())?;

        let mut guards: WriteGuards<'_> = slots.into_iter().map(|slot| slot.write()).collect();
        trace!(records = guards.len(), "record write locks acquired");

        let mut records: SmallVec<[&mut StockRecord; INLINE_LOCKS]> =
            guards.iter_mut().map(|guard| &mut **guard).collect();
        let result = f(records.as_mut_slice());

        drop(records);
        drop(guards);
        drop(structure);
        result
    }

    fn read_all<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&[&StockRecord]) -> R,
    {
        let structure = self.catalog.read();
        let guards: Vec<RwLockReadGuard<'_, StockRecord>> = structure
            .all_slots()
            .into_iter()
            .map(|slot| slot.read())
            .collect();
        trace!(records = guards.len(), "all record read locks acquired");

        let records: Vec<&StockRecord> = guards.iter().map(|guard| &**guard).collect();
        let result = f(&records);

        drop(records);
        drop(guards);
        drop(structure);
        result
    }

    fn record_count(&self) -> usize {
        self.catalog.read().len()
    }
}

impl std::fmt::Debug for PartitionedLockController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PartitionedLockController")
            .field("records", &self.record_count())
            .finish()
    }
}
