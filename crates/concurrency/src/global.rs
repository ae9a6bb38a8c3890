//! Single-lock controller
//!
//! One mutex guards the entire catalog. Every operation takes it for its
//! full duration, so operations execute one at a time in an order
//! consistent with real time.
//!
//! ```text
//! 1. lock catalog
//! 2. check presence / validate against current state
//! 3. read or apply
//! 4. unlock
//! ```
//!
//! Readers block writers and vice versa. Operations on disjoint ISBNs
//! cannot overlap.

use crate::batch::BatchKeys;
use crate::controller::Controller;
use crate::strategy::LockStrategy;
use bookstore_core::{Result, StockRecord};
use bookstore_storage::Catalog;
use parking_lot::Mutex;

/// Coarse controller: the whole catalog behind one exclusive lock
///
/// # Thread Safety
///
/// The catalog lock is held across validation and apply, so no other
/// operation can change a record between the check of a batch (presence,
/// stock) and its application.
pub struct GlobalLockController {
    /// Catalog serialization lock
    catalog: Mutex<Catalog<StockRecord>>,
}

impl GlobalLockController {
    /// Create a controller over an empty catalog
    pub fn new() -> Self {
        Self {
            catalog: Mutex::new(Catalog::new()),
        }
    }
}

impl Default for GlobalLockController {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller for GlobalLockController {
    fn strategy(&self) -> LockStrategy {
        LockStrategy::Global
    }

    fn add_books(&self, records: Vec<StockRecord>) -> Result<usize> {
        self.catalog.lock().add_books(records)
    }

    fn remove_all_books(&self) -> usize {
        self.catalog.lock().clear()
    }

    fn read_batch<R, F>(&self, keys: &BatchKeys, f: F) -> Result<R>
    where
        F: FnOnce(&[&StockRecord]) -> Result<R>,
    {
        let catalog = self.catalog.lock();
        let records = catalog.slots(keys.as_slice())?;
        f(&records)
    }

    fn write_batch<R, F>(&self, keys: &BatchKeys, f: F) -> Result<R>
    where
        F: FnOnce(&mut [&mut StockRecord]) -> Result<R>,
    {
        let mut catalog = self.catalog.lock();
        let mut records = catalog.slots_mut(keys.as_slice())?;
        f(&mut records)
    }

    fn read_all<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&[&StockRecord]) -> R,
    {
        let catalog = self.catalog.lock();
        let records = catalog.all_slots();
        f(&records)
    }

    fn record_count(&self) -> usize {
        self.catalog.lock().len()
    }
}

impl std::fmt::Debug for GlobalLockController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlobalLockController")
            .field("records", &self.record_count())
            .finish()
    }
}
