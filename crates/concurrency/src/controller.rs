//! The locking strategy seam
//!
//! A [`Controller`] owns the catalog and is the only path to it. Engine
//! operations are written once against this trait; which locks are taken,
//! and how finely, is the controller's business.

use crate::batch::BatchKeys;
use crate::strategy::LockStrategy;
use bookstore_core::{Result, StockRecord};

/// Lock-acquisition protocol over the catalog
///
/// # Contract
///
/// - Every method holds the locks it needs for its full duration and
///   releases them before returning.
/// - Batch methods hand records to the callback in ascending ISBN order,
///   matching `keys`.
/// - Batch methods fail with `NotFound` before the callback runs if any
///   ISBN in `keys` is absent.
/// - A `write_batch` callback that returns `Err` must not have mutated any
///   record. Callbacks check everything first and mutate last.
/// - Callbacks must not call back into the controller.
pub trait Controller: Send + Sync {
    /// Which strategy this controller implements
    fn strategy(&self) -> LockStrategy;

    /// Insert new records under exclusive access to the key set
    ///
    /// Returns the number inserted. See `Catalog::add_books` for the
    /// failure rules.
    fn add_books(&self, records: Vec<StockRecord>) -> Result<usize>;

    /// Clear the catalog under exclusive access to the key set
    ///
    /// Returns the number of records removed. Never fails.
    fn remove_all_books(&self) -> usize;

    /// Run `f` over a consistent view of the records named by `keys`
    fn read_batch<R, F>(&self, keys: &BatchKeys, f: F) -> Result<R>
    where
        F: FnOnce(&[&StockRecord]) -> Result<R>;

    /// Run `f` with exclusive access to the records named by `keys`
    fn write_batch<R, F>(&self, keys: &BatchKeys, f: F) -> Result<R>
    where
        F: FnOnce(&mut [&mut StockRecord]) -> Result<R>;

    /// Run `f` over a consistent view of every record
    fn read_all<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&[&StockRecord]) -> R;

    /// Number of records currently in the catalog
    fn record_count(&self) -> usize;
}
