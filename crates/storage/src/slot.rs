//! Catalog entry representations

use bookstore_core::StockRecord;
use parking_lot::RwLock;

/// A record guarded by its own shared/exclusive lock
///
/// Entries of this type form the per-ISBN lock table of the partitioned
/// controller: the lock and the data it protects live in the same slot.
pub type RecordLock = RwLock<StockRecord>;

/// What a catalog entry holds
///
/// Lets one [`Catalog`](crate::Catalog) implementation back both the
/// global-lock strategy (bare records) and the partitioned strategy
/// (records behind per-record locks).
pub trait RecordSlot {
    /// Wrap a freshly validated record
    fn from_record(record: StockRecord) -> Self;
}

impl RecordSlot for StockRecord {
    fn from_record(record: StockRecord) -> Self {
        record
    }
}

impl RecordSlot for RecordLock {
    fn from_record(record: StockRecord) -> Self {
        RwLock::new(record)
    }
}
