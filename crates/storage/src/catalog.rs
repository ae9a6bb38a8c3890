//! The ISBN → record map
//!
//! `Catalog` owns the key set and the records (or record slots). It has no
//! locking of its own: controllers wrap it and decide who may touch it.
//!
//! # Design
//!
//! - FxHashMap: O(1) lookups, fast non-crypto hash over integer keys
//! - Generic slot: `Catalog<StockRecord>` for the global-lock controller,
//!   `Catalog<RecordLock>` for the partitioned controller
//! - Batch lookups take ISBNs in ascending order and hand slots back in the
//!   same order, so lock acquisition order is decided by the caller's sort

use crate::slot::RecordSlot;
use bookstore_core::{validate, Isbn, Result, StockRecord, StoreError};
use rustc_hash::{FxHashMap, FxHashSet};

/// Mapping from ISBN to record slot
///
/// Keys are unique. Iteration order of the underlying map is unspecified;
/// every method that returns several entries returns them by ascending ISBN.
pub struct Catalog<S = StockRecord> {
    records: FxHashMap<Isbn, S>,
}

impl<S> Catalog<S> {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            records: FxHashMap::default(),
        }
    }

    /// Create a catalog with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the catalog holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Check if an ISBN is present
    #[inline]
    pub fn contains(&self, isbn: Isbn) -> bool {
        self.records.contains_key(&isbn)
    }

    /// Get the slot for an ISBN
    #[inline]
    pub fn get(&self, isbn: Isbn) -> Option<&S> {
        self.records.get(&isbn)
    }

    /// All ISBNs, ascending
    pub fn isbns(&self) -> Vec<Isbn> {
        let mut isbns: Vec<Isbn> = self.records.keys().copied().collect();
        isbns.sort_unstable();
        isbns
    }

    /// Fail with `NotFound` on the first absent ISBN, in the given order
    pub fn ensure_present(&self, isbns: &[Isbn]) -> Result<()> {
        match isbns.iter().find(|isbn| !self.contains(**isbn)) {
            Some(missing) => Err(StoreError::NotFound { isbn: *missing }),
            None => Ok(()),
        }
    }

    /// Look up a batch of slots
    ///
    /// Either every ISBN is present and the slots come back in the order of
    /// `isbns`, or the call fails with `NotFound` and nothing is returned.
    pub fn slots(&self, isbns: &[Isbn]) -> Result<Vec<&S>> {
        isbns
            .iter()
            .map(|isbn| {
                self.records
                    .get(isbn)
                    .ok_or(StoreError::NotFound { isbn: *isbn })
            })
            .collect()
    }

    /// Look up a batch of slots for mutation
    ///
    /// `isbns` must be strictly ascending (sorted, no duplicates); the slots
    /// come back in that order. Presence of every ISBN is checked before any
    /// slot is handed out.
    ///
    /// NOTE: collects through one pass over the map, O(n) in catalog size.
    /// Only the global-lock controller uses it; the partitioned controller
    /// mutates through per-record locks reached by [`Catalog::slots`].
    pub fn slots_mut(&mut self, isbns: &[Isbn]) -> Result<Vec<&mut S>> {
        debug_assert!(isbns.windows(2).all(|w| w[0] < w[1]));
        self.ensure_present(isbns)?;

        let mut found: Vec<(Isbn, &mut S)> = self
            .records
            .iter_mut()
            .filter(|(isbn, _)| isbns.binary_search(*isbn).is_ok())
            .map(|(isbn, slot)| (*isbn, slot))
            .collect();
        found.sort_unstable_by_key(|(isbn, _)| *isbn);
        Ok(found.into_iter().map(|(_, slot)| slot).collect())
    }

    /// Every slot, ascending by ISBN
    pub fn all_slots(&self) -> Vec<&S> {
        let mut entries: Vec<(&Isbn, &S)> = self.records.iter().collect();
        entries.sort_unstable_by_key(|(isbn, _)| **isbn);
        entries.into_iter().map(|(_, slot)| slot).collect()
    }

    /// Every slot for mutation, ascending by ISBN
    pub fn all_slots_mut(&mut self) -> Vec<&mut S> {
        let mut entries: Vec<(&Isbn, &mut S)> = self.records.iter_mut().collect();
        entries.sort_unstable_by_key(|(isbn, _)| **isbn);
        entries.into_iter().map(|(_, slot)| slot).collect()
    }

    /// Remove every record
    ///
    /// Returns the number of records removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.records.len();
        self.records.clear();
        removed
    }
}

impl<S: RecordSlot> Catalog<S> {
    /// Insert a batch of new records
    ///
    /// Two-phase: every candidate is validated first, then all are inserted.
    /// Fails without inserting anything if
    /// - a candidate violates a field rule (`Validation`)
    /// - an ISBN appears twice among the candidates (`Duplicate`)
    /// - an ISBN is already in the catalog (`Duplicate`)
    ///
    /// Returns the number of records inserted.
    pub fn add_books(&mut self, records: Vec<StockRecord>) -> Result<usize> {
        let mut seen = FxHashSet::default();
        for record in &records {
            validate::stock_record(record)?;
            if !seen.insert(record.isbn) || self.contains(record.isbn) {
                return Err(StoreError::Duplicate { isbn: record.isbn });
            }
        }

        let added = records.len();
        self.records.reserve(added);
        for record in records {
            self.records.insert(record.isbn, S::from_record(record));
        }
        Ok(added)
    }
}

impl<S> Default for Catalog<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> std::fmt::Debug for Catalog<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("records", &self.len())
            .finish()
    }
}
