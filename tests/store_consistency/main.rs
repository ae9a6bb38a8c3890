//! Store Consistency Test Suite
//!
//! Every test runs against each way of reaching a store: the global-lock
//! engine, the partitioned engine, and a remote client going through the
//! JSON command protocol. All three must satisfy the same contracts.
//!
//! ## Key Verification Points
//!
//! 1. Batches are all-or-nothing
//! 2. Concurrent buys and restocks conserve copies
//! 3. Readers never observe a batch half applied
//! 4. Failures leave the catalog untouched and the store usable
//!
//! ## Running Tests
//!
//! ```bash
//! # Run the whole suite
//! cargo test --test store_consistency
//!
//! # Run the concurrency properties only
//! cargo test --test store_consistency concurrency::
//! ```

use std::sync::Arc;

pub use bookstore::{
    Book, BookCopy, BookRating, BookStore, EditorPick, Isbn, LockStrategy, StockManager,
    StockRecord, StoreError, Storefront,
};

// Test modules
pub mod basic_ops;
pub mod editor_picks;
pub mod negative_paths;
pub mod remote;

// =============================================================================
// SHARED TEST UTILITIES
// =============================================================================

/// ISBN of the default book
pub const TEST_ISBN: i64 = 3044560;

/// Copies of the default book
pub const NUM_COPIES: u64 = 5;

/// One way of reaching a store
#[derive(Clone)]
pub struct Fixture {
    /// What the fixture exercises, for assertion messages
    pub label: &'static str,
    /// Inventory-management surface
    pub manager: Arc<dyn StockManager>,
    /// Customer surface
    pub client: Arc<dyn Storefront>,
}

impl Fixture {
    fn local(strategy: LockStrategy, label: &'static str) -> Self {
        let store = BookStore::builder().strategy(strategy).build();
        let engine = Arc::clone(store.engine());
        Fixture {
            label,
            manager: engine.clone(),
            client: engine,
        }
    }

    fn remote() -> Self {
        let store = BookStore::new();
        let remote = Arc::new(store.remote());
        Fixture {
            label: "remote",
            manager: remote.clone(),
            client: remote,
        }
    }

    /// Full records of the whole catalog
    pub fn books(&self) -> Vec<StockRecord> {
        self.manager.get_books().unwrap()
    }

    /// Full record of one ISBN
    pub fn book(&self, isbn: i64) -> StockRecord {
        self.manager
            .get_books_by_isbn(&[Isbn::new(isbn)])
            .unwrap()
            .remove(0)
    }

    /// Add one book with the given ISBN and copies
    pub fn add_book(&self, isbn: i64, copies: u64) {
        self.manager.add_books(vec![book(isbn, copies)]).unwrap();
    }
}

/// Every fixture, each over its own empty catalog
pub fn fixtures() -> Vec<Fixture> {
    vec![
        Fixture::local(LockStrategy::Global, "global"),
        Fixture::local(LockStrategy::Partitioned, "partitioned"),
        Fixture::remote(),
    ]
}

/// Every fixture, each holding the default book
pub fn fixtures_with_default_book() -> Vec<Fixture> {
    let fixtures = fixtures();
    for fixture in &fixtures {
        fixture.add_book(TEST_ISBN, NUM_COPIES);
    }
    fixtures
}

/// A valid record with the given ISBN and copies
pub fn book(isbn: i64, copies: u64) -> StockRecord {
    StockRecord::new(isbn, "Test of Thrones", "George RR Testin'", 10.0, copies)
}

/// One (isbn, quantity) line item per pair
pub fn copies(items: &[(i64, i64)]) -> Vec<BookCopy> {
    items
        .iter()
        .map(|&(isbn, quantity)| BookCopy::new(isbn, quantity))
        .collect()
}
