//! Capability surfaces
//!
//! One engine backs two surfaces: inventory management for staff and the
//! storefront for customers. Both are object-safe so a caller can hold a
//! `&dyn Storefront` without knowing whether the store is local or remote.
//!
//! Every method returns [`Result`]: a local engine only fails with the
//! store's own error kinds, a remote one may also fail with `Transport`.

use bookstore_core::{Book, BookCopy, BookRating, EditorPick, Isbn, Result, StockRecord};

/// Inventory-management capability
pub trait StockManager: Send + Sync {
    /// Insert new records; all or nothing
    fn add_books(&self, books: Vec<StockRecord>) -> Result<()>;

    /// Restock; every quantity must be positive
    fn add_copies(&self, copies: &[BookCopy]) -> Result<()>;

    /// Full records, ascending by ISBN
    fn get_books(&self) -> Result<Vec<StockRecord>>;

    /// Full records for the given ISBNs, ascending by ISBN
    fn get_books_by_isbn(&self, isbns: &[Isbn]) -> Result<Vec<StockRecord>>;

    /// Set or clear editor-pick flags in one commit
    fn update_editor_picks(&self, picks: &[EditorPick]) -> Result<()>;

    /// Records that missed at least one sale, ascending by ISBN
    fn get_books_in_demand(&self) -> Result<Vec<StockRecord>>;

    /// Clear the catalog; returns the number of records removed
    fn remove_all_books(&self) -> Result<usize>;
}

/// Storefront capability
pub trait Storefront: Send + Sync {
    /// Buy copies; all or nothing
    fn buy_books(&self, copies: &[BookCopy]) -> Result<()>;

    /// Buyer-facing view of the given ISBNs, ascending by ISBN
    fn get_books(&self, isbns: &[Isbn]) -> Result<Vec<Book>>;

    /// `count` distinct editor picks sampled uniformly
    fn get_editor_picks(&self, count: usize) -> Result<Vec<Book>>;

    /// Record one rating per line item
    fn rate_books(&self, ratings: &[BookRating]) -> Result<()>;

    /// Up to `count` books by average rating, best first
    fn get_top_rated_books(&self, count: usize) -> Result<Vec<Book>>;
}
