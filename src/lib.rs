//! # Bookstore
//!
//! Concurrent in-memory inventory store with two interchangeable locking
//! strategies.
//!
//! ## Quick Start
//!
//! ```ignore
//! use bookstore::prelude::*;
//!
//! let store = BookStore::builder().partitioned().build();
//!
//! store.stock_manager().add_books(vec![
//!     StockRecord::new(3044560, "Test of Thrones", "George RR Testin'", 10.0, 5),
//! ])?;
//! store.storefront().buy_books(&[BookCopy::new(3044560, 5)])?;
//!
//! assert_eq!(store.stock_manager().get_books()?[0].num_copies, 0);
//! ```
//!
//! ## Strategies
//!
//! - [`LockStrategy::Global`]: one lock, every operation serialized
//! - [`LockStrategy::Partitioned`]: structure lock plus per-ISBN locks;
//!   batches on disjoint ISBNs run in parallel
//!
//! Both give every batch all-or-nothing semantics and never let a reader see
//! a batch half applied.
//!
//! ## Capabilities
//!
//! - [`StockManager`]: inventory management
//! - [`Storefront`]: customer-facing operations
//!
//! Both are implemented by the local engine and by [`RemoteStore`], which
//! speaks the JSON command protocol of [`Executor`].

#![warn(missing_docs)]

mod error;
mod store;

pub mod prelude;

// Re-export main entry points
pub use error::{Error, Result};
pub use store::{BookStore, BookStoreBuilder};

// Re-export layers
pub use bookstore_concurrency::{LockStrategy, StrategyController};
pub use bookstore_core::{
    Book, BookCopy, BookRating, EditorPick, Isbn, StockRecord, StoreError, MAX_RATING,
};
pub use bookstore_engine::{
    BookStoreEngine, ConfigError, MetricsSnapshot, StockManager, StoreConfig, Storefront,
};
pub use bookstore_executor::{
    Command, Executor, InProcessTransport, Output, RemoteStore, Transport,
};
