//! Convenient imports for the bookstore
//!
//! ```ignore
//! use bookstore::prelude::*;
//!
//! let store = BookStore::builder().global_lock().build();
//! store.stock_manager().add_books(vec![StockRecord::new(1, "Title", "Author", 9.5, 3)])?;
//! ```

// Main entry point
pub use crate::store::{BookStore, BookStoreBuilder};

// Error handling
pub use crate::error::{Error, Result};
pub use bookstore_core::StoreError;

// Capabilities
pub use bookstore_engine::{StockManager, Storefront};

// Data model
pub use bookstore_core::{Book, BookCopy, BookRating, EditorPick, Isbn, StockRecord};

// Configuration
pub use bookstore_concurrency::LockStrategy;
pub use bookstore_engine::StoreConfig;
