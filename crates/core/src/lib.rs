//! Core types for the bookstore inventory
//!
//! This crate defines the data model shared by every layer:
//! - [`Isbn`]: identity of a catalog record
//! - [`StockRecord`]: full inventory entry, and [`Book`], its buyer-facing view
//! - Request line items: [`BookCopy`], [`EditorPick`], [`BookRating`]
//! - [`StoreError`]: the error taxonomy every operation reports through
//! - [`validate`]: pure, side-effect-free argument checks

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod types;
pub mod validate;

pub use error::{Result, StoreError};
pub use types::{Book, BookCopy, BookRating, EditorPick, Isbn, StockRecord, MAX_RATING};
