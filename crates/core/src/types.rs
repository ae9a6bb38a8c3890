//! Core types for the bookstore inventory
//!
//! This module defines the fundamental types used throughout the system:
//! - [`Isbn`]: numeric identity of a catalog record
//! - [`StockRecord`]: one inventory entry with its counters
//! - [`Book`]: the buyer-facing projection of a record
//! - [`BookCopy`], [`EditorPick`], [`BookRating`]: batch line items

use serde::{Deserialize, Serialize};
use std::fmt;

/// Highest rating a customer may give a book.
pub const MAX_RATING: i64 = 5;

/// Identity of a catalog record
///
/// An ISBN is any integer on the wire; only positive values name a record.
/// Request types carry the raw value so that a negative or zero ISBN can be
/// rejected as a validation failure instead of a decoding failure.
///
/// The derived ordering is numeric. Lock acquisition in the partitioned
/// controller relies on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Isbn(i64);

impl Isbn {
    /// Wrap a raw ISBN value without validating it
    pub const fn new(raw: i64) -> Self {
        Isbn(raw)
    }

    /// Raw numeric value
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Whether this ISBN can name a record (strictly positive)
    pub const fn is_valid(self) -> bool {
        self.0 > 0
    }
}

impl From<i64> for Isbn {
    fn from(raw: i64) -> Self {
        Isbn(raw)
    }
}

impl fmt::Display for Isbn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One inventory entry
///
/// Counters are unsigned, so `num_copies >= 0` holds by construction.
/// The remaining field rules (positive ISBN, non-empty text, non-negative
/// finite price) are checked by [`crate::validate::stock_record`] before a
/// record enters the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockRecord {
    /// Record identity, immutable once added
    pub isbn: Isbn,
    /// Title, non-empty
    pub title: String,
    /// Author, non-empty
    pub author: String,
    /// Unit price, non-negative
    pub price: f64,
    /// Copies currently in stock
    pub num_copies: u64,
    /// Copies customers asked for while the book was out of stock
    pub num_sale_misses: u64,
    /// How many ratings were received
    pub num_times_rated: u64,
    /// Sum of all ratings received
    pub total_rating: u64,
    /// Featured by the editors
    pub editor_pick: bool,
}

impl StockRecord {
    /// Create a record with zeroed counters and no editor pick
    pub fn new(
        isbn: impl Into<Isbn>,
        title: impl Into<String>,
        author: impl Into<String>,
        price: f64,
        num_copies: u64,
    ) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
            author: author.into(),
            price,
            num_copies,
            num_sale_misses: 0,
            num_times_rated: 0,
            total_rating: 0,
            editor_pick: false,
        }
    }

    /// Set the editor pick flag
    pub fn with_editor_pick(mut self, pick: bool) -> Self {
        self.editor_pick = pick;
        self
    }

    /// Set the sale-miss counter
    pub fn with_sale_misses(mut self, misses: u64) -> Self {
        self.num_sale_misses = misses;
        self
    }

    /// Set both rating counters
    pub fn with_ratings(mut self, num_times_rated: u64, total_rating: u64) -> Self {
        self.num_times_rated = num_times_rated;
        self.total_rating = total_rating;
        self
    }

    /// Average rating, undefined until the book has been rated once
    pub fn average_rating(&self) -> Option<f64> {
        if self.num_times_rated == 0 {
            None
        } else {
            Some(self.total_rating as f64 / self.num_times_rated as f64)
        }
    }

    /// Whether at least `quantity` copies are in stock
    pub fn has_copies(&self, quantity: u64) -> bool {
        self.num_copies >= quantity
    }

    /// Buyer-facing projection
    pub fn to_book(&self) -> Book {
        Book::from(self)
    }
}

/// Buyer-facing view of a [`StockRecord`]
///
/// Omits every inventory-internal counter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Record identity
    pub isbn: Isbn,
    /// Title
    pub title: String,
    /// Author
    pub author: String,
    /// Unit price
    pub price: f64,
    /// Featured by the editors
    pub editor_pick: bool,
}

impl From<&StockRecord> for Book {
    fn from(record: &StockRecord) -> Self {
        Book {
            isbn: record.isbn,
            title: record.title.clone(),
            author: record.author.clone(),
            price: record.price,
            editor_pick: record.editor_pick,
        }
    }
}

/// Line item of `buy_books` and `add_copies`
///
/// `quantity` is signed so that zero and negative requests reach validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookCopy {
    /// Target record
    pub isbn: Isbn,
    /// Copies to buy or add, must be positive
    pub quantity: i64,
}

impl BookCopy {
    /// Create a line item
    pub fn new(isbn: impl Into<Isbn>, quantity: i64) -> Self {
        Self {
            isbn: isbn.into(),
            quantity,
        }
    }
}

/// Line item of `update_editor_picks`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EditorPick {
    /// Target record
    pub isbn: Isbn,
    /// New value of the editor pick flag
    pub pick: bool,
}

impl EditorPick {
    /// Create a line item
    pub fn new(isbn: impl Into<Isbn>, pick: bool) -> Self {
        Self {
            isbn: isbn.into(),
            pick,
        }
    }
}

/// Line item of `rate_books`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookRating {
    /// Target record
    pub isbn: Isbn,
    /// Rating in `0..=MAX_RATING`
    pub rating: i64,
}

impl BookRating {
    /// Create a line item
    pub fn new(isbn: impl Into<Isbn>, rating: i64) -> Self {
        Self {
            isbn: isbn.into(),
            rating,
        }
    }
}
