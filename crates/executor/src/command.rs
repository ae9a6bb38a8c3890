//! Commands and their outputs
//!
//! A [`Command`] is one store call in serializable form: the operation
//! name plus its argument collection. On the wire it is adjacently tagged:
//!
//! ```json
//! {"op": "buy_books", "args": {"copies": [{"isbn": 3044560, "quantity": 5}]}}
//! {"op": "get_books"}
//! ```

use bookstore_core::{Book, BookCopy, BookRating, EditorPick, Isbn, StockRecord};
use serde::{Deserialize, Serialize};

/// One store operation with its arguments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", content = "args", rename_all = "snake_case")]
pub enum Command {
    // Inventory management
    /// Insert new records
    AddBooks {
        /// Records to insert
        books: Vec<StockRecord>,
    },
    /// Restock
    AddCopies {
        /// (isbn, quantity) line items
        copies: Vec<BookCopy>,
    },
    /// Set or clear editor-pick flags
    UpdateEditorPicks {
        /// (isbn, flag) line items
        picks: Vec<EditorPick>,
    },
    /// Every full record
    GetBooks,
    /// Full records for the given ISBNs
    GetBooksByIsbn {
        /// Requested ISBNs
        isbns: Vec<Isbn>,
    },
    /// Records that missed a sale
    GetBooksInDemand,
    /// Clear the catalog
    RemoveAllBooks,

    // Storefront
    /// Buy copies
    BuyBooks {
        /// (isbn, quantity) line items
        copies: Vec<BookCopy>,
    },
    /// Buyer-facing view of the given ISBNs
    GetStorefrontBooks {
        /// Requested ISBNs
        isbns: Vec<Isbn>,
    },
    /// Sample editor picks
    GetEditorPicks {
        /// Sample size
        count: usize,
    },
    /// Record ratings
    RateBooks {
        /// (isbn, rating) line items
        ratings: Vec<BookRating>,
    },
    /// Best-rated books
    GetTopRatedBooks {
        /// Maximum number of books
        count: usize,
    },
}

impl Command {
    /// Wire name of the operation
    pub fn name(&self) -> &'static str {
        match self {
            Command::AddBooks { .. } => "add_books",
            Command::AddCopies { .. } => "add_copies",
            Command::UpdateEditorPicks { .. } => "update_editor_picks",
            Command::GetBooks => "get_books",
            Command::GetBooksByIsbn { .. } => "get_books_by_isbn",
            Command::GetBooksInDemand => "get_books_in_demand",
            Command::RemoveAllBooks => "remove_all_books",
            Command::BuyBooks { .. } => "buy_books",
            Command::GetStorefrontBooks { .. } => "get_storefront_books",
            Command::GetEditorPicks { .. } => "get_editor_picks",
            Command::RateBooks { .. } => "rate_books",
            Command::GetTopRatedBooks { .. } => "get_top_rated_books",
        }
    }

    /// Whether re-issuing the command after an unknown outcome is safe
    ///
    /// Reads and the administrative reset are idempotent. Every other
    /// write changes counters or the key set each time it lands, so only
    /// the caller may decide to send it again.
    pub fn is_idempotent(&self) -> bool {
        match self {
            Command::GetBooks
            | Command::GetBooksByIsbn { .. }
            | Command::GetBooksInDemand
            | Command::GetStorefrontBooks { .. }
            | Command::GetEditorPicks { .. }
            | Command::GetTopRatedBooks { .. }
            | Command::RemoveAllBooks => true,
            Command::AddBooks { .. }
            | Command::AddCopies { .. }
            | Command::UpdateEditorPicks { .. }
            | Command::BuyBooks { .. }
            | Command::RateBooks { .. } => false,
        }
    }
}

/// Result of a successful command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Output {
    /// Write applied
    Unit,
    /// Number of records affected
    Count(usize),
    /// Full records, ascending by ISBN unless the operation says otherwise
    StockRecords(Vec<StockRecord>),
    /// Buyer-facing views
    Books(Vec<Book>),
}
