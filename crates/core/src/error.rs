//! Error taxonomy for store operations
//!
//! Every failure is local to one batch call and leaves the catalog exactly
//! as it was before the call. None of them is fatal to the store.
//!
//! ## Error Codes (Canonical)
//!
//! These codes travel over the wire and must not change:
//!
//! | Code | Description |
//! |------|-------------|
//! | Validation | Malformed argument (ISBN, quantity, rating, price, text) |
//! | Duplicate | Same ISBN twice within one batch |
//! | NotFound | Referenced ISBN is absent from the catalog |
//! | InsufficientStock | Purchase exceeds copies in stock |
//! | SampleSize | More editor picks requested than exist |
//! | Transport | Remote call could not be delivered or answered |

use crate::types::Isbn;
use thiserror::Error;

/// Errors reported by store operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Malformed argument
    #[error("invalid argument: {reason}")]
    Validation {
        /// What was wrong with the argument
        reason: String,
    },

    /// The same ISBN appears twice within one batch
    #[error("ISBN {isbn} appears more than once in the batch")]
    Duplicate {
        /// The repeated ISBN
        isbn: Isbn,
    },

    /// A referenced ISBN is absent from the catalog
    #[error("ISBN {isbn} is not in the catalog")]
    NotFound {
        /// The missing ISBN
        isbn: Isbn,
    },

    /// A purchase asks for more copies than are in stock
    #[error("ISBN {isbn}: requested {requested} copies, {available} in stock")]
    InsufficientStock {
        /// The short ISBN
        isbn: Isbn,
        /// Copies requested
        requested: u64,
        /// Copies in stock
        available: u64,
    },

    /// More editor picks were requested than are currently marked
    #[error("requested {requested} editor picks, only {available} available")]
    SampleSize {
        /// Sample size requested
        requested: usize,
        /// Records currently marked as editor pick
        available: usize,
    },

    /// A remote call failed before a store answer was obtained
    ///
    /// Never produced by the engine itself, only by remote clients.
    #[error("transport failure: {message}")]
    Transport {
        /// Error message
        message: String,
    },
}

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

impl StoreError {
    /// Build a validation error
    pub fn validation(reason: impl Into<String>) -> Self {
        StoreError::Validation {
            reason: reason.into(),
        }
    }

    /// Build a transport error
    pub fn transport(message: impl Into<String>) -> Self {
        StoreError::Transport {
            message: message.into(),
        }
    }

    /// Get the canonical error code
    pub fn error_code(&self) -> &'static str {
        match self {
            StoreError::Validation { .. } => "Validation",
            StoreError::Duplicate { .. } => "Duplicate",
            StoreError::NotFound { .. } => "NotFound",
            StoreError::InsufficientStock { .. } => "InsufficientStock",
            StoreError::SampleSize { .. } => "SampleSize",
            StoreError::Transport { .. } => "Transport",
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, StoreError::Validation { .. })
    }

    /// Check if this is a duplicate-in-batch error
    pub fn is_duplicate(&self) -> bool {
        matches!(self, StoreError::Duplicate { .. })
    }

    /// Check if this is a not-found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }

    /// Check if this is an insufficient-stock error
    pub fn is_insufficient_stock(&self) -> bool {
        matches!(self, StoreError::InsufficientStock { .. })
    }

    /// Check if this is a sample-size error
    pub fn is_sample_size(&self) -> bool {
        matches!(self, StoreError::SampleSize { .. })
    }

    /// Check if the failure happened outside the store
    ///
    /// A transport failure says nothing about whether the store applied the
    /// call, so the caller decides whether to re-issue it.
    pub fn is_transport(&self) -> bool {
        matches!(self, StoreError::Transport { .. })
    }
}
