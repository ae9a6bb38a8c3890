//! Unified error type for the bookstore facade
//!
//! Store operations report [`StoreError`]; opening a store from a
//! configuration file can also fail with [`ConfigError`]. [`Error`] covers
//! both so callers of the facade handle one type.

use bookstore_core::StoreError;
use bookstore_engine::ConfigError;
use thiserror::Error;

/// All bookstore errors
#[derive(Debug, Error)]
pub enum Error {
    /// A store operation failed; the catalog is unchanged
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Configuration could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type for facade operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// The store error, if this is one
    pub fn as_store_error(&self) -> Option<&StoreError> {
        match self {
            Error::Store(e) => Some(e),
            Error::Config(_) => None,
        }
    }

    /// Check if this is a not-found error
    pub fn is_not_found(&self) -> bool {
        self.as_store_error().map_or(false, StoreError::is_not_found)
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        self.as_store_error().map_or(false, StoreError::is_validation)
    }

    /// Check if this is a configuration error
    pub fn is_config(&self) -> bool {
        matches!(self, Error::Config(_))
    }
}
