//! Pure argument validation
//!
//! Every check here is side-effect-free. Callers run them over a whole
//! batch before touching the catalog, so a failing item never leaves a
//! partially applied batch behind.

use crate::error::{Result, StoreError};
use crate::types::{Isbn, StockRecord, MAX_RATING};

/// Check that an ISBN is strictly positive
pub fn isbn(isbn: Isbn) -> Result<()> {
    if isbn.is_valid() {
        Ok(())
    } else {
        Err(StoreError::validation(format!("ISBN {} is not positive", isbn)))
    }
}

/// Check a requested copy count and return it as an unsigned quantity
///
/// Buying or adding zero or fewer copies is invalid.
pub fn quantity(isbn: Isbn, quantity: i64) -> Result<u64> {
    if quantity > 0 {
        Ok(quantity as u64)
    } else {
        Err(StoreError::validation(format!(
            "ISBN {}: quantity {} is not positive",
            isbn, quantity
        )))
    }
}

/// Check a rating and return it as an unsigned value
pub fn rating(isbn: Isbn, rating: i64) -> Result<u64> {
    if (0..=MAX_RATING).contains(&rating) {
        Ok(rating as u64)
    } else {
        Err(StoreError::validation(format!(
            "ISBN {}: rating {} is outside 0..={}",
            isbn, rating, MAX_RATING
        )))
    }
}

/// Check the field rules of a candidate record
///
/// - ISBN strictly positive
/// - title and author non-empty (whitespace-only counts as empty)
/// - price finite and non-negative
pub fn stock_record(record: &StockRecord) -> Result<()> {
    isbn(record.isbn)?;
    if record.title.trim().is_empty() {
        return Err(StoreError::validation(format!(
            "ISBN {}: title is empty",
            record.isbn
        )));
    }
    if record.author.trim().is_empty() {
        return Err(StoreError::validation(format!(
            "ISBN {}: author is empty",
            record.isbn
        )));
    }
    if !record.price.is_finite() || record.price < 0.0 {
        return Err(StoreError::validation(format!(
            "ISBN {}: price {} is not a non-negative amount",
            record.isbn, record.price
        )));
    }
    Ok(())
}
