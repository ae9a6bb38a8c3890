//! Batch target sets
//!
//! A batch names its records through [`BatchKeys`]: a strictly ascending
//! sequence of valid ISBNs, built before any lock is taken. Every
//! controller acquires per-record locks by walking this sequence, so all
//! batches, readers and writers alike, lock records in one global order.
//! That shared order is what rules out deadlock between batches.

use bookstore_core::{validate, Isbn, Result, StoreError};

/// Strictly ascending, duplicate-free sequence of valid ISBNs
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BatchKeys(Vec<Isbn>);

impl BatchKeys {
    /// Validate, de-duplicate-check and sort a set of ISBNs
    ///
    /// Fails with `Validation` on the first non-positive ISBN (in input
    /// order), then with `Duplicate` on the smallest repeated ISBN.
    pub fn from_isbns(isbns: impl IntoIterator<Item = Isbn>) -> Result<Self> {
        let batch = Batch::new(isbns.into_iter().map(|isbn| (isbn, ())))?;
        Ok(batch.keys)
    }

    /// The ISBNs, ascending
    pub fn as_slice(&self) -> &[Isbn] {
        &self.0
    }

    /// Iterate over the ISBNs, ascending
    pub fn iter(&self) -> std::slice::Iter<'_, Isbn> {
        self.0.iter()
    }

    /// Number of ISBNs
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the batch names no record
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Batch line items keyed by ISBN
///
/// Items are reordered by ascending ISBN; `values()[i]` belongs to
/// `keys().as_slice()[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch<T> {
    keys: BatchKeys,
    values: Vec<T>,
}

impl<T> Batch<T> {
    /// Build a batch from `(isbn, value)` line items
    ///
    /// Same failure rules as [`BatchKeys::from_isbns`].
    pub fn new(items: impl IntoIterator<Item = (Isbn, T)>) -> Result<Self> {
        let mut items: Vec<(Isbn, T)> = items.into_iter().collect();
        for (isbn, _) in &items {
            validate::isbn(*isbn)?;
        }

        // Sort is the lock order. Stable so equal keys keep request order.
        items.sort_by_key(|(isbn, _)| *isbn);
        if let Some(pair) = items.windows(2).find(|pair| pair[0].0 == pair[1].0) {
            return Err(StoreError::Duplicate { isbn: pair[0].0 });
        }

        let (keys, values): (Vec<Isbn>, Vec<T>) = items.into_iter().unzip();
        Ok(Self {
            keys: BatchKeys(keys),
            values,
        })
    }

    /// The target ISBNs, ascending
    pub fn keys(&self) -> &BatchKeys {
        &self.keys
    }

    /// The line item values, aligned with [`Batch::keys`]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Iterate over `(isbn, value)` pairs, ascending by ISBN
    pub fn iter(&self) -> impl Iterator<Item = (Isbn, &T)> + '_ {
        self.keys.iter().copied().zip(self.values.iter())
    }

    /// Number of line items
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Check if the batch has no line items
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
