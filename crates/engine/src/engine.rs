//! Store operations
//!
//! Every batch operation is two-phase:
//!
//! 1. Validate the request on its own: ISBNs positive, quantities and
//!    ratings in range, no ISBN twice. Nothing is locked yet.
//! 2. Hand the sorted batch to the controller. Under the batch's locks,
//!    check every record against current state (presence, stock), then
//!    apply every line item.
//!
//! A failure in either phase returns before the first mutation, so no
//! operation is ever partially applied.

use crate::api::{StockManager, Storefront};
use crate::metrics::{EngineMetrics, MetricsSnapshot};
use bookstore_concurrency::{Batch, BatchKeys, Controller, LockStrategy, StrategyController};
use bookstore_core::{
    validate, Book, BookCopy, BookRating, EditorPick, Isbn, Result, StockRecord, StoreError,
};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cmp::Ordering;
use tracing::{debug, info};

/// Engine over the strategy chosen at runtime
pub type BookStoreEngine = StoreEngine<StrategyController>;

/// The bookstore operation set over one controller
///
/// # Thread Safety
///
/// `StoreEngine` is `Send + Sync` and meant to be shared behind an `Arc`.
/// All synchronization on catalog data is the controller's; the engine's
/// own state is the sampling RNG (behind a mutex, never held together with
/// catalog locks) and lock-free metrics.
pub struct StoreEngine<C: Controller = StrategyController> {
    controller: C,
    rng: Mutex<StdRng>,
    metrics: EngineMetrics,
}

impl<C: Controller> StoreEngine<C> {
    /// Create an engine with an entropy-seeded sampler
    pub fn new(controller: C) -> Self {
        Self::with_rng(controller, StdRng::from_entropy())
    }

    /// Create an engine whose editor-pick sampling is reproducible
    pub fn with_seed(controller: C, seed: u64) -> Self {
        Self::with_rng(controller, StdRng::seed_from_u64(seed))
    }

    fn with_rng(controller: C, rng: StdRng) -> Self {
        info!(strategy = %controller.strategy(), "store engine created");
        Self {
            controller,
            rng: Mutex::new(rng),
            metrics: EngineMetrics::new(),
        }
    }

    /// The locking strategy in use
    pub fn strategy(&self) -> LockStrategy {
        self.controller.strategy()
    }

    /// The underlying controller
    pub fn controller(&self) -> &C {
        &self.controller
    }

    /// Operation counters
    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Number of records in the catalog
    pub fn record_count(&self) -> usize {
        self.controller.record_count()
    }

    // =========================================================================
    // Structural operations
    // =========================================================================

    /// Insert new records
    ///
    /// Fails without inserting anything on a field violation (`Validation`),
    /// an ISBN repeated in the batch or already present (`Duplicate`).
    /// Candidates are checked in request order.
    pub fn add_books(&self, books: Vec<StockRecord>) -> Result<()> {
        let items = books.len();
        let result = self.controller.add_books(books).map(|_| ());
        self.finish("add_books", items, result)
    }

    /// Clear the catalog; returns the number of records removed
    pub fn remove_all_books(&self) -> usize {
        let removed = self.controller.remove_all_books();
        self.metrics.record_commit();
        info!(removed, strategy = %self.strategy(), "catalog cleared");
        removed
    }

    // =========================================================================
    // Write batches
    // =========================================================================

    /// Restock the given ISBNs
    pub fn add_copies(&self, copies: &[BookCopy]) -> Result<()> {
        let result = quantity_batch(copies).and_then(|batch| {
            self.controller.write_batch(batch.keys(), |records| {
                for (record, &quantity) in records.iter().zip(batch.values()) {
                    if record.num_copies.checked_add(quantity).is_none() {
                        return Err(StoreError::validation(format!(
                            "ISBN {}: adding {} copies overflows the stock count",
                            record.isbn, quantity
                        )));
                    }
                }
                for (record, &quantity) in records.iter_mut().zip(batch.values()) {
                    record.num_copies += quantity;
                }
                Ok(())
            })
        });
        self.finish("add_copies", copies.len(), result)
    }

    /// Buy copies of the given ISBNs
    ///
    /// Fails with `InsufficientStock` naming the first short ISBN (ascending)
    /// if any record has fewer copies than requested. A rejected purchase
    /// leaves every counter untouched, including `num_sale_misses`.
    pub fn buy_books(&self, copies: &[BookCopy]) -> Result<()> {
        let result = quantity_batch(copies).and_then(|batch| {
            self.controller.write_batch(batch.keys(), |records| {
                for (record, &quantity) in records.iter().zip(batch.values()) {
                    if !record.has_copies(quantity) {
                        return Err(StoreError::InsufficientStock {
                            isbn: record.isbn,
                            requested: quantity,
                            available: record.num_copies,
                        });
                    }
                }
                for (record, &quantity) in records.iter_mut().zip(batch.values()) {
                    record.num_copies -= quantity;
                }
                Ok(())
            })
        });
        self.finish("buy_books", copies.len(), result)
    }

    /// Set or clear editor-pick flags
    pub fn update_editor_picks(&self, picks: &[EditorPick]) -> Result<()> {
        let result = Batch::new(picks.iter().map(|p| (p.isbn, p.pick))).and_then(|batch| {
            self.controller.write_batch(batch.keys(), |records| {
                for (record, &pick) in records.iter_mut().zip(batch.values()) {
                    record.editor_pick = pick;
                }
                Ok(())
            })
        });
        self.finish("update_editor_picks", picks.len(), result)
    }

    /// Record ratings
    ///
    /// Each line item adds its rating to `total_rating` and bumps
    /// `num_times_rated` by one.
    pub fn rate_books(&self, ratings: &[BookRating]) -> Result<()> {
        let result = rating_batch(ratings).and_then(|batch| {
            self.controller.write_batch(batch.keys(), |records| {
                for (record, &rating) in records.iter_mut().zip(batch.values()) {
                    record.total_rating = record.total_rating.saturating_add(rating);
                    record.num_times_rated = record.num_times_rated.saturating_add(1);
                }
                Ok(())
            })
        });
        self.finish("rate_books", ratings.len(), result)
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Every record, ascending by ISBN
    pub fn get_books(&self) -> Vec<StockRecord> {
        let books = self.controller.read_all(clone_records);
        self.metrics.record_commit();
        books
    }

    /// Records for the given ISBNs, ascending by ISBN
    ///
    /// A repeated ISBN is returned once.
    pub fn get_books_by_isbn(&self, isbns: &[Isbn]) -> Result<Vec<StockRecord>> {
        let result = read_keys(isbns).and_then(|keys| {
            self.controller
                .read_batch(&keys, |records| Ok(clone_records(records)))
        });
        self.finish("get_books_by_isbn", isbns.len(), result)
    }

    /// Buyer-facing view of the given ISBNs, ascending by ISBN
    pub fn get_storefront_books(&self, isbns: &[Isbn]) -> Result<Vec<Book>> {
        let result = read_keys(isbns).and_then(|keys| {
            self.controller
                .read_batch(&keys, |records| Ok(records.iter().map(|r| r.to_book()).collect()))
        });
        self.finish("get_storefront_books", isbns.len(), result)
    }

    /// Sample `count` distinct editor picks, uniformly without replacement
    ///
    /// The candidate set is read under one consistent view of the catalog.
    /// Fails with `SampleSize` when fewer than `count` records are picked.
    pub fn get_editor_picks(&self, count: usize) -> Result<Vec<Book>> {
        let picks: Vec<Book> = self.controller.read_all(|records| {
            records
                .iter()
                .filter(|r| r.editor_pick)
                .map(|r| r.to_book())
                .collect()
        });

        let result = if picks.len() < count {
            Err(StoreError::SampleSize {
                requested: count,
                available: picks.len(),
            })
        } else {
            let chosen = {
                let mut rng = self.rng.lock();
                rand::seq::index::sample(&mut *rng, picks.len(), count)
            };
            let mut slots: Vec<Option<Book>> = picks.into_iter().map(Some).collect();
            Ok(chosen.into_iter().filter_map(|i| slots[i].take()).collect())
        };
        self.finish("get_editor_picks", count, result)
    }

    /// Up to `count` books by average rating, best first
    ///
    /// Unrated books rank after every rated one; equal averages keep
    /// ascending ISBN order.
    pub fn get_top_rated_books(&self, count: usize) -> Vec<Book> {
        let mut ranked: Vec<(Option<f64>, Book)> = self.controller.read_all(|records| {
            records
                .iter()
                .map(|r| (r.average_rating(), r.to_book()))
                .collect()
        });
        ranked.sort_by(|(a, _), (b, _)| by_rating_desc(*a, *b));
        ranked.truncate(count);
        self.metrics.record_commit();
        ranked.into_iter().map(|(_, book)| book).collect()
    }

    /// Records that missed at least one sale, ascending by ISBN
    pub fn get_books_in_demand(&self) -> Vec<StockRecord> {
        let books = self.controller.read_all(|records| {
            records
                .iter()
                .filter(|r| r.num_sale_misses > 0)
                .map(|r| (*r).clone())
                .collect()
        });
        self.metrics.record_commit();
        books
    }

    /// Count and log the outcome of an operation
    fn finish<T>(&self, op: &'static str, items: usize, result: Result<T>) -> Result<T> {
        match &result {
            Ok(_) => {
                self.metrics.record_commit();
                debug!(op, items, strategy = %self.strategy(), "operation committed");
            }
            Err(e) => {
                self.metrics.record_reject();
                debug!(op, items, code = e.error_code(), error = %e, "operation rejected");
            }
        }
        result
    }
}

impl StoreEngine<StrategyController> {
    /// Create an engine for the given strategy over an empty catalog
    pub fn with_strategy(strategy: LockStrategy) -> Self {
        Self::new(StrategyController::new(strategy))
    }
}

impl Default for StoreEngine<StrategyController> {
    fn default() -> Self {
        Self::with_strategy(LockStrategy::default())
    }
}

impl<C: Controller + std::fmt::Debug> std::fmt::Debug for StoreEngine<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreEngine")
            .field("controller", &self.controller)
            .field("metrics", &self.metrics.snapshot())
            .finish()
    }
}

/// Validate quantities (request order) then build the sorted batch
fn quantity_batch(copies: &[BookCopy]) -> Result<Batch<u64>> {
    let items = copies
        .iter()
        .map(|c| Ok((c.isbn, validate::quantity(c.isbn, c.quantity)?)))
        .collect::<Result<Vec<_>>>()?;
    Batch::new(items)
}

/// Validate ratings (request order) then build the sorted batch
fn rating_batch(ratings: &[BookRating]) -> Result<Batch<u64>> {
    let items = ratings
        .iter()
        .map(|r| Ok((r.isbn, validate::rating(r.isbn, r.rating)?)))
        .collect::<Result<Vec<_>>>()?;
    Batch::new(items)
}

/// Read requests name a set: repeats collapse instead of failing
fn read_keys(isbns: &[Isbn]) -> Result<BatchKeys> {
    for isbn in isbns {
        validate::isbn(*isbn)?;
    }
    let mut unique = isbns.to_vec();
    unique.sort_unstable();
    unique.dedup();
    BatchKeys::from_isbns(unique)
}

fn clone_records(records: &[&StockRecord]) -> Vec<StockRecord> {
    records.iter().map(|r| (*r).clone()).collect()
}

fn by_rating_desc(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl<C: Controller> StockManager for StoreEngine<C> {
    fn add_books(&self, books: Vec<StockRecord>) -> Result<()> {
        StoreEngine::add_books(self, books)
    }

    fn add_copies(&self, copies: &[BookCopy]) -> Result<()> {
        StoreEngine::add_copies(self, copies)
    }

    fn get_books(&self) -> Result<Vec<StockRecord>> {
        Ok(StoreEngine::get_books(self))
    }

    fn get_books_by_isbn(&self, isbns: &[Isbn]) -> Result<Vec<StockRecord>> {
        StoreEngine::get_books_by_isbn(self, isbns)
    }

    fn update_editor_picks(&self, picks: &[EditorPick]) -> Result<()> {
        StoreEngine::update_editor_picks(self, picks)
    }

    fn get_books_in_demand(&self) -> Result<Vec<StockRecord>> {
        Ok(StoreEngine::get_books_in_demand(self))
    }

    fn remove_all_books(&self) -> Result<usize> {
        Ok(StoreEngine::remove_all_books(self))
    }
}

impl<C: Controller> Storefront for StoreEngine<C> {
    fn buy_books(&self, copies: &[BookCopy]) -> Result<()> {
        StoreEngine::buy_books(self, copies)
    }

    fn get_books(&self, isbns: &[Isbn]) -> Result<Vec<Book>> {
        StoreEngine::get_storefront_books(self, isbns)
    }

    fn get_editor_picks(&self, count: usize) -> Result<Vec<Book>> {
        StoreEngine::get_editor_picks(self, count)
    }

    fn rate_books(&self, ratings: &[BookRating]) -> Result<()> {
        StoreEngine::rate_books(self, ratings)
    }

    fn get_top_rated_books(&self, count: usize) -> Result<Vec<Book>> {
        Ok(StoreEngine::get_top_rated_books(self, count))
    }
}
