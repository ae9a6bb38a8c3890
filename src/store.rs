//! Main store entry point
//!
//! [`BookStore`] owns one engine and hands out its capability surfaces,
//! in-process or through the command protocol.

use crate::error::Result;
use bookstore_concurrency::LockStrategy;
use bookstore_engine::{
    BookStoreEngine, MetricsSnapshot, StockManager, StoreBuilder, StoreConfig, Storefront,
};
use bookstore_executor::{Executor, InProcessTransport, RemoteStore};
use std::path::Path;
use std::sync::Arc;

/// The bookstore
///
/// Cheap to clone; clones share one catalog.
///
/// # Example
///
/// ```ignore
/// let store = BookStore::open("./bookstore.toml")?;
///
/// let staff = store.stock_manager();
/// let customers = store.storefront();
/// ```
#[derive(Debug, Clone)]
pub struct BookStore {
    engine: Arc<BookStoreEngine>,
}

impl BookStore {
    /// Create a store with default settings (partitioned locking)
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a store configured by a TOML file
    pub fn open(config_path: impl AsRef<Path>) -> Result<Self> {
        let config = StoreConfig::load(config_path)?;
        Ok(Self::builder().config(config).build())
    }

    /// Create a builder for store configuration
    pub fn builder() -> BookStoreBuilder {
        BookStoreBuilder::new()
    }

    /// Inventory-management capability
    pub fn stock_manager(&self) -> &dyn StockManager {
        &*self.engine
    }

    /// Storefront capability
    pub fn storefront(&self) -> &dyn Storefront {
        &*self.engine
    }

    /// The engine behind both capabilities
    pub fn engine(&self) -> &Arc<BookStoreEngine> {
        &self.engine
    }

    /// Server side of the command protocol over this store
    pub fn executor(&self) -> Executor {
        Executor::new(Arc::clone(&self.engine))
    }

    /// Client of this store that goes through the command protocol
    ///
    /// Every call is encoded, executed and decoded exactly as it would be
    /// across a network boundary.
    pub fn remote(&self) -> RemoteStore<InProcessTransport> {
        RemoteStore::new(InProcessTransport::new(self.executor()))
    }

    /// The locking strategy in use
    pub fn strategy(&self) -> LockStrategy {
        self.engine.strategy()
    }

    /// Operation counters
    pub fn metrics(&self) -> MetricsSnapshot {
        self.engine.metrics()
    }
}

impl Default for BookStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for store configuration
///
/// # Example
///
/// ```ignore
/// // Coarse locking, reproducible editor-pick sampling
/// let store = BookStore::builder()
///     .global_lock()
///     .sampling_seed(42)
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct BookStoreBuilder {
    inner: StoreBuilder,
}

impl BookStoreBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a loaded configuration
    pub fn config(mut self, config: StoreConfig) -> Self {
        self.inner = self.inner.config(config);
        self
    }

    /// Use the given strategy
    pub fn strategy(mut self, strategy: LockStrategy) -> Self {
        self.inner = self.inner.strategy(strategy);
        self
    }

    /// Serialize every operation behind one lock
    pub fn global_lock(mut self) -> Self {
        self.inner = self.inner.global_lock();
        self
    }

    /// Use the structure lock plus per-record locks (default)
    pub fn partitioned(mut self) -> Self {
        self.inner = self.inner.partitioned();
        self
    }

    /// Make editor-pick sampling reproducible
    pub fn sampling_seed(mut self, seed: u64) -> Self {
        self.inner = self.inner.sampling_seed(seed);
        self
    }

    /// Build a store over an empty catalog
    pub fn build(self) -> BookStore {
        BookStore {
            engine: Arc::new(self.inner.build()),
        }
    }
}
