//! Store engine for the bookstore
//!
//! The operation set (add, buy, restock, edit picks, rate, read) is written
//! once against [`Controller`](bookstore_concurrency::Controller); callers do
//! not know which locking strategy is plugged in.
//!
//! - [`StoreEngine`]: the operations, validate-all then apply-all
//! - [`StockManager`] / [`Storefront`]: the two capability surfaces
//! - [`StoreConfig`] / [`StoreBuilder`]: strategy and sampling configuration
//! - [`EngineMetrics`]: committed/rejected operation counters

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod api;
pub mod config;
pub mod engine;
pub mod metrics;

pub use api::{StockManager, Storefront};
pub use config::{ConfigError, StoreBuilder, StoreConfig};
pub use engine::{BookStoreEngine, StoreEngine};
pub use metrics::{EngineMetrics, MetricsSnapshot};
