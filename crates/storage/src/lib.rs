//! Storage layer for the bookstore
//!
//! This crate implements the catalog, the single shared representation both
//! concurrency strategies operate on:
//! - Catalog: FxHashMap from ISBN to a record slot, no locking of its own
//! - RecordSlot: what a map entry holds (a bare record, or a record behind
//!   its own lock for two-level locking)
//! - Add-all validation that never partially applies a batch

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod slot;

pub use catalog::Catalog;
pub use slot::{RecordLock, RecordSlot};
