//! Concurrency layer for the bookstore
//!
//! This crate implements the two interchangeable locking strategies that
//! protect the catalog:
//! - GlobalLockController: one exclusive lock, every operation serialized
//! - PartitionedLockController: structural shared/exclusive lock over the
//!   key set plus one shared/exclusive lock per ISBN
//! - BatchKeys / Batch: the sorted, duplicate-free ISBN sequence that fixes
//!   lock acquisition order (the deadlock-avoidance mechanism)
//! - StrategyController: strategy chosen at construction time

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod batch;
pub mod controller;
pub mod global;
pub mod partitioned;
pub mod strategy;

pub use batch::{Batch, BatchKeys};
pub use controller::Controller;
pub use global::GlobalLockController;
pub use partitioned::PartitionedLockController;
pub use strategy::{LockStrategy, StrategyController};
