//! Command execution layer for the bookstore
//!
//! The network boundary of the store, independent of any particular
//! transport:
//! - [`Command`] / [`Output`]: one serializable value per operation and result
//! - [`Executor`]: server side, dispatches commands to a shared engine
//! - [`Response`] / [`WireError`]: JSON envelope with structured errors
//! - [`RemoteStore`]: client side, implements the capability traits over a
//!   [`Transport`]
//!
//! # Example
//!
//! ```ignore
//! let engine = Arc::new(StoreBuilder::new().build());
//! let remote = RemoteStore::new(InProcessTransport::new(Executor::new(engine)));
//!
//! remote.add_books(vec![StockRecord::new(3044560, "Title", "Author", 10.0, 5)])?;
//! remote.buy_books(&[BookCopy::new(3044560, 5)])?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod command;
pub mod executor;
pub mod wire;


pub use client::{InProcessTransport, RemoteStore, Transport};
pub use command::{Command, Output};
pub use executor::Executor;
pub use wire::{Response, WireError};
