//! Command dispatch
//!
//! The [`Executor`] is the server side of the gateway: it maps each
//! [`Command`] onto one engine call. It adds no semantics of its own; a
//! command has exactly the atomicity and error contract of the engine
//! operation it names.

use crate::command::{Command, Output};
use crate::wire::{Response, WireError};
use bookstore_concurrency::{Controller, StrategyController};
use bookstore_core::{Result, StoreError};
use bookstore_engine::StoreEngine;
use std::sync::Arc;
use tracing::debug_span;

/// Executes commands against a shared engine
pub struct Executor<C: Controller = StrategyController> {
    engine: Arc<StoreEngine<C>>,
}

impl<C: Controller> Executor<C> {
    /// Create an executor over the given engine
    pub fn new(engine: Arc<StoreEngine<C>>) -> Self {
        Self { engine }
    }

    /// The engine commands are executed against
    pub fn engine(&self) -> &Arc<StoreEngine<C>> {
        &self.engine
    }

    /// Execute one command
    pub fn execute(&self, command: Command) -> Result<Output> {
        let _span = debug_span!("command", op = command.name()).entered();
        let engine = &self.engine;

        match command {
            Command::AddBooks { books } => engine.add_books(books).map(|()| Output::Unit),
            Command::AddCopies { copies } => engine.add_copies(&copies).map(|()| Output::Unit),
            Command::UpdateEditorPicks { picks } => {
                engine.update_editor_picks(&picks).map(|()| Output::Unit)
            }
            Command::GetBooks => Ok(Output::StockRecords(engine.get_books())),
            Command::GetBooksByIsbn { isbns } => {
                engine.get_books_by_isbn(&isbns).map(Output::StockRecords)
            }
            Command::GetBooksInDemand => Ok(Output::StockRecords(engine.get_books_in_demand())),
            Command::RemoveAllBooks => Ok(Output::Count(engine.remove_all_books())),
            Command::BuyBooks { copies } => engine.buy_books(&copies).map(|()| Output::Unit),
            Command::GetStorefrontBooks { isbns } => {
                engine.get_storefront_books(&isbns).map(Output::Books)
            }
            Command::GetEditorPicks { count } => engine.get_editor_picks(count).map(Output::Books),
            Command::RateBooks { ratings } => engine.rate_books(&ratings).map(|()| Output::Unit),
            Command::GetTopRatedBooks { count } => {
                Ok(Output::Books(engine.get_top_rated_books(count)))
            }
        }
    }

    /// Decode a JSON request, execute it and encode the response
    ///
    /// A request that does not decode into a command is answered with a
    /// `Validation` error; nothing is executed.
    pub fn handle_json(&self, request: &str) -> String {
        let response = match serde_json::from_str::<Command>(request) {
            Ok(command) => Response::from_result(self.execute(command)),
            Err(err) => Response::Error {
                error: WireError::from(&StoreError::validation(format!(
                    "malformed request: {}",
                    err
                ))),
            },
        };
        response.encode()
    }
}

impl<C: Controller> Clone for Executor<C> {
    fn clone(&self) -> Self {
        Self {
            engine: Arc::clone(&self.engine),
        }
    }
}

impl<C: Controller + std::fmt::Debug> std::fmt::Debug for Executor<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Executor").field("engine", &self.engine).finish()
    }
}
