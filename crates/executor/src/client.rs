//! Remote client
//!
//! [`RemoteStore`] implements both capability traits by shipping each call
//! as a JSON [`Command`] through a [`Transport`]. The transport is whatever
//! carries a request string to an [`Executor`] and brings the response
//! back; [`InProcessTransport`] calls one directly.
//!
//! ## Retries
//!
//! A non-idempotent write is never re-sent: if the transport fails, the
//! write may or may not have landed, and only the caller can decide to
//! issue it again. Idempotent commands are retried on transport failure
//! when the client was built with [`RemoteStore::with_retries`].

use crate::command::{Command, Output};
use crate::executor::Executor;
use crate::wire::Response;
use bookstore_concurrency::{Controller, StrategyController};
use bookstore_core::{Book, BookCopy, BookRating, EditorPick, Isbn, Result, StockRecord, StoreError};
use bookstore_engine::{StockManager, Storefront};
use tracing::{debug, debug_span};

/// Carries one request to the store and returns its response
pub trait Transport: Send + Sync {
    /// Deliver `request` and wait for the answer
    ///
    /// Fails with `Transport` if no answer was obtained.
    fn round_trip(&self, request: String) -> Result<String>;
}

/// Transport that hands requests straight to a local executor
#[derive(Debug)]
pub struct InProcessTransport<C: Controller = StrategyController> {
    executor: Executor<C>,
}

impl<C: Controller> InProcessTransport<C> {
    /// Create a transport over an executor
    pub fn new(executor: Executor<C>) -> Self {
        Self { executor }
    }
}

impl<C: Controller> Transport for InProcessTransport<C> {
    fn round_trip(&self, request: String) -> Result<String> {
        Ok(self.executor.handle_json(&request))
    }
}

/// Store client speaking the JSON command protocol
#[derive(Debug)]
pub struct RemoteStore<T: Transport> {
    transport: T,
    idempotent_retries: u32,
}

impl<T: Transport> RemoteStore<T> {
    /// Create a client that never retries
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            idempotent_retries: 0,
        }
    }

    /// Create a client that re-sends idempotent commands up to `retries`
    /// extra times after a transport failure
    pub fn with_retries(transport: T, retries: u32) -> Self {
        Self {
            transport,
            idempotent_retries: retries,
        }
    }

    /// The underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send one command and decode its answer
    pub fn call(&self, command: &Command) -> Result<Output> {
        let _span = debug_span!("remote_call", op = command.name()).entered();
        let request = serde_json::to_string(command).map_err(|err| {
            StoreError::transport(format!("cannot encode {}: {}", command.name(), err))
        })?;

        let retries = if command.is_idempotent() {
            self.idempotent_retries
        } else {
            0
        };
        let mut attempt = 0;
        let response = loop {
            match self.transport.round_trip(request.clone()) {
                Err(e) if e.is_transport() && attempt < retries => {
                    attempt += 1;
                    debug!(attempt, error = %e, "retrying idempotent command");
                }
                other => break other?,
            }
        };

        Response::decode(&response)?.into_result()
    }

    fn call_unit(&self, command: Command) -> Result<()> {
        match self.call(&command)? {
            Output::Unit => Ok(()),
            other => Err(unexpected(&command, &other)),
        }
    }

    fn call_records(&self, command: Command) -> Result<Vec<StockRecord>> {
        match self.call(&command)? {
            Output::StockRecords(records) => Ok(records),
            other => Err(unexpected(&command, &other)),
        }
    }

    fn call_books(&self, command: Command) -> Result<Vec<Book>> {
        match self.call(&command)? {
            Output::Books(books) => Ok(books),
            other => Err(unexpected(&command, &other)),
        }
    }
}

fn unexpected(command: &Command, output: &Output) -> StoreError {
    StoreError::transport(format!(
        "unexpected output for {}: {:?}",
        command.name(),
        output
    ))
}

impl<T: Transport> StockManager for RemoteStore<T> {
    fn add_books(&self, books: Vec<StockRecord>) -> Result<()> {
        self.call_unit(Command::AddBooks { books })
    }

    fn add_copies(&self, copies: &[BookCopy]) -> Result<()> {
        self.call_unit(Command::AddCopies {
            copies: copies.to_vec(),
        })
    }

    fn get_books(&self) -> Result<Vec<StockRecord>> {
        self.call_records(Command::GetBooks)
    }

    fn get_books_by_isbn(&self, isbns: &[Isbn]) -> Result<Vec<StockRecord>> {
        self.call_records(Command::GetBooksByIsbn {
            isbns: isbns.to_vec(),
        })
    }

    fn update_editor_picks(&self, picks: &[EditorPick]) -> Result<()> {
        self.call_unit(Command::UpdateEditorPicks {
            picks: picks.to_vec(),
        })
    }

    fn get_books_in_demand(&self) -> Result<Vec<StockRecord>> {
        self.call_records(Command::GetBooksInDemand)
    }

    fn remove_all_books(&self) -> Result<usize> {
        let command = Command::RemoveAllBooks;
        match self.call(&command)? {
            Output::Count(removed) => Ok(removed),
            other => Err(unexpected(&command, &other)),
        }
    }
}

impl<T: Transport> Storefront for RemoteStore<T> {
    fn buy_books(&self, copies: &[BookCopy]) -> Result<()> {
        self.call_unit(Command::BuyBooks {
            copies: copies.to_vec(),
        })
    }

    fn get_books(&self, isbns: &[Isbn]) -> Result<Vec<Book>> {
        self.call_books(Command::GetStorefrontBooks {
            isbns: isbns.to_vec(),
        })
    }

    fn get_editor_picks(&self, count: usize) -> Result<Vec<Book>> {
        self.call_books(Command::GetEditorPicks { count })
    }

    fn rate_books(&self, ratings: &[BookRating]) -> Result<()> {
        self.call_unit(Command::RateBooks {
            ratings: ratings.to_vec(),
        })
    }

    fn get_top_rated_books(&self, count: usize) -> Result<Vec<Book>> {
        self.call_books(Command::GetTopRatedBooks { count })
    }
}
