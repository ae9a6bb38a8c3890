//! Store configuration
//!
//! ```toml
//! # bookstore.toml
//! strategy = "global"      # or "partitioned" (default)
//! sampling_seed = 42       # optional; fixes editor-pick sampling
//! ```

use crate::engine::StoreEngine;
use bookstore_concurrency::{LockStrategy, StrategyController};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("config io error: {0}")]
    Io(String),
    /// File is not valid TOML or has unknown fields
    #[error("config parse error: {0}")]
    Parse(String),
}

/// How a store is built
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// Locking strategy protecting the catalog
    pub strategy: LockStrategy,
    /// Seed for editor-pick sampling; entropy-seeded when absent
    pub sampling_seed: Option<u64>,
}

impl StoreConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))
    }

    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|err| ConfigError::Io(format!("{}: {}", path.display(), err)))?;
        Self::from_toml_str(&content)
    }
}

/// Builder for a [`StoreEngine`]
///
/// # Example
///
/// ```ignore
/// let engine = StoreBuilder::new()
///     .global_lock()
///     .sampling_seed(7)
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct StoreBuilder {
    config: StoreConfig,
}

impl StoreBuilder {
    /// Create a builder with default settings (partitioned locking)
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a loaded configuration
    pub fn config(mut self, config: StoreConfig) -> Self {
        self.config = config;
        self
    }

    /// Use the given strategy
    pub fn strategy(mut self, strategy: LockStrategy) -> Self {
        self.config.strategy = strategy;
        self
    }

    /// Serialize every operation behind one lock
    pub fn global_lock(self) -> Self {
        self.strategy(LockStrategy::Global)
    }

    /// Use the structure lock plus per-record locks
    pub fn partitioned(self) -> Self {
        self.strategy(LockStrategy::Partitioned)
    }

    /// Make editor-pick sampling reproducible
    pub fn sampling_seed(mut self, seed: u64) -> Self {
        self.config.sampling_seed = Some(seed);
        self
    }

    /// Build an engine over an empty catalog
    pub fn build(self) -> StoreEngine<StrategyController> {
        let controller = StrategyController::new(self.config.strategy);
        match self.config.sampling_seed {
            Some(seed) => StoreEngine::with_seed(controller, seed),
            None => StoreEngine::new(controller),
        }
    }
}
