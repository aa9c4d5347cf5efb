//! Transport strategy registry
//!
//! Maps a configured transport name to a constructed strategy. New
//! transports are added through `register` without touching this module.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, info};

use super::{HttpTransportStrategy, SseTransportStrategy, StdioTransportStrategy};
use crate::domain::{ConfigError, TransportConfig, TransportKind, TransportStrategy};

/// Builds a strategy from its configuration
pub type StrategyConstructor =
    Arc<dyn Fn(TransportConfig) -> Box<dyn TransportStrategy> + Send + Sync>;

/// Registry-backed factory for transport strategies
#[derive(Clone)]
pub struct TransportStrategyFactory {
    registry: HashMap<String, StrategyConstructor>,
}

impl TransportStrategyFactory {
    /// Factory with the built-in transports registered
    pub fn new() -> Self {
        let mut factory = Self::empty();
        register_builtin_transports(&mut factory);
        factory
    }

    /// Factory with nothing registered
    pub fn empty() -> Self {
        Self {
            registry: HashMap::new(),
        }
    }

    /// Register (or replace) the constructor for `kind`
    pub fn register<F>(&mut self, kind: impl Into<String>, constructor: F)
    where
        F: Fn(TransportConfig) -> Box<dyn TransportStrategy> + Send + Sync + 'static,
    {
        let kind = kind.into().to_lowercase();

        if self.registry.contains_key(&kind) {
            info!(transport = %kind, "Replacing registered transport strategy");
        } else {
            debug!(transport = %kind, "Registering transport strategy");
        }

        self.registry.insert(kind, Arc::new(constructor));
    }

    pub fn is_registered(&self, kind: &str) -> bool {
        self.registry.contains_key(&kind.to_lowercase())
    }

    /// Registered transport names, sorted
    pub fn available(&self) -> Vec<String> {
        let mut names: Vec<String> = self.registry.keys().cloned().collect();
        names.sort();
        names
    }

    /// Construct the strategy registered under `kind`
    pub fn create(
        &self,
        kind: &str,
        config: TransportConfig,
    ) -> Result<Box<dyn TransportStrategy>, ConfigError> {
        let key = kind.trim().to_lowercase();
        let constructor = self
            .registry
            .get(&key)
            .ok_or_else(|| ConfigError::unknown_transport(kind, &self.available()))?;

        debug!(transport = %key, host = config.host(), port = config.port(), "Creating transport strategy");
        Ok(constructor(config))
    }

    /// Startup path: construct from `config.kind()`, validate, then prepare
    pub fn create_validated(
        &self,
        config: TransportConfig,
    ) -> Result<Box<dyn TransportStrategy>, ConfigError> {
        let kind = config.kind();
        info!(transport = %kind, "Creating transport strategy");

        let strategy = self.create(kind.as_str(), config)?;
        strategy.validate()?;
        strategy.prepare();

        Ok(strategy)
    }
}

impl Default for TransportStrategyFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TransportStrategyFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransportStrategyFactory")
            .field("transports", &self.available())
            .finish()
    }
}

/// Register the stdio, http and sse strategies
pub fn register_builtin_transports(factory: &mut TransportStrategyFactory) {
    for kind in TransportKind::ALL {
        match kind {
            TransportKind::Stdio => factory.register(kind.as_str(), |config| {
                Box::new(StdioTransportStrategy::new(config))
            }),
            TransportKind::Http => factory.register(kind.as_str(), |config| {
                Box::new(HttpTransportStrategy::new(config))
            }),
            TransportKind::Sse => factory.register(kind.as_str(), |config| {
                Box::new(SseTransportStrategy::new(config))
            }),
        }
    }
}
