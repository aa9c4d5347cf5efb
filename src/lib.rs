//! Punchline
//!
//! A small joke-serving tool backend with:
//! - An HTTP upstream item repository
//! - A TTL cache decorator with hit/miss/eviction statistics
//! - Pluggable transport strategies (stdio, streamable HTTP, SSE)

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use domain::{ConfigError, DomainError, TransportStrategy};
use infrastructure::{
    item::DefaultRepository, services::ItemService, transport::TransportStrategyFactory,
};
use tracing::info;

/// Everything the entry points need, wired from one configuration
#[derive(Debug)]
pub struct AppContext {
    pub config: AppConfig,
    pub repository: DefaultRepository,
    pub transports: TransportStrategyFactory,
}

impl AppContext {
    /// Build, validate and prepare the configured transport
    pub fn select_transport(&self) -> Result<Box<dyn TransportStrategy>, ConfigError> {
        let transport_config = self.config.transport_config()?;
        self.transports.create_validated(transport_config)
    }

    /// Service over the shared default repository
    pub async fn item_service(&self) -> Result<ItemService, DomainError> {
        let repository = self.repository.get(false).await?;
        Ok(ItemService::new(repository))
    }
}

/// Create the application context with custom configuration
pub fn create_app_context(config: AppConfig) -> anyhow::Result<AppContext> {
    config.validate()?;

    let repository = DefaultRepository::new(config.cache.kind, config.repository_options());
    let transports = TransportStrategyFactory::new();

    info!(
        repository = %config.cache.kind,
        upstream = %config.upstream.base_url,
        transports = ?transports.available(),
        "Application context created"
    );

    Ok(AppContext {
        config,
        repository,
        transports,
    })
}
