//! Seam to the component that actually talks to the upstream item API

use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;

use super::{Item, ItemCollection};

/// Failure signals raised by an item fetcher
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Upstream reported resource not found: {url}")]
    NotFound { url: String },

    #[error("Upstream returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Timed out talking to upstream: {message}")]
    Timeout { message: String },

    #[error("Connection to upstream failed: {message}")]
    Connection { message: String },

    #[error("Failed to parse upstream response: {message}")]
    Parse { message: String },
}

impl FetchError {
    pub fn not_found(url: impl Into<String>) -> Self {
        Self::NotFound { url: url.into() }
    }

    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Raw read operations against the upstream origin
#[async_trait]
pub trait ItemFetcher: Send + Sync + Debug {
    async fn random(&self) -> Result<Item, FetchError>;

    async fn random_batch(&self, count: usize) -> Result<ItemCollection, FetchError>;

    async fn by_id(&self, id: u64) -> Result<Item, FetchError>;

    async fn by_category(&self, category: &str) -> Result<ItemCollection, FetchError>;

    /// Base endpoint, for logging
    fn base_url(&self) -> &str;
}
