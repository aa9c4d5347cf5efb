use std::error::Error as StdError;

use thiserror::Error;

type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Item not found: {id}")]
    NotFound { id: u64 },

    #[error("Upstream error: {message}")]
    Upstream {
        message: String,
        #[source]
        source: Option<BoxError>,
    },

    #[error("Invalid request: {reason}")]
    Invalid { reason: String },
}

impl DomainError {
    pub fn not_found(id: u64) -> Self {
        Self::NotFound { id }
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream {
            message: message.into(),
            source: None,
        }
    }

    pub fn upstream_caused_by(
        message: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self::Upstream {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::Invalid {
            reason: reason.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
