//! Transport domain: configuration, strategy contract and errors

mod config;
mod error;
mod strategy;
mod validation;

pub use config::{DEFAULT_HOST, DEFAULT_PORT, TransportConfig, TransportKind};
pub use error::ConfigError;
pub use strategy::{RunArguments, TransportStrategy};
pub use validation::validate_host;
