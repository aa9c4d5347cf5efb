//! CLI module for Punchline
//!
//! Provides subcommands for exercising the backend:
//! - `check`: validate the configured transport and probe the upstream
//! - `fetch`: read items through the configured repository
//! - `transports`: list registered transport strategies

pub mod check;
pub mod fetch;
pub mod transports;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::infrastructure::logging;

/// Punchline - joke tools behind a cached upstream repository
#[derive(Parser)]
#[command(name = "punchline")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate the transport binding and report upstream health
    Check(check::CheckArgs),

    /// Fetch items through the configured repository
    Fetch(fetch::FetchArgs),

    /// List registered transports
    Transports,
}

/// Load `.env` and layered configuration, then install logging
pub(crate) fn bootstrap() -> anyhow::Result<AppConfig> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    logging::init_logging(&logging::LoggingConfig::from(&config.logging));

    Ok(config)
}
