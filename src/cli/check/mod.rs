//! Check command - validates the transport binding before serving

use clap::Args;
use tracing::{error, info};

use crate::config::AppConfig;
use crate::domain::TransportKind;

/// Arguments for the check command
#[derive(Args, Clone, Debug, Default)]
pub struct CheckArgs {
    /// Transport to validate (overrides config)
    #[arg(long)]
    pub transport: Option<TransportKind>,

    /// Host to bind (overrides config)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind (overrides config)
    #[arg(long)]
    pub port: Option<u16>,
}

impl CheckArgs {
    fn apply(&self, config: &mut AppConfig) {
        if let Some(transport) = self.transport {
            config.server.transport = transport;
        }
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
    }
}

/// Validate the transport and print its run arguments
pub async fn run(args: CheckArgs) -> anyhow::Result<()> {
    let mut config = super::bootstrap()?;
    args.apply(&mut config);

    let context = crate::create_app_context(config)?;

    let strategy = context.select_transport().map_err(|e| {
        error!(error = %e, "Transport validation failed");
        e
    })?;
    info!(transport = strategy.name(), "Transport ready");

    println!("{}", serde_json::to_string_pretty(&strategy.run_arguments())?);

    let repository = context.repository.get(false).await?;
    let healthy = repository.health_check().await;
    if healthy {
        info!(repository = repository.repository_name(), "Upstream reachable");
    } else {
        error!(repository = repository.repository_name(), "Upstream unreachable");
    }
    println!("upstream healthy: {}", healthy);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_overrides_only_given_fields() {
        let mut config = AppConfig::default();
        let args = CheckArgs {
            transport: Some(TransportKind::Http),
            host: None,
            port: Some(8123),
        };

        args.apply(&mut config);

        assert_eq!(config.server.transport, TransportKind::Http);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8123);
    }
}
