use crate::domain::{ConfigError, RunArguments, TransportConfig, TransportStrategy};

use super::binding::{build_run_arguments, validate_network_binding};

/// Network transport speaking streamable HTTP
#[derive(Debug, Clone)]
pub struct HttpTransportStrategy {
    config: TransportConfig,
}

impl HttpTransportStrategy {
    pub const NAME: &'static str = "streamable-http";

    pub fn new(config: TransportConfig) -> Self {
        Self { config }
    }
}

impl TransportStrategy for HttpTransportStrategy {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn config(&self) -> &TransportConfig {
        &self.config
    }

    fn run_arguments(&self) -> RunArguments {
        build_run_arguments(self.name(), &self.config, true)
    }

    fn prepare(&self) {
        tracing::info!(
            transport = self.name(),
            "Server will listen on {}:{}",
            self.config.host(),
            self.config.port()
        );
        tracing::debug!(show_banner = self.config.show_banner(), "Banner setting");
    }

    fn validate(&self) -> Result<(), ConfigError> {
        validate_network_binding(self.name(), &self.config)
    }
}
