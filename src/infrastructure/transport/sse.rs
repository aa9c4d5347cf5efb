use crate::domain::{ConfigError, RunArguments, TransportConfig, TransportStrategy};

use super::binding::{build_run_arguments, validate_network_binding};

/// Network transport streaming server-sent events
#[derive(Debug, Clone)]
pub struct SseTransportStrategy {
    config: TransportConfig,
}

impl SseTransportStrategy {
    pub const NAME: &'static str = "sse";

    pub fn new(config: TransportConfig) -> Self {
        Self { config }
    }
}

impl TransportStrategy for SseTransportStrategy {
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
            "SSE server will listen on {}:{}",
            self.config.host(),
            self.config.port()
        );
    }

    fn validate(&self) -> Result<(), ConfigError> {
        validate_network_binding(self.name(), &self.config)
    }
}
