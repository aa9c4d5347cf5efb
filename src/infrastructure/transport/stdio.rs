use crate::domain::{RunArguments, TransportConfig, TransportStrategy};

use super::binding::build_run_arguments;

/// Local transport over the process's standard streams
#[derive(Debug, Clone)]
pub struct StdioTransportStrategy {
    config: TransportConfig,
}

impl StdioTransportStrategy {
    pub const NAME: &'static str = "stdio";

    pub fn new(config: TransportConfig) -> Self {
        Self { config }
    }
}

impl TransportStrategy for StdioTransportStrategy {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn config(&self) -> &TransportConfig {
        &self.config
    }

    fn run_arguments(&self) -> RunArguments {
        build_run_arguments(self.name(), &self.config, false)
    }

    fn prepare(&self) {
        tracing::debug!(
            transport = self.name(),
            show_banner = self.config.show_banner(),
            "Preparing transport"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TransportKind;

    #[test]
    fn test_run_arguments_have_no_address() {
        let config = TransportConfig::new(TransportKind::Stdio, "127.0.0.1", 1)
            .unwrap()
            .with_show_banner(false);
        let strategy = StdioTransportStrategy::new(config);

        let args = strategy.run_arguments();

        assert_eq!(strategy.name(), "stdio");
        assert_eq!(args["transport"], "stdio");
        assert_eq!(args["show_banner"], false);
        assert!(!args.contains_key("host"));
        assert!(!args.contains_key("port"));
    }

    #[test]
    fn test_validate_always_succeeds() {
        // An invalid host is irrelevant for a local transport
        let config = TransportConfig::new(TransportKind::Stdio, "not a host", 80).unwrap();
        assert!(StdioTransportStrategy::new(config).validate().is_ok());
    }
}
