//! Transport selection and its immutable configuration

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::ConfigError;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

/// Built-in transport bindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportKind {
    #[default]
    Stdio,
    Http,
    Sse,
}

impl TransportKind {
    pub const ALL: [TransportKind; 3] = [Self::Stdio, Self::Http, Self::Sse];

    /// Registry key of the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stdio => "stdio",
            Self::Http => "http",
            Self::Sse => "sse",
        }
    }
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransportKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == lowered)
            .ok_or_else(|| {
                let available: Vec<String> =
                    Self::ALL.iter().map(|kind| kind.as_str().to_string()).collect();
                ConfigError::unknown_transport(s, &available)
            })
    }
}

/// Immutable transport configuration; build a new one to reconfigure
#[derive(Debug, Clone, PartialEq)]
pub struct TransportConfig {
    kind: TransportKind,
    host: String,
    port: u16,
    show_banner: bool,
    extra: Map<String, Value>,
}

impl TransportConfig {
    pub fn new(kind: TransportKind, host: impl Into<String>, port: u16) -> Result<Self, ConfigError> {
        if port == 0 {
            return Err(ConfigError::InvalidPort { port });
        }

        Ok(Self {
            kind,
            host: host.into(),
            port,
            show_banner: true,
            extra: Map::new(),
        })
    }

    pub fn with_show_banner(mut self, show_banner: bool) -> Self {
        self.show_banner = show_banner;
        self
    }

    /// Adds a transport-specific option passed through to the runner
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub fn kind(&self) -> TransportKind {
        self.kind
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn show_banner(&self) -> bool {
        self.show_banner
    }

    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            kind: TransportKind::default(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            show_banner: true,
            extra: Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parsing_is_case_insensitive() {
        assert_eq!("STDIO".parse::<TransportKind>().unwrap(), TransportKind::Stdio);
        assert_eq!("Http".parse::<TransportKind>().unwrap(), TransportKind::Http);
        assert_eq!(" sse ".parse::<TransportKind>().unwrap(), TransportKind::Sse);
    }

    #[test]
    fn test_unknown_kind() {
        let err = "websocket".parse::<TransportKind>().unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnknownTransport {
                kind: "websocket".to_string(),
                available: "stdio, http, sse".to_string(),
            }
        );
    }

    #[test]
    fn test_kind_deserializes_lowercase() {
        let kind: TransportKind = serde_json::from_str("\"sse\"").unwrap();
        assert_eq!(kind, TransportKind::Sse);
    }

    #[test]
    fn test_port_zero_rejected() {
        let err = TransportConfig::new(TransportKind::Http, "127.0.0.1", 0).unwrap_err();
        assert_eq!(err, ConfigError::InvalidPort { port: 0 });
    }

    #[test]
    fn test_builder() {
        let config = TransportConfig::new(TransportKind::Http, "127.0.0.1", 9000)
            .unwrap()
            .with_show_banner(false)
            .with_option("path", "/mcp");

        assert_eq!(config.kind(), TransportKind::Http);
        assert_eq!(config.host(), "127.0.0.1");
        assert_eq!(config.port(), 9000);
        assert!(!config.show_banner());
        assert_eq!(config.extra().get("path"), Some(&Value::from("/mcp")));
    }

    #[test]
    fn test_defaults() {
        let config = TransportConfig::default();
        assert_eq!(config.kind(), TransportKind::Stdio);
        assert_eq!(config.host(), DEFAULT_HOST);
        assert_eq!(config.port(), DEFAULT_PORT);
        assert!(config.show_banner());
        assert!(config.extra().is_empty());
    }
}
