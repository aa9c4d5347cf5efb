use std::time::Duration;

use serde::Deserialize;

use crate::domain::{ConfigError, TransportConfig, TransportKind};
use crate::infrastructure::item::{RepositoryKind, RepositoryOptions};

pub const DEFAULT_UPSTREAM_URL: &str = "https://official-joke-api.appspot.com";

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub cache: CacheConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub transport: TransportKind,
    pub host: String,
    pub port: u16,
    pub show_banner: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub kind: RepositoryKind,
    pub ttl_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            transport: TransportKind::Stdio,
            host: crate::domain::transport::DEFAULT_HOST.to_string(),
            port: crate::domain::transport::DEFAULT_PORT,
            show_banner: true,
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_UPSTREAM_URL.to_string(),
            timeout_secs: 10,
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            kind: RepositoryKind::Cached,
            ttl_secs: 300,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

/// Settings that parse but cannot be used
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("server.port must be between 1 and 65535, got 0")]
    InvalidPort,

    #[error("upstream.base_url must start with http:// or https://, got '{0}'")]
    InvalidBaseUrl(String),

    #[error("upstream.timeout_secs must be positive")]
    InvalidTimeout,

    #[error("cache.ttl_secs must be positive")]
    InvalidTtl,
}

impl AppConfig {
    /// Layered load: optional config files, then `PUNCHLINE__*` environment variables
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("PUNCHLINE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.server.port == 0 {
            return Err(SettingsError::InvalidPort);
        }

        let base_url = &self.upstream.base_url;
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(SettingsError::InvalidBaseUrl(base_url.clone()));
        }

        if self.upstream.timeout_secs == 0 {
            return Err(SettingsError::InvalidTimeout);
        }

        if self.cache.ttl_secs == 0 {
            return Err(SettingsError::InvalidTtl);
        }

        Ok(())
    }

    pub fn transport_config(&self) -> Result<TransportConfig, ConfigError> {
        Ok(TransportConfig::new(
            self.server.transport,
            self.server.host.clone(),
            self.server.port,
        )?
        .with_show_banner(self.server.show_banner))
    }

    pub fn repository_options(&self) -> RepositoryOptions {
        RepositoryOptions::new(self.upstream.base_url.trim_end_matches('/'))
            .with_timeout(Duration::from_secs(self.upstream.timeout_secs))
            .with_cache_ttl(Duration::from_secs(self.cache.ttl_secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.server.transport, TransportKind::Stdio);
        assert_eq!(config.cache.kind, RepositoryKind::Cached);
        assert_eq!(config.cache.ttl_secs, 300);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert_eq!(config.validate(), Err(SettingsError::InvalidPort));

        let mut config = AppConfig::default();
        config.upstream.base_url = "ftp://example.com".to_string();
        assert!(matches!(config.validate(), Err(SettingsError::InvalidBaseUrl(_))));

        let mut config = AppConfig::default();
        config.upstream.timeout_secs = 0;
        assert_eq!(config.validate(), Err(SettingsError::InvalidTimeout));

        let mut config = AppConfig::default();
        config.cache.ttl_secs = 0;
        assert_eq!(config.validate(), Err(SettingsError::InvalidTtl));
    }

    #[test]
    fn test_deserialize_partial_sections() {
        let json = serde_json::json!({
            "server": { "transport": "http", "port": 9000 },
            "cache": { "kind": "source" }
        });

        let config: AppConfig = serde_json::from_value(json).unwrap();

        assert_eq!(config.server.transport, TransportKind::Http);
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.cache.kind, RepositoryKind::Source);
        assert_eq!(config.cache.ttl_secs, 300);
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_transport_config() {
        let mut config = AppConfig::default();
        config.server.transport = TransportKind::Sse;
        config.server.port = 8100;
        config.server.show_banner = false;

        let transport = config.transport_config().unwrap();

        assert_eq!(transport.kind(), TransportKind::Sse);
        assert_eq!(transport.port(), 8100);
        assert!(!transport.show_banner());
    }

    #[test]
    fn test_repository_options() {
        let mut config = AppConfig::default();
        config.upstream.base_url = "http://localhost:3005/".to_string();
        config.cache.ttl_secs = 60;

        let options = config.repository_options();

        assert_eq!(options.base_url, "http://localhost:3005");
        assert_eq!(options.cache_ttl, Duration::from_secs(60));
        assert_eq!(options.timeout, Duration::from_secs(10));
    }
}
