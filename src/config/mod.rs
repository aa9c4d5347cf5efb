mod app_config;

pub use app_config::{
    AppConfig, CacheConfig, DEFAULT_UPSTREAM_URL, LogFormat, LoggingConfig, ServerConfig,
    SettingsError, UpstreamConfig,
};
