//! Transport validation utilities

use std::net::IpAddr;

use once_cell::sync::Lazy;
use regex::Regex;

use super::ConfigError;

/// Maximum length of a DNS hostname
pub const MAX_HOSTNAME_LENGTH: usize = 253;

/// RFC 1123 hostname: dot-separated labels of alphanumerics and inner hyphens
static HOSTNAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9]([a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(\.[a-zA-Z0-9]([a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$")
        .unwrap()
});

/// Basic syntactic host check: IP literal, `localhost` or an RFC 1123 hostname
pub fn validate_host(host: &str) -> Result<(), ConfigError> {
    if host.parse::<IpAddr>().is_ok() || host == "localhost" {
        return Ok(());
    }

    if host.is_empty() || host.len() > MAX_HOSTNAME_LENGTH || !HOSTNAME_PATTERN.is_match(host) {
        return Err(ConfigError::invalid_host(host));
    }

    Ok(())
}
