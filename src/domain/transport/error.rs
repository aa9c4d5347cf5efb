use thiserror::Error;

/// Fatal, pre-startup transport configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Port must be between 1 and 65535, got {port}")]
    InvalidPort { port: u16 },

    #[error("Invalid host address: {host}. Use an IP address, 'localhost' or a valid hostname")]
    InvalidHost { host: String },

    #[error("Port {port} is already in use on {host}: {reason}")]
    PortInUse {
        host: String,
        port: u16,
        reason: String,
    },

    #[error("Cannot bind {host}:{port}: {reason}")]
    BindFailed {
        host: String,
        port: u16,
        reason: String,
    },

    #[error("Unknown transport '{kind}'. Available transports: {available}")]
    UnknownTransport { kind: String, available: String },
}

impl ConfigError {
    pub fn invalid_host(host: impl Into<String>) -> Self {
        Self::InvalidHost { host: host.into() }
    }

    pub fn port_in_use(host: impl Into<String>, port: u16, reason: impl Into<String>) -> Self {
        Self::PortInUse {
            host: host.into(),
            port,
            reason: reason.into(),
        }
    }

    pub fn bind_failed(host: impl Into<String>, port: u16, reason: impl Into<String>) -> Self {
        Self::BindFailed {
            host: host.into(),
            port,
            reason: reason.into(),
        }
    }

    pub fn unknown_transport(kind: impl Into<String>, available: &[String]) -> Self {
        Self::UnknownTransport {
            kind: kind.into(),
            available: available.join(", "),
        }
    }
}
