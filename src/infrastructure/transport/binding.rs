//! Helpers shared by the transport strategies

use std::io;
use std::net::{SocketAddr, TcpListener, ToSocketAddrs};

use serde_json::Value;

use crate::domain::{ConfigError, RunArguments, TransportConfig, validate_host};

/// Base run arguments; extra options are merged last and win on conflicts
pub(crate) fn build_run_arguments(
    name: &str,
    config: &TransportConfig,
    with_address: bool,
) -> RunArguments {
    let mut args = RunArguments::new();
    args.insert("transport".to_string(), Value::from(name));

    if with_address {
        args.insert("host".to_string(), Value::from(config.host()));
        args.insert("port".to_string(), Value::from(config.port()));
    }

    args.insert("show_banner".to_string(), Value::from(config.show_banner()));

    for (key, value) in config.extra() {
        args.insert(key.clone(), value.clone());
    }

    args
}

/// Host syntax first, then a best-effort bind probe of the port
pub(crate) fn validate_network_binding(
    name: &str,
    config: &TransportConfig,
) -> Result<(), ConfigError> {
    tracing::info!(transport = name, "Validating transport configuration");

    validate_host(config.host())?;
    probe_port(config.host(), config.port())?;

    tracing::info!(
        transport = name,
        host = config.host(),
        port = config.port(),
        "Transport configuration is valid"
    );
    Ok(())
}

/// Bind a throwaway listener to every address `host` resolves to and
/// release it immediately.
///
/// Racy: another process may take the port between this probe and the real
/// bind at startup.
pub fn probe_port(host: &str, port: u16) -> Result<(), ConfigError> {
    let addrs: Vec<SocketAddr> = (host, port)
        .to_socket_addrs()
        .map_err(|e| {
            tracing::error!(host, error = %e, "Cannot resolve host");
            ConfigError::invalid_host(host)
        })?
        .collect();

    if addrs.is_empty() {
        return Err(ConfigError::invalid_host(host));
    }

    probe_addresses(host, port, &addrs)
}

/// Fails on the first address that cannot be bound
fn probe_addresses(host: &str, port: u16, addrs: &[SocketAddr]) -> Result<(), ConfigError> {
    for addr in addrs {
        let listener = TcpListener::bind(addr).map_err(|e| {
            tracing::warn!(host, %addr, error = %e, "Port is not available");
            bind_error(host, port, &e)
        })?;
        drop(listener);
    }

    Ok(())
}

fn bind_error(host: &str, port: u16, error: &io::Error) -> ConfigError {
    match error.kind() {
        io::ErrorKind::AddrInUse => ConfigError::port_in_use(host, port, error.to_string()),
        _ => ConfigError::bind_failed(host, port, error.to_string()),
    }
}
