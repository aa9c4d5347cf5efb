use std::fmt::Debug;

use serde_json::{Map, Value};

use super::{ConfigError, TransportConfig};

/// Arguments handed to whatever actually runs the chosen transport
pub type RunArguments = Map<String, Value>;

/// A pluggable binding describing how the process accepts inbound calls.
///
/// Lifecycle: constructed, optionally validated, then queried for its run
/// arguments. Strategies never bind the transport themselves.
pub trait TransportStrategy: Send + Sync + Debug {
    /// Wire-level transport identifier
    fn name(&self) -> &'static str;

    fn config(&self) -> &TransportConfig;

    fn run_arguments(&self) -> RunArguments;

    /// Pre-start hook; only logs
    fn prepare(&self) {}

    fn validate(&self) -> Result<(), ConfigError> {
        Ok(())
    }
}
