//! Transport strategy implementations

mod binding;
mod factory;
mod http;
mod sse;
mod stdio;

pub use binding::probe_port;
pub use factory::{StrategyConstructor, TransportStrategyFactory, register_builtin_transports};
pub use http::HttpTransportStrategy;
pub use sse::SseTransportStrategy;
pub use stdio::StdioTransportStrategy;
