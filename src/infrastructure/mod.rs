//! Infrastructure layer - External service implementations

pub mod item;
pub mod logging;
pub mod services;
pub mod transport;
