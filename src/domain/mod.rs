//! Domain layer - Core entities, capabilities and errors

pub mod cache;
pub mod error;
pub mod item;
pub mod transport;

pub use cache::{CacheStats, ItemCacheKey};
pub use error::DomainError;
pub use item::{
    Category, FetchError, Item, ItemCollection, ItemFetcher, ItemRepository, validate_item_id,
};
pub use transport::{
    ConfigError, RunArguments, TransportConfig, TransportKind, TransportStrategy, validate_host,
};
