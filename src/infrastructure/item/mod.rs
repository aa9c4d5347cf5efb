//! Item repository implementations

mod cached_repository;
mod factory;
mod http_fetcher;
mod http_repository;

pub use cached_repository::{CachedItemRepository, DEFAULT_CACHE_TTL};
pub use factory::{DefaultRepository, ItemRepositoryFactory, RepositoryKind, RepositoryOptions};
pub use http_fetcher::{DEFAULT_TIMEOUT, HttpItemFetcher};
pub use http_repository::HttpItemRepository;
