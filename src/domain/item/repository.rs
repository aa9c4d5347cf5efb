use async_trait::async_trait;
use std::fmt::Debug;

use super::{Item, ItemCollection};
use crate::domain::DomainError;
use crate::domain::cache::CacheStats;

/// Data access capability for items, whatever the origin
#[async_trait]
pub trait ItemRepository: Send + Sync + Debug {
    /// A different item on every call
    async fn fetch_random(&self) -> Result<Item, DomainError>;

    /// `count` different items; fails with `Invalid` when `count` is zero
    async fn fetch_random_batch(&self, count: usize) -> Result<ItemCollection, DomainError>;

    async fn fetch_by_id(&self, id: u64) -> Result<Item, DomainError>;

    async fn fetch_by_category(&self, category: &str) -> Result<ItemCollection, DomainError>;

    /// Never fails; any problem reaching the origin yields `false`
    async fn health_check(&self) -> bool;

    /// Cache statistics, for repositories that cache
    async fn cache_stats(&self) -> Option<CacheStats> {
        None
    }

    /// Get repository name for logging/debugging
    fn repository_name(&self) -> &'static str;
}
