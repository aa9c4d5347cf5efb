use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;
use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::domain::{
    CacheStats, DomainError, Item, ItemCacheKey, ItemCollection, ItemRepository,
};

pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(300);

#[derive(Debug, Clone)]
enum CachedValue {
    Item(Item),
    Collection(ItemCollection),
}

#[derive(Debug, Clone)]
struct CacheEntry {
    value: CachedValue,
    /// `None` when `now + ttl` is not representable
    expires_at: Option<Instant>,
}

impl CacheEntry {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|expires_at| now >= expires_at)
    }
}

/// Repository wrapper that adds a TTL cache to the deterministic lookups.
///
/// `fetch_by_id` and `fetch_by_category` are cached. Random lookups and the
/// health check always go to the wrapped repository. Failures are never cached.
/// Expired entries are dropped lazily on the next lookup of their key.
///
/// The moka cache is built without a `time_to_live`: expiry is checked against
/// the entry's own deadline so that evictions can be counted.
#[derive(Debug)]
pub struct CachedItemRepository<R: ItemRepository> {
    inner: R,
    ttl: Duration,
    cache: Cache<ItemCacheKey, CacheEntry>,
    stats: Mutex<CacheStats>,
}

impl<R: ItemRepository> CachedItemRepository<R> {
    pub fn new(inner: R, ttl: Duration) -> Self {
        tracing::info!(
            ttl_secs = ttl.as_secs(),
            wrapped = inner.repository_name(),
            "Cached item repository initialized"
        );

        Self {
            inner,
            ttl,
            cache: Cache::builder().build(),
            stats: Mutex::new(CacheStats::default()),
        }
    }

    pub fn with_default_ttl(inner: R) -> Self {
        Self::new(inner, DEFAULT_CACHE_TTL)
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Snapshot of the cache counters
    pub async fn stats(&self) -> CacheStats {
        *self.stats.lock().await
    }

    /// Drop every entry; counters are kept
    pub async fn clear(&self) {
        self.cache.invalidate_all();
        self.cache.run_pending_tasks().await;
        tracing::info!("Item cache cleared");
    }

    pub async fn reset_stats(&self) {
        self.stats.lock().await.reset();
    }

    /// Number of stored entries, expired ones included until they are evicted
    pub async fn len(&self) -> usize {
        self.cache.run_pending_tasks().await;
        usize::try_from(self.cache.entry_count()).unwrap_or(usize::MAX)
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Evict every expired entry now instead of waiting for its next lookup
    pub async fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let expired: Vec<_> = self
            .cache
            .iter()
            .filter(|(_, entry)| entry.is_expired(now))
            .map(|(key, _)| key)
            .collect();

        let mut purged = 0;
        for key in expired {
            if self.cache.remove(key.as_ref()).await.is_some() {
                purged += 1;
            }
        }

        if purged > 0 {
            let mut stats = self.stats.lock().await;
            for _ in 0..purged {
                stats.record_eviction();
            }
            tracing::debug!(purged, "Purged expired cache entries");
        }
        purged
    }

    async fn lookup(&self, key: &ItemCacheKey) -> Option<CachedValue> {
        let now = Instant::now();

        match self.cache.get(key).await {
            Some(entry) if !entry.is_expired(now) => {
                self.stats.lock().await.record_hit();
                tracing::debug!(key = %key, "Cache hit");
                return Some(entry.value);
            }
            Some(_) => {
                // Only the caller that actually removes the entry counts the eviction
                if self.cache.remove(key).await.is_some() {
                    self.stats.lock().await.record_eviction();
                    tracing::debug!(key = %key, "Cache entry expired and evicted");
                }
            }
            None => {}
        }

        self.stats.lock().await.record_miss();
        tracing::debug!(key = %key, "Cache miss");
        None
    }

    async fn store(&self, key: ItemCacheKey, value: CachedValue) {
        let expires_at = Instant::now().checked_add(self.ttl);
        tracing::debug!(key = %key, ttl_secs = self.ttl.as_secs(), "Caching value");

        self.cache.insert(key, CacheEntry { value, expires_at }).await;
    }
}

#[async_trait]
impl<R: ItemRepository> ItemRepository for CachedItemRepository<R> {
    async fn fetch_random(&self) -> Result<Item, DomainError> {
        tracing::debug!("Fetching random item (not cached)");
        self.inner.fetch_random().await
    }

    async fn fetch_random_batch(&self, count: usize) -> Result<ItemCollection, DomainError> {
        tracing::debug!(count, "Fetching random batch (not cached)");
        self.inner.fetch_random_batch(count).await
    }

    async fn fetch_by_id(&self, id: u64) -> Result<Item, DomainError> {
        let key = ItemCacheKey::by_id(id);

        if let Some(CachedValue::Item(item)) = self.lookup(&key).await {
            return Ok(item);
        }

        // The lock is not held while the wrapped repository does I/O
        let item = self.inner.fetch_by_id(id).await?;
        self.store(key, CachedValue::Item(item.clone())).await;

        Ok(item)
    }

    async fn fetch_by_category(&self, category: &str) -> Result<ItemCollection, DomainError> {
        let key = ItemCacheKey::by_category(category);

        if let Some(CachedValue::Collection(items)) = self.lookup(&key).await {
            return Ok(items);
        }

        let items = self.inner.fetch_by_category(category).await?;
        self.store(key, CachedValue::Collection(items.clone())).await;

        Ok(items)
    }

    async fn health_check(&self) -> bool {
        self.inner.health_check().await
    }

    async fn cache_stats(&self) -> Option<CacheStats> {
        Some(self.stats().await)
    }

    fn repository_name(&self) -> &'static str {
        "cached"
    }
}
