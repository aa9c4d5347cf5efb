use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;
use tokio::sync::RwLock;

use super::{CachedItemRepository, DEFAULT_CACHE_TTL, DEFAULT_TIMEOUT, HttpItemFetcher, HttpItemRepository};
use crate::domain::{CacheStats, DomainError, Item, ItemCollection, ItemRepository};

/// Which repository composition to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepositoryKind {
    /// The bare upstream repository
    #[serde(alias = "http")]
    Source,
    /// The upstream repository behind the TTL cache
    #[default]
    Cached,
}

impl RepositoryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Cached => "cached",
        }
    }
}

impl fmt::Display for RepositoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RepositoryKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "source" | "http" => Ok(Self::Source),
            "cached" => Ok(Self::Cached),
            other => Err(DomainError::invalid(format!(
                "Invalid repository kind: {}. Valid kinds are: source, cached",
                other
            ))),
        }
    }
}

/// Options for building repositories
#[derive(Debug, Clone)]
pub struct RepositoryOptions {
    pub base_url: String,
    pub timeout: Duration,
    pub cache_ttl: Duration,
}

impl RepositoryOptions {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
            cache_ttl: DEFAULT_CACHE_TTL,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }
}

/// Factory for item repository compositions
#[derive(Debug)]
pub struct ItemRepositoryFactory;

impl ItemRepositoryFactory {
    /// Create a repository composition from its kind
    pub fn create(
        kind: RepositoryKind,
        options: &RepositoryOptions,
    ) -> Result<Arc<dyn ItemRepository>, DomainError> {
        tracing::info!(kind = %kind, "Creating item repository");

        let source = Self::create_source(options)?;

        match kind {
            RepositoryKind::Source => Ok(Arc::new(source)),
            RepositoryKind::Cached => Ok(Arc::new(Self::create_cached(source, options.cache_ttl))),
        }
    }

    /// Create the bare upstream repository
    pub fn create_source(
        options: &RepositoryOptions,
    ) -> Result<HttpItemRepository<HttpItemFetcher>, DomainError> {
        let fetcher = HttpItemFetcher::with_timeout(&options.base_url, options.timeout)
            .map_err(|e| DomainError::upstream_caused_by("Failed to create upstream fetcher", e))?;

        Ok(HttpItemRepository::new(fetcher))
    }

    /// Wrap any repository with the TTL cache
    pub fn create_cached<R: ItemRepository>(inner: R, ttl: Duration) -> CachedItemRepository<R> {
        CachedItemRepository::new(inner, ttl)
    }

    /// Wrap an already shared repository with the TTL cache
    pub fn create_cached_shared(
        inner: Arc<dyn ItemRepository>,
        ttl: Duration,
    ) -> Arc<dyn ItemRepository> {
        Arc::new(CachedItemRepository::new(SharedRepository(inner), ttl))
    }
}

/// Wrapper to make Arc<dyn ItemRepository> implement ItemRepository
#[derive(Debug)]
struct SharedRepository(Arc<dyn ItemRepository>);

#[async_trait::async_trait]
impl ItemRepository for SharedRepository {
    async fn fetch_random(&self) -> Result<Item, DomainError> {
        self.0.fetch_random().await
    }

    async fn fetch_random_batch(&self, count: usize) -> Result<ItemCollection, DomainError> {
        self.0.fetch_random_batch(count).await
    }

    async fn fetch_by_id(&self, id: u64) -> Result<Item, DomainError> {
        self.0.fetch_by_id(id).await
    }

    async fn fetch_by_category(&self, category: &str) -> Result<ItemCollection, DomainError> {
        self.0.fetch_by_category(category).await
    }

    async fn health_check(&self) -> bool {
        self.0.health_check().await
    }

    async fn cache_stats(&self) -> Option<CacheStats> {
        self.0.cache_stats().await
    }

    fn repository_name(&self) -> &'static str {
        self.0.repository_name()
    }
}

type RepositoryBuilder = Box<dyn Fn() -> Result<Arc<dyn ItemRepository>, DomainError> + Send + Sync>;

/// Process-scoped holder of the default repository.
///
/// Owned by the composition root. The repository is built lazily on first
/// access and lives until it is explicitly replaced.
pub struct DefaultRepository {
    builder: RepositoryBuilder,
    current: RwLock<Option<Arc<dyn ItemRepository>>>,
}

impl DefaultRepository {
    /// Holder building `kind` from `options`
    pub fn new(kind: RepositoryKind, options: RepositoryOptions) -> Self {
        Self::with_builder(move || ItemRepositoryFactory::create(kind, &options))
    }

    /// Holder using a custom composition
    pub fn with_builder<B>(builder: B) -> Self
    where
        B: Fn() -> Result<Arc<dyn ItemRepository>, DomainError> + Send + Sync + 'static,
    {
        Self {
            builder: Box::new(builder),
            current: RwLock::new(None),
        }
    }

    /// Return the shared repository, building it on first access or when
    /// `force_recreate` is set
    pub async fn get(&self, force_recreate: bool) -> Result<Arc<dyn ItemRepository>, DomainError> {
        if !force_recreate {
            if let Some(repository) = self.current.read().await.as_ref() {
                return Ok(Arc::clone(repository));
            }
        }

        let mut current = self.current.write().await;

        // Another caller may have built it while we waited for the write lock
        if !force_recreate {
            if let Some(repository) = current.as_ref() {
                return Ok(Arc::clone(repository));
            }
        }

        let repository = (self.builder)()?;
        tracing::info!(
            repository = repository.repository_name(),
            recreated = force_recreate,
            "Default item repository initialized"
        );
        *current = Some(Arc::clone(&repository));

        Ok(repository)
    }

    /// Drop the stored repository; the next `get` builds a new one
    pub async fn reset(&self) {
        *self.current.write().await = None;
        tracing::debug!("Default item repository reset");
    }

    pub async fn is_initialized(&self) -> bool {
        self.current.read().await.is_some()
    }
}

impl fmt::Debug for DefaultRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultRepository")
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::item::mock::MockItemRepository;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_holder() -> (DefaultRepository, Arc<AtomicUsize>) {
        let built = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&built);

        let holder = DefaultRepository::with_builder(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            let mock = MockItemRepository::new().with_item(Item::new(1, "general", "a", "b"));
            Ok(Arc::new(mock) as Arc<dyn ItemRepository>)
        });

        (holder, built)
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!("cached".parse::<RepositoryKind>().unwrap(), RepositoryKind::Cached);
        assert_eq!("SOURCE".parse::<RepositoryKind>().unwrap(), RepositoryKind::Source);
        assert_eq!("http".parse::<RepositoryKind>().unwrap(), RepositoryKind::Source);

        let err = "redis".parse::<RepositoryKind>().unwrap_err();
        assert!(matches!(err, DomainError::Invalid { .. }));
    }

    #[test]
    fn test_options_defaults() {
        let options = RepositoryOptions::new("https://example.com");
        assert_eq!(options.cache_ttl, Duration::from_secs(300));
        assert_eq!(options.timeout, Duration::from_secs(10));
    }

    #[tokio::test]
    async fn test_factory_creates_source() {
        let options = RepositoryOptions::new("http://127.0.0.1:1");
        let repo = ItemRepositoryFactory::create(RepositoryKind::Source, &options).unwrap();

        assert_eq!(repo.repository_name(), "http");
        assert!(repo.cache_stats().await.is_none());
    }

    #[tokio::test]
    async fn test_factory_creates_cached() {
        let options = RepositoryOptions::new("http://127.0.0.1:1").with_cache_ttl(Duration::from_secs(5));
        let repo = ItemRepositoryFactory::create(RepositoryKind::Cached, &options).unwrap();

        assert_eq!(repo.repository_name(), "cached");
        assert_eq!(repo.cache_stats().await, Some(CacheStats::default()));
    }

    #[tokio::test]
    async fn test_create_cached_shared_wraps_trait_object() {
        let mock: Arc<dyn ItemRepository> =
            Arc::new(MockItemRepository::new().with_item(Item::new(5, "dad", "a", "b")));
        let repo = ItemRepositoryFactory::create_cached_shared(mock, Duration::from_secs(60));

        repo.fetch_by_id(5).await.unwrap();
        repo.fetch_by_id(5).await.unwrap();

        let stats = repo.cache_stats().await.unwrap();
        assert_eq!((stats.hits, stats.misses), (1, 1));
    }

    #[tokio::test]
    async fn test_default_repository_is_lazy() {
        let (holder, built) = counting_holder();

        assert!(!holder.is_initialized().await);
        assert_eq!(built.load(Ordering::SeqCst), 0);

        holder.get(false).await.unwrap();
        assert!(holder.is_initialized().await);
        assert_eq!(built.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_default_repository_identity() {
        let (holder, built) = counting_holder();

        let first = holder.get(false).await.unwrap();
        let second = holder.get(false).await.unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(built.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_force_recreate_replaces_instance() {
        let (holder, built) = counting_holder();

        let first = holder.get(false).await.unwrap();
        let recreated = holder.get(true).await.unwrap();
        let after = holder.get(false).await.unwrap();

        assert!(!Arc::ptr_eq(&first, &recreated));
        assert!(Arc::ptr_eq(&recreated, &after));
        assert_eq!(built.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_reset_forces_rebuild_on_next_get() {
        let (holder, built) = counting_holder();

        let first = holder.get(false).await.unwrap();
        holder.reset().await;
        assert!(!holder.is_initialized().await);

        let second = holder.get(false).await.unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(built.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_builder_failure_leaves_holder_empty() {
        let holder = DefaultRepository::with_builder(|| Err(DomainError::invalid("no upstream")));

        assert!(holder.get(false).await.is_err());
        assert!(!holder.is_initialized().await);
    }

    #[tokio::test]
    async fn test_concurrent_first_access_builds_once() {
        let (holder, built) = counting_holder();
        let holder = Arc::new(holder);

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let holder = Arc::clone(&holder);
                tokio::spawn(async move { holder.get(false).await.unwrap() })
            })
            .collect();

        let repos: Vec<_> = futures::future::join_all(handles)
            .await
            .into_iter()
            .map(Result::unwrap)
            .collect();

        assert_eq!(built.load(Ordering::SeqCst), 1);
        assert!(repos.windows(2).all(|pair| Arc::ptr_eq(&pair[0], &pair[1])));
    }
}
