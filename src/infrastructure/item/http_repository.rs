use async_trait::async_trait;

use crate::domain::{DomainError, FetchError, Item, ItemCollection, ItemFetcher, ItemRepository};

/// Repository delegating to an upstream fetcher and translating its failures.
///
/// No retries happen here; that belongs to the fetcher.
#[derive(Debug)]
pub struct HttpItemRepository<F: ItemFetcher> {
    fetcher: F,
}

impl<F: ItemFetcher> HttpItemRepository<F> {
    pub fn new(fetcher: F) -> Self {
        tracing::info!(base_url = fetcher.base_url(), "Item repository initialized");
        Self { fetcher }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }
}

fn upstream(message: String, error: FetchError) -> DomainError {
    tracing::error!(error = %error, "{}", message);
    DomainError::upstream_caused_by(message, error)
}

#[async_trait]
impl<F: ItemFetcher> ItemRepository for HttpItemRepository<F> {
    async fn fetch_random(&self) -> Result<Item, DomainError> {
        let item = self
            .fetcher
            .random()
            .await
            .map_err(|e| upstream("Failed to retrieve random item".to_string(), e))?;

        tracing::debug!(id = item.id(), "Fetched random item");
        Ok(item)
    }

    async fn fetch_random_batch(&self, count: usize) -> Result<ItemCollection, DomainError> {
        if count == 0 {
            return Err(DomainError::invalid("batch count must be positive"));
        }

        let batch = self
            .fetcher
            .random_batch(count)
            .await
            .map_err(|e| upstream(format!("Failed to retrieve {} random items", count), e))?;

        if batch.len() < count {
            return Err(DomainError::upstream(format!(
                "Upstream returned {} items, expected {}",
                batch.len(),
                count
            )));
        }

        tracing::debug!(count, "Fetched random batch");
        Ok(batch.into_iter().take(count).collect())
    }

    async fn fetch_by_id(&self, id: u64) -> Result<Item, DomainError> {
        match self.fetcher.by_id(id).await {
            Ok(item) => {
                tracing::debug!(id, "Fetched item by id");
                Ok(item)
            }
            Err(e) if e.is_not_found() => {
                tracing::warn!(id, "Item not found upstream");
                Err(DomainError::not_found(id))
            }
            Err(e) => Err(upstream(format!("Failed to retrieve item {}", id), e)),
        }
    }

    async fn fetch_by_category(&self, category: &str) -> Result<ItemCollection, DomainError> {
        if category.is_empty() {
            return Err(DomainError::invalid("category must not be empty"));
        }

        let items = self.fetcher.by_category(category).await.map_err(|e| {
            upstream(
                format!("Failed to retrieve items of category '{}'", category),
                e,
            )
        })?;

        tracing::debug!(category, count = items.len(), "Fetched items by category");
        Ok(items)
    }

    async fn health_check(&self) -> bool {
        match self.fetcher.random().await {
            Ok(_) => {
                tracing::info!(base_url = self.fetcher.base_url(), "Upstream health check passed");
                true
            }
            Err(e) => {
                tracing::warn!(
                    base_url = self.fetcher.base_url(),
                    error = %e,
                    "Upstream health check failed"
                );
                false
            }
        }
    }

    fn repository_name(&self) -> &'static str {
        "http"
    }
}
