//! Item service - request-handler facing operations over the item repository

use std::sync::Arc;

use crate::domain::{Category, DomainError, Item, ItemRepository, validate_item_id};

/// Fixed item served without touching the repository
pub const CONSISTENT_ITEM: &str = "What's brown and sticky?\nA stick! Ha ha ha ha";

/// Render an item the way it is shown to callers
pub fn format_item(item: &Item) -> String {
    format!("{}\n{}", item.prompt(), item.punchline())
}

/// Item service wrapping whichever repository composition is configured.
///
/// Ids and categories are checked against the known catalogue here; the
/// repositories below accept anything and key their cache on the raw input.
#[derive(Debug, Clone)]
pub struct ItemService {
    repository: Arc<dyn ItemRepository>,
}

impl ItemService {
    pub fn new(repository: Arc<dyn ItemRepository>) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &Arc<dyn ItemRepository> {
        &self.repository
    }

    pub fn consistent_text(&self) -> &'static str {
        CONSISTENT_ITEM
    }

    /// A random item, formatted
    pub async fn random_text(&self) -> Result<String, DomainError> {
        let item = self.repository.fetch_random().await?;
        Ok(format_item(&item))
    }

    /// The item with `id`, or a random one when the id does not exist
    pub async fn item_by_id_or_random(&self, id: u64) -> Result<Item, DomainError> {
        let id = validate_item_id(id)?;

        match self.repository.fetch_by_id(id).await {
            Err(DomainError::NotFound { id }) => {
                tracing::warn!(id, "Item not found, substituting a random item");
                self.repository.fetch_random().await
            }
            other => other,
        }
    }

    pub async fn text_by_id(&self, id: u64) -> Result<String, DomainError> {
        let item = self.item_by_id_or_random(id).await?;
        Ok(format_item(&item))
    }

    /// First item of a known category, formatted
    pub async fn text_by_category(&self, category: &str) -> Result<String, DomainError> {
        let category: Category = category.parse()?;
        let items = self.repository.fetch_by_category(category.as_str()).await?;
        let item = items.first().ok_or_else(|| {
            DomainError::invalid(format!("No items available for category '{}'", category))
        })?;

        Ok(format_item(item))
    }
}
