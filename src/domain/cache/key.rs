//! Cache keys for the item repository

use std::fmt;

/// Key of a cached repository result, one variant per cacheable operation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ItemCacheKey {
    ById(u64),
    /// Category is kept verbatim; different spellings are different keys
    ByCategory(String),
}

impl ItemCacheKey {
    pub fn by_id(id: u64) -> Self {
        Self::ById(id)
    }

    pub fn by_category(category: impl Into<String>) -> Self {
        Self::ByCategory(category.into())
    }
}

impl fmt::Display for ItemCacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ById(id) => write!(f, "item:{}", id),
            Self::ByCategory(category) => write!(f, "items:category:{}", category),
        }
    }
}
