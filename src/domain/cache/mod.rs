//! Cache domain: keys and statistics

mod key;
mod stats;

pub use key::ItemCacheKey;
pub use stats::CacheStats;
