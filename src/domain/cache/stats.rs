//! Cache statistics

use serde::Serialize;

/// Hit/miss/eviction counters of a caching repository
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    /// Lookups that found nothing, or only an expired entry
    pub misses: u64,
    /// Expired entries removed from the cache
    pub evictions: u64,
}

impl CacheStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// hits / (hits + misses), or 0.0 before any lookup
    pub fn hit_rate(&self) -> f64 {
        let total = self.total_requests();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn total_requests(&self) -> u64 {
        self.hits + self.misses
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_rate_no_requests() {
        let stats = CacheStats::new();
        assert_eq!(stats.hit_rate(), 0.0);
        assert_eq!(stats.total_requests(), 0);
    }

    #[test]
    fn test_hit_rate_mixed() {
        let mut stats = CacheStats::new();
        stats.record_hit();
        stats.record_hit();
        stats.record_hit();
        stats.record_miss();

        assert_eq!(stats.total_requests(), 4);
        assert_eq!(stats.hit_rate(), 0.75);
    }

    #[test]
    fn test_evictions_do_not_affect_hit_rate() {
        let mut stats = CacheStats::new();
        stats.record_miss();
        stats.record_eviction();
        stats.record_eviction();

        assert_eq!(stats.evictions, 2);
        assert_eq!(stats.hit_rate(), 0.0);
    }

    #[test]
    fn test_reset() {
        let mut stats = CacheStats {
            hits: 3,
            misses: 2,
            evictions: 1,
        };
        stats.reset();
        assert_eq!(stats, CacheStats::default());
    }

    #[test]
    fn test_serializes_counters() {
        let stats = CacheStats {
            hits: 1,
            misses: 2,
            evictions: 0,
        };
        let json = serde_json::to_value(stats).unwrap();
        assert_eq!(json, serde_json::json!({"hits": 1, "misses": 2, "evictions": 0}));
    }
}
