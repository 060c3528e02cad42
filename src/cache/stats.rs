//! Cache Statistics Module
//!
//! Tracks how often a table cache answers from memory versus the wrapped table.

use serde::Serialize;

// == Cache Stats ==
/// Counters kept by a table cache.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Reads answered from the cache
    pub hits: u64,
    /// Reads forwarded to the wrapped table
    pub misses: u64,
    /// Entries dropped by writes or an explicit clear
    pub invalidations: u64,
    /// Entries currently held
    pub cached_entries: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 before any read.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    // == Record Hit ==
    /// Increments the hit counter.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    /// Increments the miss counter.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Record Invalidation ==
    /// Adds `count` dropped entries.
    pub fn record_invalidations(&mut self, count: u64) {
        self.invalidations += count;
    }

    // == Update Entry Count ==
    /// Updates the cached entries count.
    pub fn set_cached_entries(&mut self, count: usize) {
        self.cached_entries = count;
    }
}
