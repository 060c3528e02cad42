//! Table Cache Module
//!
//! Read-through decorator that memoizes selects on top of any table and drops
//! the affected entries on writes.

use std::collections::HashMap;
use std::marker::PhantomData;

use tracing::debug;

use crate::cache::{CacheKey, CacheStats, CachedValue};
use crate::table::{Identifiable, Record, Table};

// == Table Cache ==
/// Caching decorator implementing the same contract as the table it wraps.
///
/// Invalidation policy:
/// - `insert` drops the `All` entry.
/// - `update(id)` drops the `Id(id)` and `All` entries.
/// - `delete` drops nothing, so earlier reads of the deleted record, or of an
///   aggregate containing it, keep being served until another write or
///   [`TableCache::clear`] removes them.
///
/// Empty `select_all` results are never stored.
#[derive(Debug)]
pub struct TableCache<R, T> {
    /// Wrapped table
    table: T,
    /// Memoized read results
    entries: HashMap<CacheKey, CachedValue<R>>,
    /// Hit/miss counters
    stats: CacheStats,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record, T: Table<R>> TableCache<R, T> {
    // == Constructor ==
    /// Wraps `table` with an empty cache.
    pub fn new(table: T) -> Self {
        Self {
            table,
            entries: HashMap::new(),
            stats: CacheStats::new(),
            _record: PhantomData,
        }
    }

    // == Accessors ==
    /// Returns the wrapped table.
    pub fn inner(&self) -> &T {
        &self.table
    }

    /// Returns the wrapped table mutably. Writes made through it bypass
    /// invalidation.
    pub fn inner_mut(&mut self) -> &mut T {
        &mut self.table
    }

    /// Unwraps the decorator, discarding cached entries.
    pub fn into_inner(self) -> T {
        self.table
    }

    /// Returns true if a result is memoized under `key`.
    pub fn contains_key(&self, key: &CacheKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the number of memoized results.
    pub fn cached_len(&self) -> usize {
        self.entries.len()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_cached_entries(self.entries.len());
        stats
    }

    // == Clear ==
    /// Drops every memoized result.
    pub fn clear(&mut self) {
        let count = self.entries.len();
        self.entries.clear();
        self.stats.record_invalidations(count as u64);
        debug!(count, "cleared table cache");
    }

    // == Invalidate ==
    fn invalidate(&mut self, key: &CacheKey) {
        if self.entries.remove(key).is_some() {
            self.stats.record_invalidations(1);
            debug!(%key, "invalidated cache entry");
        }
    }
}

impl<R: Record, T: Table<R>> Table<R> for TableCache<R, T> {
    fn select_all(&mut self) -> Vec<Identifiable<R>> {
        if let Some(CachedValue::Many(rows)) = self.entries.get(&CacheKey::All) {
            self.stats.record_hit();
            debug!(key = "all", "cache hit");
            return rows.clone();
        }

        self.stats.record_miss();
        debug!(key = "all", "cache miss");
        let rows = self.table.select_all();
        if !rows.is_empty() {
            self.entries
                .insert(CacheKey::All, CachedValue::Many(rows.clone()));
        }
        rows
    }

    fn select_by_id(&mut self, id: &str) -> Option<Identifiable<R>> {
        let key = CacheKey::id(id);
        if let Some(CachedValue::One(row)) = self.entries.get(&key) {
            self.stats.record_hit();
            debug!(%key, "cache hit");
            return Some(row.clone());
        }

        self.stats.record_miss();
        debug!(%key, "cache miss");
        let row = self.table.select_by_id(id)?;
        self.entries.insert(key, CachedValue::One(row.clone()));
        Some(row)
    }

    fn insert(&mut self, record: R) -> Identifiable<R> {
        self.invalidate(&CacheKey::All);
        self.table.insert(record)
    }

    fn update(&mut self, id: &str, patch: R::Patch) -> Option<Identifiable<R>> {
        self.invalidate(&CacheKey::id(id));
        self.invalidate(&CacheKey::All);
        self.table.update(id, patch)
    }

    fn delete(&mut self, id: &str) {
        self.table.delete(id)
    }
}
