//! Cache Entry Module
//!
//! Keys and values held by a table cache.

use std::fmt;

use crate::table::Identifiable;

// == Cache Key ==
/// Index into a table cache: the aggregate view or a single id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    /// Result of `select_all`
    All,
    /// Result of `select_by_id` for this id
    Id(String),
}

impl CacheKey {
    /// Key for the `select_by_id` result of `id`.
    pub fn id(id: impl Into<String>) -> Self {
        CacheKey::Id(id.into())
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheKey::All => f.write_str("all"),
            CacheKey::Id(id) => f.write_str(id),
        }
    }
}

// == Cached Value ==
/// A memoized read result.
#[derive(Debug, Clone, PartialEq)]
pub enum CachedValue<R> {
    One(Identifiable<R>),
    Many(Vec<Identifiable<R>>),
}
