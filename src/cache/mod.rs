//! Cache Module
//!
//! Read-through caching decorator for tables.

mod entry;
mod stats;
mod table_cache;

#[cfg(test)]
mod property_tests;
#[cfg(test)]
mod test_support;

// Re-export public types
pub use entry::{CacheKey, CachedValue};
pub use stats::CacheStats;
pub use table_cache::TableCache;
