//! Cached Tables - in-memory tables behind a transparent read cache
//!
//! Provides a keyed table contract, a caching decorator implementing the same
//! contract, and a data source that routes CRUD calls by table name.

pub mod cache;
pub mod config;
pub mod datasource;
pub mod error;
pub mod models;
pub mod table;

pub use cache::{CacheKey, CacheStats, TableCache};
pub use config::Config;
pub use datasource::{share, DataSource, DataSourceBuilder, SharedTable};
pub use error::{DataSourceError, Result};
pub use table::{Identifiable, MapTable, Record, Table};
