//! Error types for the data source
//!
//! Missing ids are not errors: tables and caches answer them with `None`.
//! Only name resolution in the data source can fail.

use thiserror::Error;

// == Data Source Error Enum ==
/// Errors raised while resolving a table name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataSourceError {
    /// No table is registered under the requested name
    #[error("Table not found: {0}")]
    TableNotFound(String),

    /// The table exists but stores a different record type
    #[error("Table {table} does not hold records of type {expected}")]
    RecordTypeMismatch {
        table: String,
        expected: &'static str,
    },
}

impl DataSourceError {
    /// Returns the table name the failed lookup was for.
    pub fn table(&self) -> &str {
        match self {
            DataSourceError::TableNotFound(table) => table,
            DataSourceError::RecordTypeMismatch { table, .. } => table,
        }
    }
}

// == Result Type Alias ==
/// Convenience Result type for data source operations.
pub type Result<T> = std::result::Result<T, DataSourceError>;
