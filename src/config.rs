//! Configuration Module
//!
//! Loads the data source layout and logging defaults from environment variables.

use std::env;

/// Data source configuration.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Names of the tables to register
    pub tables: Vec<String>,
    /// Whether each table is wrapped in a read cache
    pub cache_enabled: bool,
    /// Fallback tracing filter when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `TABLES` - Comma-separated table names (default: users)
    /// - `CACHE_ENABLED` - true/false/1/0 (default: true)
    /// - `LOG_FILTER` - Tracing filter directive (default: cached_tables=info)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            tables: env::var("TABLES")
                .ok()
                .map(|v| parse_table_names(&v))
                .filter(|names| !names.is_empty())
                .unwrap_or(defaults.tables),
            cache_enabled: env::var("CACHE_ENABLED")
                .ok()
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.cache_enabled),
            log_filter: env::var("LOG_FILTER")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.log_filter),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tables: vec!["users".to_string()],
            cache_enabled: true,
            log_filter: "cached_tables=info".to_string(),
        }
    }
}

fn parse_table_names(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
