//! Cached Tables demo
//!
//! Builds a data source from the environment and walks one user record
//! through insert, update, select and delete, printing each result as JSON.

use anyhow::Context;
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cached_tables::models::{User, UserPatch};
use cached_tables::{Config, DataSource};

/// Main entry point for the demo.
///
/// # Sequence
/// 1. Load configuration from environment variables
/// 2. Initialize tracing subscriber for logging
/// 3. Build the data source from the configured table names
/// 4. Run insert, update, select and delete against the first table
/// 5. Show the error returned for an unregistered table
fn main() -> anyhow::Result<()> {
    let config = Config::from_env();

    // RUST_LOG wins over the configured fallback filter
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Configuration loaded: tables={:?}, cache_enabled={}",
        config.tables, config.cache_enabled
    );

    let source = DataSource::from_config::<User>(&config);
    let table = config
        .tables
        .first()
        .context("no tables configured")?
        .as_str();

    let inserted = source.insert(table, User::new("John", "john@example.com", 30))?;
    print_json("insert", &inserted)?;

    let updated = source.update::<User>(
        table,
        &inserted.id,
        UserPatch {
            age: Some(31),
            ..Default::default()
        },
    )?;
    print_json("update", &updated)?;

    print_json("select_all", &source.select_all::<User>(table)?)?;

    source.delete(table, &inserted.id)?;
    print_json(
        "select_by_id after delete",
        &source.select_by_id::<User>(table, &inserted.id)?,
    )?;

    match source.select_all::<User>("missing") {
        Ok(rows) => print_json("select_all missing", &rows)?,
        Err(err) => {
            warn!(%err, "lookup failed");
            println!("select_all missing: {err}");
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(label: &str, value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string(value).with_context(|| format!("serializing {label}"))?;
    println!("{label}: {json}");
    Ok(())
}
