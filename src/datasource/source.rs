//! Data Source Module
//!
//! Routes CRUD calls to tables registered under a name.

use std::any::{type_name, Any};
use std::collections::HashMap;
use std::fmt;

use tracing::{debug, info, warn};

use crate::cache::TableCache;
use crate::config::Config;
use crate::datasource::shared::{lock, share, SharedTable};
use crate::error::{DataSourceError, Result};
use crate::table::{Identifiable, MapTable, Record, Table};

// == Registry Slot ==
/// A registered table with its record type erased.
///
/// `handle` holds the `SharedTable<R>`; `delete` closes over the same handle
/// so deletes can be routed without naming `R`.
struct TableSlot {
    handle: Box<dyn Any + Send + Sync>,
    delete: Box<dyn Fn(&str) + Send + Sync>,
}

impl TableSlot {
    fn new<R: Record + 'static>(table: SharedTable<R>) -> Self {
        let deleter = table.clone();
        Self {
            handle: Box::new(table),
            delete: Box::new(move |id| lock(&deleter).delete(id)),
        }
    }
}

// == Data Source ==
/// Name-keyed registry of tables holding records of any type.
///
/// The set of names is fixed once built. Every operation resolves the name
/// first; an unknown name fails with [`DataSourceError::TableNotFound`] before
/// any table is touched. Otherwise the call is forwarded and the table's
/// answer, `None` included, is returned unchanged.
///
/// # Errors
/// Every operation can return:
/// - [`DataSourceError::TableNotFound`] when no table is registered under the name
/// - [`DataSourceError::RecordTypeMismatch`] when the table exists but holds
///   records of a different type than requested (not raised by `delete`,
///   which takes no record)
///
/// Neither error touches any table.
pub struct DataSource {
    tables: HashMap<String, TableSlot>,
}

impl DataSource {
    // == Constructor ==
    /// Starts an empty registry.
    pub fn builder() -> DataSourceBuilder {
        DataSourceBuilder::default()
    }

    /// Registers one empty `MapTable<R>` per configured name, each wrapped in
    /// a [`TableCache`] when caching is enabled.
    pub fn from_config<R>(config: &Config) -> Self
    where
        R: Record + Send + 'static,
    {
        let builder = config
            .tables
            .iter()
            .fold(Self::builder(), |builder, name| {
                if config.cache_enabled {
                    builder.cached_table::<R, _>(name.as_str(), MapTable::<R>::new())
                } else {
                    builder.table(name.as_str(), share(MapTable::<R>::new()))
                }
            });
        let source = builder.build();
        info!(
            tables = ?source.table_names(),
            cache_enabled = config.cache_enabled,
            "data source built from config"
        );
        source
    }

    // == Registry ==
    /// Returns true if a table is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    /// Returns the registered names, sorted.
    pub fn table_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tables.keys().cloned().collect();
        names.sort();
        names
    }

    /// Returns a handle to the table registered under `name`.
    pub fn handle<R: Record + 'static>(&self, name: &str) -> Result<SharedTable<R>> {
        self.resolve::<R>(name).cloned()
    }

    fn slot(&self, name: &str) -> Result<&TableSlot> {
        self.tables.get(name).ok_or_else(|| {
            debug!(table = name, "table not found");
            DataSourceError::TableNotFound(name.to_string())
        })
    }

    fn resolve<R: Record + 'static>(&self, name: &str) -> Result<&SharedTable<R>> {
        let slot = self.slot(name)?;
        (*slot.handle).downcast_ref::<SharedTable<R>>().ok_or_else(|| {
            debug!(table = name, expected = type_name::<R>(), "record type mismatch");
            DataSourceError::RecordTypeMismatch {
                table: name.to_string(),
                expected: type_name::<R>(),
            }
        })
    }

    // == CRUD ==
    /// Returns every record in `table`.
    pub fn select_all<R: Record + 'static>(&self, table: &str) -> Result<Vec<Identifiable<R>>> {
        let table = self.resolve::<R>(table)?;
        Ok(lock(table).select_all())
    }

    /// Returns the record under `id` in `table`, `None` if absent.
    pub fn select_by_id<R: Record + 'static>(
        &self,
        table: &str,
        id: &str,
    ) -> Result<Option<Identifiable<R>>> {
        let table = self.resolve::<R>(table)?;
        Ok(lock(table).select_by_id(id))
    }

    /// Inserts `record` into `table` and returns it with its assigned id.
    pub fn insert<R: Record + 'static>(&self, table: &str, record: R) -> Result<Identifiable<R>> {
        let table = self.resolve::<R>(table)?;
        Ok(lock(table).insert(record))
    }

    /// Merges `patch` over the record under `id`, `None` if absent.
    pub fn update<R: Record + 'static>(
        &self,
        table: &str,
        id: &str,
        patch: R::Patch,
    ) -> Result<Option<Identifiable<R>>> {
        let table = self.resolve::<R>(table)?;
        Ok(lock(table).update(id, patch))
    }

    /// Removes `id` from `table`. Absent ids are ignored.
    pub fn delete(&self, table: &str, id: &str) -> Result<()> {
        let slot = self.slot(table)?;
        (slot.delete)(id);
        Ok(())
    }
}

impl fmt::Debug for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataSource")
            .field("tables", &self.table_names())
            .finish()
    }
}

// == Data Source Builder ==
/// Collects named tables before freezing them into a [`DataSource`].
#[derive(Default)]
pub struct DataSourceBuilder {
    tables: HashMap<String, TableSlot>,
}

impl DataSourceBuilder {
    /// Registers `table` under `name`. A repeated name replaces the earlier
    /// registration.
    pub fn table<R: Record + 'static>(
        mut self,
        name: impl Into<String>,
        table: SharedTable<R>,
    ) -> Self {
        let name = name.into();
        if self.tables.insert(name.clone(), TableSlot::new(table)).is_some() {
            warn!(table = %name, "table registered twice, keeping the latest");
        }
        self
    }

    /// Registers `table` under `name` behind a fresh [`TableCache`].
    pub fn cached_table<R, T>(self, name: impl Into<String>, table: T) -> Self
    where
        R: Record + Send + 'static,
        T: Table<R> + Send + 'static,
    {
        self.table(name, share(TableCache::new(table)))
    }

    /// Freezes the registered names into a [`DataSource`].
    pub fn build(self) -> DataSource {
        DataSource {
            tables: self.tables,
        }
    }
}
