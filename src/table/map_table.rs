//! Map Table Module
//!
//! In-memory table backed by an ordered map from id to record.

use std::collections::BTreeMap;

use tracing::trace;

use crate::table::{Identifiable, Record, Table};

// == Map Table ==
/// In-memory table owning its records.
///
/// Ids are derived from the record count at insert time (`len + 1`), not from
/// a monotonic counter. After a delete, the next insert can be handed an id
/// that is already live, in which case the new record replaces the old one.
#[derive(Debug, Clone)]
pub struct MapTable<R> {
    /// Records keyed by id
    rows: BTreeMap<String, Identifiable<R>>,
}

impl<R: Record> MapTable<R> {
    // == Constructor ==
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
        }
    }

    /// Creates a table seeded with `records`, inserted in order.
    pub fn with_records(records: impl IntoIterator<Item = R>) -> Self {
        let mut table = Self::new();
        for record in records {
            table.insert(record);
        }
        table
    }

    // == Next Id ==
    fn next_id(&self) -> String {
        (self.rows.len() + 1).to_string()
    }

    // == Length ==
    /// Returns the number of stored records.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    // == Is Empty ==
    /// Returns true if the table holds no records.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<R: Record> Default for MapTable<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> Table<R> for MapTable<R> {
    fn select_all(&mut self) -> Vec<Identifiable<R>> {
        self.rows.values().cloned().collect()
    }

    fn select_by_id(&mut self, id: &str) -> Option<Identifiable<R>> {
        self.rows.get(id).cloned()
    }

    fn insert(&mut self, record: R) -> Identifiable<R> {
        let row = Identifiable::new(self.next_id(), record);
        trace!(id = %row.id, "inserting record");
        self.rows.insert(row.id.clone(), row.clone());
        row
    }

    fn update(&mut self, id: &str, patch: R::Patch) -> Option<Identifiable<R>> {
        let row = self.rows.get_mut(id)?;
        row.record.merge(patch);
        trace!(id, "updated record");
        Some(row.clone())
    }

    fn delete(&mut self, id: &str) {
        if self.rows.remove(id).is_some() {
            trace!(id, "deleted record");
        }
    }
}
