//! Test helpers shared by the cache unit and property tests.

use crate::models::{User, UserPatch};
use crate::table::{Identifiable, MapTable, Table};

pub fn john() -> User {
    User::new("John", "john@example.com", 30)
}

pub fn jane() -> User {
    User::new("Jane", "jane@example.com", 25)
}

// == Recording Table ==
/// Map-backed table that logs every call made to it.
#[derive(Debug, Default)]
pub struct RecordingTable {
    table: MapTable<User>,
    calls: Vec<String>,
}

impl RecordingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the calls logged since the last take and resets the log.
    pub fn take_calls(&mut self) -> Vec<String> {
        std::mem::take(&mut self.calls)
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl Table<User> for RecordingTable {
    fn select_all(&mut self) -> Vec<Identifiable<User>> {
        self.calls.push("select".to_string());
        self.table.select_all()
    }

    fn select_by_id(&mut self, id: &str) -> Option<Identifiable<User>> {
        self.calls.push(format!("select {id}"));
        self.table.select_by_id(id)
    }

    fn insert(&mut self, record: User) -> Identifiable<User> {
        self.calls.push("insert".to_string());
        self.table.insert(record)
    }

    fn update(&mut self, id: &str, patch: UserPatch) -> Option<Identifiable<User>> {
        self.calls.push(format!("update {id}"));
        self.table.update(id, patch)
    }

    fn delete(&mut self, id: &str) {
        self.calls.push(format!("delete {id}"));
        self.table.delete(id)
    }
}
