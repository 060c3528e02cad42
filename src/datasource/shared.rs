//! Shared table handles
//!
//! A table registered with a data source sits behind its own mutex, so each
//! operation's read-modify-write sequence runs without interleaving.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::table::{Identifiable, Record, Table};

/// Lock-guarded, reference-counted handle to any table of `R` records.
pub type SharedTable<R> = Arc<Mutex<dyn Table<R> + Send>>;

/// Moves `table` behind a shared handle.
pub fn share<R, T>(table: T) -> SharedTable<R>
where
    R: Record + 'static,
    T: Table<R> + Send + 'static,
{
    Arc::new(Mutex::new(table))
}

/// Locks `table`, recovering the guard if a previous holder panicked.
pub(crate) fn lock<T: ?Sized>(table: &Arc<Mutex<T>>) -> MutexGuard<'_, T> {
    table.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<R: Record, T: Table<R> + ?Sized> Table<R> for Arc<Mutex<T>> {
    fn select_all(&mut self) -> Vec<Identifiable<R>> {
        lock(self).select_all()
    }

    fn select_by_id(&mut self, id: &str) -> Option<Identifiable<R>> {
        lock(self).select_by_id(id)
    }

    fn insert(&mut self, record: R) -> Identifiable<R> {
        lock(self).insert(record)
    }

    fn update(&mut self, id: &str, patch: R::Patch) -> Option<Identifiable<R>> {
        lock(self).update(id, patch)
    }

    fn delete(&mut self, id: &str) {
        lock(self).delete(id)
    }
}
