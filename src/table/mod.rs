//! Table Module
//!
//! The CRUD contract shared by plain tables and caching decorators.

mod map_table;
mod record;

pub use map_table::MapTable;
pub use record::{Identifiable, Record};

// == Table ==
/// Keyed store for records of one type.
///
/// Missing ids are a normal outcome and are reported as `None`, never as an
/// error. Every method takes `&mut self` because decorators update their own
/// state on reads.
pub trait Table<R: Record> {
    /// Returns every stored record. Order is stable for a given state.
    fn select_all(&mut self) -> Vec<Identifiable<R>>;

    /// Returns the record stored under `id`, if any.
    fn select_by_id(&mut self, id: &str) -> Option<Identifiable<R>>;

    /// Stores `record` under a freshly assigned id and returns it.
    fn insert(&mut self, record: R) -> Identifiable<R>;

    /// Merges `patch` over the record under `id`.
    ///
    /// Returns `None` without mutating anything when `id` is absent.
    fn update(&mut self, id: &str, patch: R::Patch) -> Option<Identifiable<R>>;

    /// Removes the record under `id`. Absent ids are ignored.
    fn delete(&mut self, id: &str);
}

impl<R: Record, T: Table<R> + ?Sized> Table<R> for &mut T {
    fn select_all(&mut self) -> Vec<Identifiable<R>> {
        (**self).select_all()
    }

    fn select_by_id(&mut self, id: &str) -> Option<Identifiable<R>> {
        (**self).select_by_id(id)
    }

    fn insert(&mut self, record: R) -> Identifiable<R> {
        (**self).insert(record)
    }

    fn update(&mut self, id: &str, patch: R::Patch) -> Option<Identifiable<R>> {
        (**self).update(id, patch)
    }

    fn delete(&mut self, id: &str) {
        (**self).delete(id)
    }
}

impl<R: Record, T: Table<R> + ?Sized> Table<R> for Box<T> {
    fn select_all(&mut self) -> Vec<Identifiable<R>> {
        (**self).select_all()
    }

    fn select_by_id(&mut self, id: &str) -> Option<Identifiable<R>> {
        (**self).select_by_id(id)
    }

    fn insert(&mut self, record: R) -> Identifiable<R> {
        (**self).insert(record)
    }

    fn update(&mut self, id: &str, patch: R::Patch) -> Option<Identifiable<R>> {
        (**self).update(id, patch)
    }

    fn delete(&mut self, id: &str) {
        (**self).delete(id)
    }
}
