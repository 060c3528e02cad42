//! Record Module
//!
//! Defines the payload contract stored in tables and the id-carrying wrapper.

use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

// == Record ==
/// Application payload stored in a table.
///
/// `Patch` is the partial form of the record used by updates.
pub trait Record: Clone {
    /// Partial record: every field optional.
    type Patch;

    /// Shallow merge: fields present in `patch` overwrite, the rest are kept.
    fn merge(&mut self, patch: Self::Patch);
}

// == Identifiable ==
/// A record merged with the id its table assigned to it.
///
/// Serializes flat, e.g. `{"id":"1","name":"John",...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifiable<R> {
    /// Table-assigned id
    pub id: String,
    /// The stored payload
    #[serde(flatten)]
    pub record: R,
}

impl<R> Identifiable<R> {
    // == Constructor ==
    /// Pairs `record` with `id`.
    pub fn new(id: impl Into<String>, record: R) -> Self {
        Self {
            id: id.into(),
            record,
        }
    }

    /// Drops the id and returns the payload.
    pub fn into_record(self) -> R {
        self.record
    }
}

impl<R> Deref for Identifiable<R> {
    type Target = R;

    fn deref(&self) -> &R {
        &self.record
    }
}

impl<R> DerefMut for Identifiable<R> {
    fn deref_mut(&mut self) -> &mut R {
        &mut self.record
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{User, UserPatch};

    #[test]
    fn test_identifiable_serializes_flat() {
        let row = Identifiable::new("1", User::new("John", "john@example.com", 30));
        let json = serde_json::to_value(&row).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": "1",
                "name": "John",
                "email": "john@example.com",
                "age": 30
            })
        );
    }

    #[test]
    fn test_identifiable_deserializes_flat() {
        let json = r#"{"id":"7","name":"Jane","email":"jane@example.com","age":25}"#;
        let row: Identifiable<User> = serde_json::from_str(json).unwrap();

        assert_eq!(row.id, "7");
        assert_eq!(row.name, "Jane");
        assert_eq!(row.age, 25);
    }

    #[test]
    fn test_deref_mut_merges_in_place() {
        let mut row = Identifiable::new("1", User::new("John", "john@example.com", 30));
        row.merge(UserPatch {
            age: Some(31),
            ..Default::default()
        });

        assert_eq!(row.id, "1");
        assert_eq!(row.age, 31);
        assert_eq!(row.into_record().name, "John");
    }
}
