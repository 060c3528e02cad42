//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the table cache against the table it wraps.

use proptest::prelude::*;

use crate::cache::test_support::RecordingTable;
use crate::cache::TableCache;
use crate::models::{User, UserPatch};
use crate::table::{MapTable, Table};

// == Strategies ==
fn user_strategy() -> impl Strategy<Value = User> {
    ("[A-Z][a-z]{1,8}", "[a-z]{1,8}@example\\.com", 0u32..120)
        .prop_map(|(name, email, age)| User::new(name, email, age))
}

fn patch_strategy() -> impl Strategy<Value = UserPatch> {
    (
        proptest::option::of("[A-Z][a-z]{1,8}"),
        proptest::option::of("[a-z]{1,8}@example\\.com"),
        proptest::option::of(0u32..120),
    )
        .prop_map(|(name, email, age)| UserPatch { name, email, age })
}

/// Ids drawn from a small range so reads and writes hit live records.
fn id_strategy() -> impl Strategy<Value = String> {
    (1usize..8).prop_map(|n| n.to_string())
}

/// Read and write operations, deletes excluded.
#[derive(Debug, Clone)]
enum TableOp {
    SelectAll,
    SelectById(String),
    Insert(User),
    Update(String, UserPatch),
}

fn table_op_strategy() -> impl Strategy<Value = TableOp> {
    prop_oneof![
        Just(TableOp::SelectAll),
        id_strategy().prop_map(TableOp::SelectById),
        user_strategy().prop_map(TableOp::Insert),
        (id_strategy(), patch_strategy()).prop_map(|(id, patch)| TableOp::Update(id, patch)),
    ]
}

/// Applies `op` and renders its result so two tables can be compared.
fn apply<T: Table<User>>(table: &mut T, op: TableOp) -> String {
    match op {
        TableOp::SelectAll => format!("{:?}", table.select_all()),
        TableOp::SelectById(id) => format!("{:?}", table.select_by_id(&id)),
        TableOp::Insert(user) => format!("{:?}", table.insert(user)),
        TableOp::Update(id, patch) => format!("{:?}", table.update(&id, patch)),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Without deletes, a cached table returns exactly what the bare table returns.
    #[test]
    fn prop_cache_transparency(ops in prop::collection::vec(table_op_strategy(), 1..60)) {
        let mut plain = MapTable::new();
        let mut cache = TableCache::new(MapTable::new());

        for op in ops {
            let expected = apply(&mut plain, op.clone());
            let actual = apply(&mut cache, op);
            prop_assert_eq!(actual, expected);
        }
    }

    // A repeated read is served without touching the wrapped table.
    #[test]
    fn prop_hit_suppresses_backing_calls(users in prop::collection::vec(user_strategy(), 1..10)) {
        let mut cache = TableCache::new(RecordingTable::new());
        for user in users {
            cache.insert(user);
        }

        let first = cache.select_all();
        let id = first[0].id.clone();
        cache.select_by_id(&id);
        cache.inner_mut().take_calls();

        prop_assert_eq!(cache.select_all(), first);
        prop_assert!(cache.select_by_id(&id).is_some());
        prop_assert!(cache.inner_mut().take_calls().is_empty());
    }

    // Reading right after an insert returns the record with its assigned id.
    #[test]
    fn prop_roundtrip(user in user_strategy()) {
        let mut cache = TableCache::new(MapTable::new());

        let inserted = cache.insert(user.clone());
        let selected = cache.select_by_id(&inserted.id);

        prop_assert_eq!(selected.map(|row| row.into_record()), Some(user));
    }

    // Deleting a cached record leaves the cached views in place.
    #[test]
    fn prop_delete_keeps_cached_views(users in prop::collection::vec(user_strategy(), 1..10)) {
        let mut cache = TableCache::new(RecordingTable::new());
        for user in users {
            cache.insert(user);
        }
        let all = cache.select_all();
        let target = all[0].clone();
        cache.select_by_id(&target.id);

        cache.delete(&target.id);
        cache.inner_mut().take_calls();

        prop_assert_eq!(cache.select_all(), all);
        prop_assert_eq!(cache.select_by_id(&target.id), Some(target));
        prop_assert!(cache.inner_mut().take_calls().is_empty());
    }
}
