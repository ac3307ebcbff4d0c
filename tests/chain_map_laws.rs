//! Property-based law tests for the separate-chaining hash map.
//!
//! `std::collections::HashMap` is the model: under arbitrary interleavings
//! of inserts and removes the chaining map must return the same displaced
//! values, keep the same associations, and hold its load factor strictly
//! below the growth bound.

use std::collections::HashMap;

use proptest::prelude::*;

use sarf::index::ChainedHashMap;

// ============================================================================
// Strategies
// ============================================================================

// A short alphabet keeps keys colliding often enough to exercise chains.
fn arbitrary_key() -> impl Strategy<Value = String> {
    "[a-d]{1,4}".prop_map(|key| key)
}

#[derive(Debug, Clone)]
enum Operation {
    Insert(String, i32),
    Remove(String),
}

fn arbitrary_operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        (arbitrary_key(), any::<i32>()).prop_map(|(key, value)| Operation::Insert(key, value)),
        arbitrary_key().prop_map(Operation::Remove),
    ]
}

fn arbitrary_operations() -> impl Strategy<Value = Vec<Operation>> {
    proptest::collection::vec(arbitrary_operation(), 0..300)
}

// ============================================================================
// Model Agreement Laws
// ============================================================================

proptest! {
    #[test]
    fn prop_insert_returns_what_the_model_displaces(
        entries in proptest::collection::vec((arbitrary_key(), any::<i32>()), 0..200),
    ) {
        let mut map = ChainedHashMap::new();
        let mut model: HashMap<String, i32> = HashMap::new();

        for (key, value) in entries {
            prop_assert_eq!(map.insert(key.clone(), value), model.insert(key, value));
            prop_assert_eq!(map.len(), model.len());
        }
    }

    #[test]
    fn prop_interleaved_operations_agree_with_model(operations in arbitrary_operations()) {
        let mut map = ChainedHashMap::new();
        let mut model: HashMap<String, i32> = HashMap::new();

        for operation in operations {
            match operation {
                Operation::Insert(key, value) => {
                    prop_assert_eq!(map.insert(key.clone(), value), model.insert(key, value));
                }
                Operation::Remove(key) => {
                    prop_assert_eq!(map.remove(key.as_str()), model.remove(&key));
                }
            }
        }

        prop_assert_eq!(map.len(), model.len());
        for (key, value) in &model {
            prop_assert_eq!(map.get(key.as_str()), Some(value));
        }
    }

    #[test]
    fn prop_get_agrees_with_model(
        entries in proptest::collection::vec((arbitrary_key(), any::<i32>()), 0..100),
        probes in proptest::collection::vec(arbitrary_key(), 0..100),
    ) {
        let map: ChainedHashMap<String, i32> = entries.iter().cloned().collect();
        let model: HashMap<String, i32> = entries.into_iter().collect();

        for probe in probes {
            prop_assert_eq!(map.get(probe.as_str()), model.get(&probe));
            prop_assert_eq!(map.contains_key(probe.as_str()), model.contains_key(&probe));
        }
    }
}

// ============================================================================
// Growth Laws
// ============================================================================

proptest! {
    #[test]
    fn prop_load_factor_stays_below_the_bound(
        entries in proptest::collection::vec((arbitrary_key(), any::<i32>()), 0..400),
    ) {
        let mut map = ChainedHashMap::new();
        for (key, value) in entries {
            map.insert(key, value);
            prop_assert!(map.load_factor() < 0.75);
        }
    }

    #[test]
    fn prop_capacity_only_ever_doubles(
        entries in proptest::collection::vec((arbitrary_key(), any::<i32>()), 0..400),
    ) {
        let mut map = ChainedHashMap::new();
        for (key, value) in entries {
            map.insert(key, value);
            let capacity = map.capacity();
            prop_assert_eq!(capacity % 16, 0);
            prop_assert!((capacity / 16).is_power_of_two());
        }
    }

    #[test]
    fn prop_growth_preserves_every_association(
        entries in proptest::collection::hash_map(arbitrary_key(), any::<i32>(), 20..120),
    ) {
        // 20+ distinct keys force at least one doubling past the default 16.
        let map: ChainedHashMap<String, i32> = entries.clone().into_iter().collect();
        prop_assert!(map.capacity() > 16);

        for (key, value) in &entries {
            prop_assert_eq!(map.get(key.as_str()), Some(value));
        }
    }
}

// ============================================================================
// Iteration Laws
// ============================================================================

proptest! {
    #[test]
    fn prop_iter_yields_each_entry_exactly_once(
        entries in proptest::collection::hash_map(arbitrary_key(), any::<i32>(), 0..100),
    ) {
        let map: ChainedHashMap<String, i32> = entries.clone().into_iter().collect();

        let seen: HashMap<String, i32> = map
            .iter()
            .map(|(key, value)| (key.clone(), *value))
            .collect();
        prop_assert_eq!(seen.len(), map.len());
        prop_assert_eq!(seen, entries);
    }

    #[test]
    fn prop_keys_and_values_align(
        entries in proptest::collection::hash_map(arbitrary_key(), any::<i32>(), 0..100),
    ) {
        let map: ChainedHashMap<String, i32> = entries.into_iter().collect();

        let keys: Vec<&String> = map.keys().collect();
        let values: Vec<&i32> = map.values().collect();
        prop_assert_eq!(keys.len(), values.len());
        for (key, value) in keys.into_iter().zip(values) {
            prop_assert_eq!(map.get(key.as_str()), Some(value));
        }
    }

    #[test]
    fn prop_owned_iteration_carries_everything_out(
        entries in proptest::collection::hash_map(arbitrary_key(), any::<i32>(), 0..100),
    ) {
        let map: ChainedHashMap<String, i32> = entries.clone().into_iter().collect();

        let drained: HashMap<String, i32> = map.into_iter().collect();
        prop_assert_eq!(drained, entries);
    }
}

// ============================================================================
// Equality Laws
// ============================================================================

proptest! {
    #[test]
    fn prop_equality_ignores_bucket_layout(
        entries in proptest::collection::hash_map(arbitrary_key(), any::<i32>(), 0..60),
    ) {
        let pairs: Vec<(String, i32)> = entries.into_iter().collect();

        // Same associations reached through different growth histories.
        let direct: ChainedHashMap<String, i32> = pairs.iter().cloned().collect();
        let mut padded = ChainedHashMap::new();
        for index in 0..40 {
            padded.insert(format!("pad{index}"), index);
        }
        for index in 0..40 {
            padded.remove(format!("pad{index}").as_str());
        }
        padded.extend(pairs.iter().rev().cloned());

        prop_assert_eq!(direct, padded);
    }

    #[test]
    fn prop_clear_keeps_capacity_but_drops_entries(
        entries in proptest::collection::vec((arbitrary_key(), any::<i32>()), 0..200),
    ) {
        let mut map: ChainedHashMap<String, i32> = entries.into_iter().collect();
        let capacity = map.capacity();

        map.clear();
        prop_assert!(map.is_empty());
        prop_assert_eq!(map.capacity(), capacity);
        prop_assert_eq!(map.iter().count(), 0);
    }
}
