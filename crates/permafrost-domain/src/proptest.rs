//! Property-based tests for the freeze engine.
//!
//! These tests use proptest to verify invariants around:
//! - Full lock coverage of arbitrary non-exempt graphs
//! - Idempotence of the operation
//! - Exempt roots leaving their reachable graphs untouched
//! - Termination on cyclic graphs

use crate::engine::deep_freeze_value;
use crate::markers;
use crate::policy::ExemptPolicy;
use permafrost_value::{from_json, to_json, ObjectRef, Value};
use proptest::prelude::*;
use std::collections::HashSet;

// ============================================================================
// Strategies for generating arbitrary value graphs
// ============================================================================

/// Arbitrary JSON data, instantiated into a value graph by `from_json`.
///
/// Object keys stay within `[a-z]{1,6}`, so no generated key can collide
/// with a marker probed by the built-in rules; JSON carries no callables, so
/// even a generated `then` key cannot look like a pending async result.
fn arb_json() -> impl Strategy<Value = serde_json::Value> {
    let leaf = prop_oneof![
        Just(serde_json::Value::Null),
        any::<bool>().prop_map(serde_json::Value::from),
        any::<i64>().prop_map(serde_json::Value::from),
        "[a-z]{0,8}".prop_map(serde_json::Value::from),
    ];
    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(serde_json::Value::Array),
            prop::collection::btree_map("[a-z]{1,6}", inner, 0..6)
                .prop_map(|map| serde_json::Value::Object(map.into_iter().collect())),
        ]
    })
}

/// Every composite reachable from `root` through own enumerable properties,
/// each one once.
fn reachable_objects(root: &Value) -> Vec<ObjectRef> {
    let mut seen = HashSet::new();
    let mut queue = vec![root.clone()];
    let mut out = Vec::new();
    while let Some(value) = queue.pop() {
        let Some(obj) = value.as_object() else {
            continue;
        };
        if !seen.insert(obj.ptr_id()) {
            continue;
        }
        out.push(obj.clone());
        for (_, child) in obj.own_enumerable() {
            queue.push(child);
        }
    }
    out
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Every composite reachable from a non-exempt graph is frozen, however
    /// the graph is shaped.
    #[test]
    fn freeze_covers_every_reachable_composite(json in arb_json()) {
        let value = from_json(json);
        deep_freeze_value(&value);

        for obj in reachable_objects(&value) {
            prop_assert!(obj.is_frozen());
            prop_assert!(obj.is_sealed());
            prop_assert!(!obj.is_extensible());
        }
    }

    /// A second call neither fails nor changes anything observable.
    #[test]
    fn freezing_twice_equals_freezing_once(json in arb_json()) {
        let value = from_json(json);
        deep_freeze_value(&value);
        let after_first = to_json(&value).expect("acyclic by construction");

        deep_freeze_value(&value);
        let after_second = to_json(&value).expect("acyclic by construction");

        prop_assert_eq!(after_first, after_second);
        for obj in reachable_objects(&value) {
            prop_assert!(obj.is_frozen());
        }
    }

    /// An exempt root short-circuits the whole call: nothing reachable from
    /// it is locked, however deep the freezable material underneath.
    #[test]
    fn exempt_root_leaves_the_reachable_graph_untouched(json in arb_json()) {
        let root = ObjectRef::with_entries([
            (markers::IMMUTABLE_KEYED_KEY, Value::Bool(true)),
            ("contents", from_json(json)),
        ]);
        let value = Value::Object(root);
        deep_freeze_value(&value);

        for obj in reachable_objects(&value) {
            prop_assert!(obj.is_extensible());
            prop_assert!(!obj.is_frozen());
        }
    }

    /// Tying arbitrary graphs into cycles must not prevent termination or
    /// full coverage.
    #[test]
    fn cyclic_graphs_terminate_with_full_coverage(json in arb_json()) {
        let root = ObjectRef::with_entries([("contents", from_json(json))]);
        let value = Value::Object(root.clone());

        // A self-loop on the root plus a back edge from every leaf-most
        // composite in the graph.
        root.set_str("cycle", Value::Object(root.clone())).unwrap();
        for obj in reachable_objects(&value) {
            obj.set_str("back", Value::Object(root.clone())).unwrap();
        }

        deep_freeze_value(&value);

        for obj in reachable_objects(&value) {
            prop_assert!(obj.is_frozen());
        }
    }

    /// The classifier is total and pure: classifying arbitrary values never
    /// panics and never mutates the graph.
    #[test]
    fn classification_is_total_and_effect_free(json in arb_json()) {
        let policy = ExemptPolicy::builtin();
        let value = from_json(json);
        let before = to_json(&value).expect("acyclic by construction");

        for obj in reachable_objects(&value) {
            let composite = Value::Object(obj);
            prop_assert_eq!(policy.classify(&composite), None);
            prop_assert!(!policy.is_exempt(&composite));
        }

        prop_assert_eq!(to_json(&value).expect("acyclic by construction"), before);
    }
}
