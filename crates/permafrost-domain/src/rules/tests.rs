use super::{collection_markers, element_tag, pending_async, platform_node};
use crate::markers;
use crate::policy::ExemptPolicy;
use crate::test_support::{
    collection_with_marker, element_with_number_tag, element_with_symbol_tag,
    pending_async as pending_async_stand_in, platform_node as platform_node_stand_in,
};
use permafrost_value::{FunctionRef, ObjectRef, Symbol, Value};

#[test]
fn element_tag_accepts_symbol_and_number_tags_only() {
    let rule = element_tag::rule();

    assert!(rule.matches(&Value::Object(element_with_symbol_tag())));
    assert!(rule.matches(&Value::Object(element_with_number_tag())));

    let string_tag =
        ObjectRef::with_entries([(markers::ELEMENT_TAG_KEY, Value::str("element"))]);
    assert!(!rule.matches(&Value::Object(string_tag)));

    let float_tag = ObjectRef::with_entries([(markers::ELEMENT_TAG_KEY, Value::Float(1.0))]);
    assert!(rule.matches(&Value::Object(float_tag)));

    let untagged = ObjectRef::with_entries([("kind", Value::str("div"))]);
    assert!(!rule.matches(&Value::Object(untagged)));
    assert!(!rule.matches(&Value::Int(1)));
}

#[test]
fn each_collection_marker_is_sufficient_on_its_own() {
    let rule = collection_markers::rule();

    for marker_key in markers::COLLECTION_MARKER_KEYS {
        let collection = collection_with_marker(marker_key);
        assert!(
            rule.matches(&Value::Object(collection)),
            "marker `{marker_key}` should exempt"
        );
    }
}

#[test]
fn null_and_undefined_markers_do_not_count() {
    let rule = collection_markers::rule();

    let null_marker =
        ObjectRef::with_entries([(markers::IMMUTABLE_ITERABLE_KEY, Value::Null)]);
    assert!(!rule.matches(&Value::Object(null_marker)));

    let undefined_marker =
        ObjectRef::with_entries([(markers::IMMUTABLE_RECORD_KEY, Value::Undefined)]);
    assert!(!rule.matches(&Value::Object(undefined_marker)));

    let unmarked = ObjectRef::with_entries([("size", Value::Int(0))]);
    assert!(!rule.matches(&Value::Object(unmarked)));
}

#[test]
fn marker_value_type_is_irrelevant_when_present() {
    let rule = collection_markers::rule();

    for marker_value in [Value::Bool(false), Value::Int(1), Value::str("y")] {
        let collection =
            ObjectRef::with_entries([(markers::IMMUTABLE_KEYED_KEY, marker_value)]);
        assert!(rule.matches(&Value::Object(collection)));
    }
}

#[test]
fn platform_node_requires_both_structural_properties() {
    let rule = platform_node::rule();

    assert!(rule.matches(&Value::Object(platform_node_stand_in())));

    let type_only = ObjectRef::with_entries([(markers::NODE_TYPE_KEY, Value::Int(1))]);
    assert!(!rule.matches(&Value::Object(type_only)));

    let name_only = ObjectRef::with_entries([(markers::NODE_NAME_KEY, Value::str("DIV"))]);
    assert!(!rule.matches(&Value::Object(name_only)));

    let string_typed = ObjectRef::with_entries([
        (markers::NODE_TYPE_KEY, Value::str("1")),
        (markers::NODE_NAME_KEY, Value::str("DIV")),
    ]);
    assert!(!rule.matches(&Value::Object(string_typed)));
}

#[test]
fn pending_async_requires_a_callable_continuation_property() {
    let rule = pending_async::rule();

    assert!(rule.matches(&Value::Object(pending_async_stand_in())));

    let data_then = ObjectRef::with_entries([(markers::THEN_KEY, Value::Int(1))]);
    assert!(!rule.matches(&Value::Object(data_then)));

    let no_then = ObjectRef::with_entries([(
        "resolve",
        Value::Function(FunctionRef::noop("resolve")),
    )]);
    assert!(!rule.matches(&Value::Object(no_then)));
}

#[test]
fn rules_are_false_for_non_composites() {
    for rule in [
        element_tag::rule(),
        collection_markers::rule(),
        platform_node::rule(),
        pending_async::rule(),
    ] {
        for value in [
            Value::Null,
            Value::Undefined,
            Value::Int(1),
            Value::str("s"),
            Value::Symbol(Symbol::anonymous()),
            Value::Function(FunctionRef::noop("f")),
        ] {
            assert!(!rule.matches(&value), "rule `{}`", rule.id());
        }
    }
}

#[test]
fn classify_reports_the_first_matching_category() {
    let policy = ExemptPolicy::builtin();

    // An element that also looks like a pending async result: the element
    // rule is ordered first and wins.
    let both = element_with_symbol_tag();
    both.set_str(
        markers::THEN_KEY,
        Value::Function(FunctionRef::noop("then")),
    )
    .unwrap();
    assert_eq!(
        policy.classify(&Value::Object(both)),
        Some(markers::RULE_ELEMENT_TAG)
    );

    assert_eq!(
        policy.classify(&Value::Object(platform_node_stand_in())),
        Some(markers::RULE_PLATFORM_NODE)
    );
    assert_eq!(
        policy.classify(&Value::Object(pending_async_stand_in())),
        Some(markers::RULE_PENDING_ASYNC)
    );
    assert_eq!(
        policy.classify(&Value::Object(ObjectRef::new())),
        None
    );
}
