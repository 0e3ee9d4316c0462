use crate::markers;
use permafrost_value::{FunctionRef, ObjectRef, Symbol, Value};

pub fn element_with_symbol_tag() -> ObjectRef {
    ObjectRef::with_entries([
        (
            markers::ELEMENT_TAG_KEY,
            Value::Symbol(Symbol::new("element")),
        ),
        ("kind", Value::str("div")),
    ])
}

pub fn element_with_number_tag() -> ObjectRef {
    ObjectRef::with_entries([
        (markers::ELEMENT_TAG_KEY, Value::Int(0xeac7)),
        ("kind", Value::str("div")),
    ])
}

pub fn collection_with_marker(marker_key: &str) -> ObjectRef {
    ObjectRef::with_entries([(marker_key, Value::Bool(true)), ("size", Value::Int(0))])
}

/// A tree-node stand-in with an internal mutable property.
pub fn platform_node() -> ObjectRef {
    ObjectRef::with_entries([
        (markers::NODE_TYPE_KEY, Value::Int(1)),
        (markers::NODE_NAME_KEY, Value::str("DIV")),
        ("childCount", Value::Int(0)),
    ])
}

pub fn pending_async() -> ObjectRef {
    ObjectRef::with_entries([(
        markers::THEN_KEY,
        Value::Function(FunctionRef::noop("then")),
    )])
}

/// `{a: {b: [1, 2, {c: 3}]}}`, returned as `(root, a, b, c)` so tests can
/// inspect every composite.
pub fn nested_sample() -> (ObjectRef, ObjectRef, ObjectRef, ObjectRef) {
    let c = ObjectRef::with_entries([("c", Value::Int(3))]);
    let b = ObjectRef::array([Value::Int(1), Value::Int(2), Value::Object(c.clone())]);
    let a = ObjectRef::with_entries([("b", Value::Object(b.clone()))]);
    let root = ObjectRef::with_entries([("a", Value::Object(a.clone()))]);
    (root, a, b, c)
}

/// Two objects referring to each other.
pub fn cyclic_pair() -> (ObjectRef, ObjectRef) {
    let first = ObjectRef::new();
    let second = ObjectRef::new();
    first
        .set_str("next", Value::Object(second.clone()))
        .unwrap();
    second
        .set_str("back", Value::Object(first.clone()))
        .unwrap();
    (first, second)
}

/// The mutability probe used by exemption tests: can a new property still
/// be added?
pub fn can_extend(obj: &ObjectRef) -> bool {
    obj.set_str("__probe", Value::Int(1)).is_ok()
}
