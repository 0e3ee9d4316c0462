//! Stable rule identifiers and the well-known marker properties probed by
//! the built-in exemption rules.
//!
//! Rule ids are a dotted namespace. Marker constants are the exact keys
//! foreign libraries use to self-identify their objects; they are part of
//! those libraries' de-facto wire format and must not be normalized.

// Rules
pub const RULE_NON_COMPOSITE: &str = "exempt.non_composite";
pub const RULE_ELEMENT_TAG: &str = "exempt.element_tag";
pub const RULE_COLLECTION_MARKERS: &str = "exempt.collection_markers";
pub const RULE_PLATFORM_NODE: &str = "exempt.platform_node";
pub const RULE_PENDING_ASYNC: &str = "exempt.pending_async";

/// View-framework element tag key. The tagged value is symbol-typed in
/// current library versions and number-typed in older ones.
pub const ELEMENT_TAG_KEY: &str = "$$typeof";

// Persistent-collection self-identification keys.
pub const IMMUTABLE_ITERABLE_KEY: &str = "@@__IMMUTABLE_ITERABLE__@@";
pub const IMMUTABLE_KEYED_KEY: &str = "@@__IMMUTABLE_KEYED__@@";
pub const IMMUTABLE_INDEXED_KEY: &str = "@@__IMMUTABLE_INDEXED__@@";
pub const IMMUTABLE_ORDERED_KEY: &str = "@@__IMMUTABLE_ORDERED__@@";
pub const IMMUTABLE_RECORD_KEY: &str = "@@__IMMUTABLE_RECORD__@@";

pub const COLLECTION_MARKER_KEYS: [&str; 5] = [
    IMMUTABLE_ITERABLE_KEY,
    IMMUTABLE_KEYED_KEY,
    IMMUTABLE_INDEXED_KEY,
    IMMUTABLE_ORDERED_KEY,
    IMMUTABLE_RECORD_KEY,
];

// Structural probes for platform tree nodes and pending async results.
pub const NODE_TYPE_KEY: &str = "nodeType";
pub const NODE_NAME_KEY: &str = "nodeName";
pub const THEN_KEY: &str = "then";
