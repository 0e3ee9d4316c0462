use crate::markers;
use crate::policy::ExemptRule;
use permafrost_value::Value;

/// Persistent-collection libraries self-identify their internal
/// representations with marker properties (iterable, keyed, indexed,
/// ordered, record). They guarantee their own immutability semantics, and
/// their internals are not ours to lock. Any marker present with a value
/// other than null or undefined counts.
pub fn rule() -> ExemptRule {
    ExemptRule::new(markers::RULE_COLLECTION_MARKERS, |value| {
        let Some(obj) = value.as_object() else {
            return false;
        };
        markers::COLLECTION_MARKER_KEYS.iter().any(|key| {
            !matches!(
                obj.get_str(key),
                None | Some(Value::Null) | Some(Value::Undefined)
            )
        })
    })
}
