use crate::markers;
use crate::policy::ExemptRule;
use permafrost_value::Value;

/// Platform tree nodes have live, externally managed state. Detection is
/// structural rather than nominal (an integer `nodeType` alongside a
/// string `nodeName`), so it holds across node implementations and is safe
/// to evaluate on any value.
pub fn rule() -> ExemptRule {
    ExemptRule::new(markers::RULE_PLATFORM_NODE, |value| {
        let Some(obj) = value.as_object() else {
            return false;
        };
        matches!(obj.get_str(markers::NODE_TYPE_KEY), Some(Value::Int(_)))
            && matches!(obj.get_str(markers::NODE_NAME_KEY), Some(Value::Str(_)))
    })
}
