use crate::markers;
use crate::policy::ExemptRule;
use permafrost_value::Value;

/// A pending asynchronous result settles by mutating itself, driven by the
/// runtime; freezing one corrupts that machinery. Anything exposing a
/// callable continuation-registration property counts, whichever library
/// produced it.
pub fn rule() -> ExemptRule {
    ExemptRule::new(markers::RULE_PENDING_ASYNC, |value| {
        let Some(obj) = value.as_object() else {
            return false;
        };
        matches!(obj.get_str(markers::THEN_KEY), Some(then) if then.is_callable())
    })
}
