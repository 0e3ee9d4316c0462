use crate::markers;
use crate::policy::ExemptRule;
use permafrost_value::Value;

/// View-framework elements carry a tag property that identifies them to the
/// library that owns them; that library keeps writing bookkeeping fields
/// after creation, so the element must stay mutable. The tag's value is
/// symbol-typed in current library versions and number-typed in older ones.
pub fn rule() -> ExemptRule {
    ExemptRule::new(markers::RULE_ELEMENT_TAG, |value| {
        let Some(obj) = value.as_object() else {
            return false;
        };
        match obj.get_str(markers::ELEMENT_TAG_KEY) {
            Some(Value::Symbol(_)) => true,
            Some(tag) => tag.is_number(),
            None => false,
        }
    })
}
