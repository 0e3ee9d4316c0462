use crate::markers;
use crate::rules;
use permafrost_value::Value;
use std::fmt;

/// A single exemption rule: a named total predicate over values.
///
/// Predicates must be cheap (property existence and type probes only), must
/// not mutate, and must not panic for any value. They run once per node per
/// traversal, with no memoization.
pub struct ExemptRule {
    id: &'static str,
    test: Box<dyn Fn(&Value) -> bool>,
}

impl ExemptRule {
    pub fn new(id: &'static str, test: impl Fn(&Value) -> bool + 'static) -> ExemptRule {
        ExemptRule {
            id,
            test: Box::new(test),
        }
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn matches(&self, value: &Value) -> bool {
        (self.test)(value)
    }
}

impl fmt::Debug for ExemptRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExemptRule").field("id", &self.id).finish()
    }
}

/// Ordered exemption catalog consulted at every node of a freeze traversal.
///
/// Built once at startup; first matching rule wins. Hosts swap detection
/// strategies by removing a built-in rule and appending their own.
#[derive(Debug)]
pub struct ExemptPolicy {
    rules: Vec<ExemptRule>,
}

impl ExemptPolicy {
    /// The built-in catalog: view-framework elements, persistent-collection
    /// markers, platform nodes, pending async results, in that order.
    pub fn builtin() -> ExemptPolicy {
        ExemptPolicy {
            rules: rules::builtin(),
        }
    }

    /// No rules at all: only primitives and functions are exempt.
    pub fn empty() -> ExemptPolicy {
        ExemptPolicy { rules: Vec::new() }
    }

    pub fn with_rule(mut self, rule: ExemptRule) -> ExemptPolicy {
        self.rules.push(rule);
        self
    }

    pub fn without_rule(mut self, id: &str) -> ExemptPolicy {
        self.rules.retain(|rule| rule.id != id);
        self
    }

    pub fn rule_ids(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.id).collect()
    }

    /// The id of the exemption category `value` falls under, if any.
    ///
    /// Total over every `Value`: values that are not composite objects are
    /// exempt by definition, composites when the first matching rule says so.
    pub fn classify(&self, value: &Value) -> Option<&'static str> {
        if !value.is_object() {
            return Some(markers::RULE_NON_COMPOSITE);
        }
        self.rules
            .iter()
            .find(|rule| rule.matches(value))
            .map(|rule| rule.id)
    }

    /// Whether a freeze traversal must leave `value` untouched.
    pub fn is_exempt(&self, value: &Value) -> bool {
        self.classify(value).is_some()
    }
}

impl Default for ExemptPolicy {
    fn default() -> ExemptPolicy {
        ExemptPolicy::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use permafrost_value::{ObjectRef, Value};

    #[test]
    fn builtin_catalog_order_is_stable() {
        assert_eq!(
            ExemptPolicy::builtin().rule_ids(),
            vec![
                markers::RULE_ELEMENT_TAG,
                markers::RULE_COLLECTION_MARKERS,
                markers::RULE_PLATFORM_NODE,
                markers::RULE_PENDING_ASYNC,
            ]
        );
    }

    #[test]
    fn non_composites_are_exempt_even_under_an_empty_policy() {
        let policy = ExemptPolicy::empty();
        for value in [
            Value::Null,
            Value::Undefined,
            Value::Bool(true),
            Value::Int(42),
            Value::str("s"),
        ] {
            assert_eq!(policy.classify(&value), Some(markers::RULE_NON_COMPOSITE));
        }
        assert_eq!(policy.classify(&Value::Object(ObjectRef::new())), None);
    }

    #[test]
    fn custom_rules_append_and_built_ins_can_be_removed() {
        let policy = ExemptPolicy::builtin()
            .without_rule(markers::RULE_PLATFORM_NODE)
            .with_rule(ExemptRule::new("exempt.branded", |value| {
                value
                    .as_object()
                    .is_some_and(|obj| obj.get_str("brand").is_some())
            }));

        assert!(!policy.rule_ids().contains(&markers::RULE_PLATFORM_NODE));

        let branded = ObjectRef::with_entries([("brand", Value::str("host"))]);
        assert_eq!(
            policy.classify(&Value::Object(branded)),
            Some("exempt.branded")
        );
    }

    #[test]
    fn first_matching_rule_wins() {
        let policy = ExemptPolicy::empty()
            .with_rule(ExemptRule::new("exempt.first", |_| true))
            .with_rule(ExemptRule::new("exempt.second", |_| true));
        assert_eq!(
            policy.classify(&Value::Object(ObjectRef::new())),
            Some("exempt.first")
        );
    }
}
