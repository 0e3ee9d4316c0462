use crate::policy::ExemptPolicy;
use permafrost_value::Value;
use std::collections::HashSet;

/// Deeply freeze `value` in place using the built-in exemption catalog.
///
/// Exempt values are returned untouched. A composite is frozen, then its
/// own enumerable properties are visited depth-first, then it is sealed.
/// Safe to call repeatedly on the same graph; never fails.
pub fn deep_freeze_value(value: &Value) {
    deep_freeze_with(value, &ExemptPolicy::builtin());
}

/// Deeply freeze `value` in place, consulting `policy` at every node,
/// including the root before any mutation. An exempt root leaves the whole
/// reachable graph untouched.
pub fn deep_freeze_with(value: &Value, policy: &ExemptPolicy) {
    let mut visited = HashSet::new();
    freeze_graph(value, policy, &mut visited);
}

fn freeze_graph(value: &Value, policy: &ExemptPolicy, visited: &mut HashSet<usize>) {
    let Some(obj) = value.as_object() else {
        return;
    };
    if policy.is_exempt(value) {
        return;
    }
    // Identity-keyed guard: cyclic and diamond-shaped graphs terminate, and
    // no node is processed twice within one call.
    if !visited.insert(obj.ptr_id()) {
        return;
    }

    obj.freeze();
    for (_, child) in obj.own_enumerable() {
        freeze_graph(&child, policy, visited);
    }
    // Second locking pass after the children, so layouts that were only
    // partially locked before this call end up non-configurable as well.
    obj.seal();
}
