use crate::policy::ExemptRule;

mod collection_markers;
mod element_tag;
mod pending_async;
mod platform_node;

#[cfg(test)]
mod tests;

/// The built-in rules in evaluation order. First match wins, so the most
/// specific probes come first.
pub fn builtin() -> Vec<ExemptRule> {
    vec![
        element_tag::rule(),
        collection_markers::rule(),
        platform_node::rule(),
        pending_async::rule(),
    ]
}
