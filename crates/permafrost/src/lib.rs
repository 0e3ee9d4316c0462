//! Public facade over the permafrost value model and freeze engine.
//!
//! The one operation that matters is [`deep_freeze_value`]: lock a value
//! and everything reachable from it in place, leaving exempt categories
//! untouched. [`deep_freeze_with`] takes a custom [`ExemptPolicy`] for
//! hosts that need their own exemption rules.

#![forbid(unsafe_code)]

pub use permafrost_domain::policy::{ExemptPolicy, ExemptRule};
pub use permafrost_domain::{deep_freeze_value, deep_freeze_with, markers};
pub use permafrost_value::{
    from_json, to_json, FunctionRef, JsonError, MutationError, ObjectRef, Property, PropertyAttrs,
    PropertyKey, Symbol, Value,
};
