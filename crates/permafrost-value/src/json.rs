//! JSON conversions: the convenient way to build a graph worth freezing,
//! and to look at one afterwards.

use crate::error::JsonError;
use crate::object::ObjectRef;
use crate::value::{PropertyKey, Value};
use std::collections::HashSet;

/// Build a fresh, fully mutable graph from JSON data.
///
/// Arrays become ordered-sequence composites (index keys plus `length`),
/// objects become plain composites with open attributes.
pub fn from_json(json: serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(i) => Value::Int(i),
            None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
        },
        serde_json::Value::String(s) => Value::str(s),
        serde_json::Value::Array(items) => {
            Value::Object(ObjectRef::array(items.into_iter().map(from_json)))
        }
        serde_json::Value::Object(map) => Value::Object(ObjectRef::with_entries(
            map.into_iter()
                .map(|(key, value)| (PropertyKey::from(key), from_json(value))),
        )),
    }
}

/// Render the JSON-representable portion of a graph.
///
/// Mirrors the host serializer: only own enumerable string-keyed properties
/// are emitted, and function-, symbol-, and undefined-valued properties are
/// dropped. Composites render as JSON objects whatever their shape, so an
/// ordered-sequence composite renders with its index and `length` keys.
/// Cyclic graphs are reported as an error instead of recursed forever.
pub fn to_json(value: &Value) -> Result<serde_json::Value, JsonError> {
    let mut in_progress = HashSet::new();
    render(value, &mut in_progress)
}

fn render(
    value: &Value,
    in_progress: &mut HashSet<usize>,
) -> Result<serde_json::Value, JsonError> {
    Ok(match value {
        Value::Null | Value::Undefined => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::from(*b),
        Value::Int(i) => serde_json::Value::from(*i),
        Value::Float(x) => serde_json::Number::from_f64(*x)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::Str(s) => serde_json::Value::from(s.as_ref()),
        Value::Symbol(_) | Value::Function(_) => serde_json::Value::Null,
        Value::Object(obj) => {
            if !in_progress.insert(obj.ptr_id()) {
                return Err(JsonError::CyclicGraph);
            }
            let mut map = serde_json::Map::new();
            for (key, child) in obj.own_enumerable() {
                let Some(name) = key.as_str() else { continue };
                if matches!(
                    child,
                    Value::Function(_) | Value::Symbol(_) | Value::Undefined
                ) {
                    continue;
                }
                map.insert(name.to_string(), render(&child, in_progress)?);
            }
            in_progress.remove(&obj.ptr_id());
            serde_json::Value::Object(map)
        }
    })
}
