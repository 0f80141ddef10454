//! Boundary conversion of host data into [`Value`].
//!
//! Caller data crosses into the engine exactly once, through these
//! conversions; after that, resolution works purely on the tagged union.
//! JSON `null` maps to [`Value::Absent`] — the engine has no separate
//! null, a nil entry and a missing entry behave identically.

use indexmap::IndexMap;
use serde_json::Value as JsonValue;

use super::{Number, Value};

impl From<JsonValue> for Value {
    fn from(json: JsonValue) -> Self {
        match json {
            JsonValue::Null => Value::Absent,
            JsonValue::Bool(b) => Value::Boolean(b),
            JsonValue::Number(n) => match n.as_i64() {
                Some(i) => Value::Number(Number::Integer(i)),
                None => Value::Number(Number::Float(n.as_f64().unwrap_or(f64::MAX))),
            },
            JsonValue::String(s) => Value::String(s),
            JsonValue::Array(items) => {
                Value::Sequence(items.into_iter().map(Value::from).collect())
            }
            JsonValue::Object(entries) => Value::Mapping(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Number(Number::Integer(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Number(Number::Float(f))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Sequence(items)
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(entries: IndexMap<String, Value>) -> Self {
        Value::Mapping(entries)
    }
}
