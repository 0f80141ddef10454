//! Built-in filters.
//!
//! These cover the transformations a template author reaches for first:
//! case mapping, fallbacks for absent data, container sizing, and list
//! joining. None of them fail; values they cannot sensibly transform pass
//! through unchanged (or become absent, for `length`).

use crate::value::{Number, Value};

use super::{Filter, FilterError, FilterRegistry};

pub(super) fn install(registry: &mut FilterRegistry) {
    registry.register("upper", Filter::new(upper));
    registry.register("lower", Filter::new(lower));
    registry.register("default", Filter::new(default));
    registry.register("length", Filter::new(length));
    registry.register("join", Filter::new(join));
}

/// Uppercases a string value; everything else passes through.
fn upper(value: Value, _args: &[String]) -> Result<Value, FilterError> {
    Ok(match value {
        Value::String(s) => Value::String(s.to_uppercase()),
        other => other,
    })
}

/// Lowercases a string value; everything else passes through.
fn lower(value: Value, _args: &[String]) -> Result<Value, FilterError> {
    Ok(match value {
        Value::String(s) => Value::String(s.to_lowercase()),
        other => other,
    })
}

/// Substitutes the first argument when the value is absent.
///
/// Without an argument, absent stays absent.
fn default(value: Value, args: &[String]) -> Result<Value, FilterError> {
    Ok(match value {
        Value::Absent => args
            .first()
            .map(|fallback| Value::String(fallback.clone()))
            .unwrap_or(Value::Absent),
        other => other,
    })
}

/// Element count of a sequence, entry count of a mapping, character count
/// of a string; absent for anything else.
fn length(value: Value, _args: &[String]) -> Result<Value, FilterError> {
    Ok(match value {
        Value::Sequence(items) => Value::Number(Number::Integer(items.len() as i64)),
        Value::Mapping(entries) => Value::Number(Number::Integer(entries.len() as i64)),
        Value::String(s) => Value::Number(Number::Integer(s.chars().count() as i64)),
        _ => Value::Absent,
    })
}

/// Renders each element of a sequence and joins with the first argument
/// (empty separator when omitted); non-sequences pass through.
fn join(value: Value, args: &[String]) -> Result<Value, FilterError> {
    Ok(match value {
        Value::Sequence(items) => {
            let separator = args.first().map(String::as_str).unwrap_or("");
            let rendered: Vec<String> = items.iter().map(|item| item.to_string()).collect();
            Value::String(rendered.join(separator))
        }
        other => other,
    })
}
