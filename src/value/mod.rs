//! Runtime value representation for expression evaluation.
//!
//! Every piece of data an expression can touch is a [`Value`]: scalars,
//! ordered sequences, string-keyed mappings, or opaque host objects that
//! answer keyed-property lookups through [`PropertyLookup`]. Host data is
//! converted into this tagged union once, at the boundary (see the
//! [`From`] impls in [`convert`]), so path resolution never inspects
//! foreign native types.
//!
//! # Example
//!
//! ```
//! use stencil::value::{Number, Value};
//!
//! let items = Value::Sequence(vec![
//!     Value::Number(Number::Integer(10)),
//!     Value::Number(Number::Integer(20)),
//! ]);
//!
//! assert_eq!(items.get("first"), Value::Number(Number::Integer(10)));
//! assert_eq!(items.get("count"), Value::Number(Number::Integer(2)));
//! assert_eq!(items.get("5"), Value::Absent);
//! ```

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

pub mod convert;

/// Keyed-property lookup for opaque host objects.
///
/// This is the single duck-typing seam between the resolver and
/// caller-owned data: a missing property is reported as
/// [`Value::Absent`], never as an error.
pub trait PropertyLookup: Send + Sync {
    /// Fetches the named property, or `Value::Absent` when missing.
    fn get(&self, name: &str) -> Value;
}

/// A numeric value (integer or float).
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) => write!(f, "{}", fl),
        }
    }
}

/// A runtime datum the expression engine can traverse.
///
/// `Absent` is the explicit "no value found" result: path misses produce
/// it and filters receive it like any other value. It is distinct from an
/// error and renders as the empty string.
#[derive(Clone)]
pub enum Value {
    /// No value found; flows silently through resolution and filters.
    Absent,
    /// A text value.
    String(String),
    /// An integer or float.
    Number(Number),
    /// A boolean.
    Boolean(bool),
    /// An ordered list of values.
    Sequence(Vec<Value>),
    /// A string-keyed mapping with unique keys.
    Mapping(IndexMap<String, Value>),
    /// An opaque host object supporting keyed-property lookup.
    Object(Arc<dyn PropertyLookup>),
}

impl Value {
    /// Steps one path segment into this value.
    ///
    /// Mappings look the segment up as a key; sequences accept a
    /// non-negative integer index or the pseudo-properties `first`,
    /// `last`, and `count`; objects delegate to [`PropertyLookup::get`].
    /// Scalars and `Absent` always yield `Absent`, so traversal through
    /// missing data keeps producing `Absent` without short-circuiting.
    pub fn get(&self, segment: &str) -> Value {
        match self {
            Value::Mapping(entries) => entries.get(segment).cloned().unwrap_or(Value::Absent),
            Value::Sequence(items) => {
                if let Ok(index) = segment.parse::<usize>() {
                    items.get(index).cloned().unwrap_or(Value::Absent)
                } else {
                    match segment {
                        "first" => items.first().cloned().unwrap_or(Value::Absent),
                        "last" => items.last().cloned().unwrap_or(Value::Absent),
                        "count" => Value::Number(Number::Integer(items.len() as i64)),
                        _ => Value::Absent,
                    }
                }
            }
            Value::Object(object) => object.get(segment),
            _ => Value::Absent,
        }
    }

    /// Returns true if this value is the explicit absent value.
    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    /// Returns true if this value is a container (sequence or mapping).
    pub fn is_container(&self) -> bool {
        matches!(self, Value::Sequence(_) | Value::Mapping(_))
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Absent => write!(f, "Absent"),
            Value::String(s) => f.debug_tuple("String").field(s).finish(),
            Value::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Value::Boolean(b) => f.debug_tuple("Boolean").field(b).finish(),
            Value::Sequence(items) => f.debug_tuple("Sequence").field(items).finish(),
            Value::Mapping(entries) => f.debug_tuple("Mapping").field(entries).finish(),
            Value::Object(_) => write!(f, "Object(..)"),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Absent, Value::Absent) => true,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Sequence(a), Value::Sequence(b)) => a == b,
            (Value::Mapping(a), Value::Mapping(b)) => a == b,
            // Opaque objects compare by identity.
            (Value::Object(a), Value::Object(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Renders a value into template output text.
///
/// `Absent` renders as the empty string so that a missing variable leaves
/// no trace in the output; sequences render their elements joined with
/// `", "`; mappings and objects render as placeholders.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Absent => Ok(()),
            Value::String(s) => write!(f, "{}", s),
            Value::Number(n) => write!(f, "{}", n),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Sequence(items) => {
                let rendered: Vec<String> = items.iter().map(|item| item.to_string()).collect();
                write!(f, "{}", rendered.join(", "))
            }
            Value::Mapping(_) => write!(f, "{{...}}"),
            Value::Object(_) => write!(f, "<object>"),
        }
    }
}
