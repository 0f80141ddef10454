//! Dotted-path resolution against a context.

use crate::context::Context;
use crate::value::Value;

/// A dotted variable path, or a quoted string literal.
///
/// `user.name` splits into segments walked through the context's data;
/// `'greeting'` is a literal that resolves to its unquoted interior
/// without consulting the context at all.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    raw: String,
    literal: Option<String>,
    segments: Vec<String>,
}

impl Variable {
    /// Parses a raw path string.
    ///
    /// Never fails: an empty string simply produces a variable with no
    /// segments, which resolves to `Value::Absent`. Empty segments from
    /// consecutive dots are dropped.
    pub fn new(raw: &str) -> Self {
        let literal = literal_content(raw).map(str::to_string);
        let segments = if literal.is_some() {
            Vec::new()
        } else {
            raw.split('.')
                .filter(|segment| !segment.is_empty())
                .map(str::to_string)
                .collect()
        };
        Self {
            raw: raw.to_string(),
            literal,
            segments,
        }
    }

    /// Returns the raw path text.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Returns the dot-separated segments (empty for literals).
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Returns true if this variable is a quoted string literal.
    pub fn is_literal(&self) -> bool {
        self.literal.is_some()
    }

    /// Resolves the path against a context.
    ///
    /// Never fails. Literals return their interior content; otherwise the
    /// first segment is looked up as a top-level variable and every later
    /// segment steps through [`Value::get`]. Every segment is consumed
    /// even once the walk has gone absent, so a miss partway through just
    /// keeps yielding `Value::Absent`.
    pub fn resolve(&self, context: &Context) -> Value {
        if let Some(text) = &self.literal {
            return Value::String(text.clone());
        }

        let mut segments = self.segments.iter();
        let mut current = match segments.next() {
            Some(first) => context.lookup(first),
            None => return Value::Absent,
        };
        for segment in segments {
            current = current.get(segment);
        }
        current
    }
}

/// Returns the interior of a matching-quote-wrapped string, if any.
fn literal_content(raw: &str) -> Option<&str> {
    let first = raw.chars().next()?;
    if (first == '\'' || first == '"') && raw.len() >= 2 && raw.ends_with(first) {
        Some(&raw[1..raw.len() - 1])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Number;
    use serde_json::json;

    fn sample_context() -> Context {
        let mut context = Context::new();
        context.set(
            "user",
            Value::from(json!({"name": "alice", "address": {"city": "Oslo"}})),
        );
        context.set("items", Value::from(json!([10, 20, 30])));
        context
    }

    #[test]
    fn test_single_segment() {
        let context = sample_context();
        let value = Variable::new("items").resolve(&context);
        assert!(matches!(value, Value::Sequence(_)));
    }

    #[test]
    fn test_nested_path() {
        let context = sample_context();
        let value = Variable::new("user.address.city").resolve(&context);
        assert_eq!(value, Value::from("Oslo"));
    }

    #[test]
    fn test_unknown_top_level_name() {
        let context = sample_context();
        assert_eq!(Variable::new("missing").resolve(&context), Value::Absent);
    }

    #[test]
    fn test_missing_key_midway() {
        let context = sample_context();
        let value = Variable::new("user.phone.area").resolve(&context);
        assert_eq!(value, Value::Absent);
    }

    #[test]
    fn test_segment_into_scalar_is_absent() {
        let context = sample_context();
        let value = Variable::new("user.name.length").resolve(&context);
        assert_eq!(value, Value::Absent);
    }

    #[test]
    fn test_sequence_index() {
        let context = sample_context();
        let value = Variable::new("items.1").resolve(&context);
        assert_eq!(value, Value::Number(Number::Integer(20)));
    }

    #[test]
    fn test_sequence_index_out_of_range() {
        let context = sample_context();
        assert_eq!(Variable::new("items.5").resolve(&context), Value::Absent);
    }

    #[test]
    fn test_sequence_pseudo_properties() {
        let context = sample_context();
        assert_eq!(
            Variable::new("items.first").resolve(&context),
            Value::Number(Number::Integer(10))
        );
        assert_eq!(
            Variable::new("items.last").resolve(&context),
            Value::Number(Number::Integer(30))
        );
        assert_eq!(
            Variable::new("items.count").resolve(&context),
            Value::Number(Number::Integer(3))
        );
    }

    #[test]
    fn test_single_quoted_literal() {
        let context = Context::new();
        let variable = Variable::new("'literal'");
        assert!(variable.is_literal());
        assert_eq!(variable.resolve(&context), Value::from("literal"));
    }

    #[test]
    fn test_double_quoted_literal() {
        let context = Context::new();
        let value = Variable::new("\"hello world\"").resolve(&context);
        assert_eq!(value, Value::from("hello world"));
    }

    #[test]
    fn test_literal_ignores_context() {
        let mut context = Context::new();
        context.set("literal", Value::from("bound"));
        assert_eq!(
            Variable::new("'literal'").resolve(&context),
            Value::from("literal")
        );
    }

    #[test]
    fn test_literal_with_dots_is_not_segmented() {
        let context = Context::new();
        let variable = Variable::new("'a.b.c'");
        assert!(variable.segments().is_empty());
        assert_eq!(variable.resolve(&context), Value::from("a.b.c"));
    }

    #[test]
    fn test_mismatched_quotes_are_not_a_literal() {
        let variable = Variable::new("'oops\"");
        assert!(!variable.is_literal());
    }

    #[test]
    fn test_lone_quote_is_not_a_literal() {
        assert!(!Variable::new("'").is_literal());
    }

    #[test]
    fn test_empty_path_resolves_to_absent() {
        let context = sample_context();
        assert_eq!(Variable::new("").resolve(&context), Value::Absent);
    }

    #[test]
    fn test_consecutive_dots_drop_empty_segments() {
        let context = sample_context();
        let variable = Variable::new("user..name");
        assert_eq!(variable.segments(), ["user", "name"]);
        assert_eq!(variable.resolve(&context), Value::from("alice"));
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let context = sample_context();
        let variable = Variable::new("user.address.city");
        assert_eq!(variable.resolve(&context), variable.resolve(&context));
    }
}
