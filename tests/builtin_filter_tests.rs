//! Integration tests for the built-in filter set.

use serde_json::json;
use stencil::{Context, FilterExpression, FilterRegistry, Number, Value};

fn evaluate(expression: &str, context: &Context) -> Value {
    let registry = FilterRegistry::with_builtins();
    FilterExpression::parse(expression, &registry)
        .unwrap()
        .evaluate(context)
        .unwrap()
}

#[test]
fn test_upper_and_lower() {
    let mut context = Context::new();
    context.set("name", Value::from("Alice"));

    assert_eq!(evaluate("name|upper", &context), Value::from("ALICE"));
    assert_eq!(evaluate("name|lower", &context), Value::from("alice"));
}

#[test]
fn test_case_filters_pass_absent_through() {
    let context = Context::new();
    assert_eq!(evaluate("missing|upper", &context), Value::Absent);
    assert_eq!(evaluate("missing|lower", &context), Value::Absent);
}

#[test]
fn test_default_only_fires_on_absent() {
    let mut context = Context::new();
    context.set("present", Value::from("here"));

    assert_eq!(
        evaluate("present|default:'fallback'", &context),
        Value::from("here")
    );
    assert_eq!(
        evaluate("absent|default:'fallback'", &context),
        Value::from("fallback")
    );
}

#[test]
fn test_length_of_containers_and_strings() {
    let mut context = Context::new();
    context.set("items", Value::from(json!([1, 2, 3, 4])));
    context.set("user", Value::from(json!({"a": 1, "b": 2})));
    context.set("word", Value::from("héllo"));
    context.set("flag", Value::from(true));

    assert_eq!(
        evaluate("items|length", &context),
        Value::Number(Number::Integer(4))
    );
    assert_eq!(
        evaluate("user|length", &context),
        Value::Number(Number::Integer(2))
    );
    assert_eq!(
        evaluate("word|length", &context),
        Value::Number(Number::Integer(5))
    );
    assert_eq!(evaluate("flag|length", &context), Value::Absent);
}

#[test]
fn test_join_renders_elements() {
    let mut context = Context::new();
    context.set("items", Value::from(json!(["a", 1, true])));

    assert_eq!(
        evaluate("items|join:', '", &context),
        Value::from("a, 1, true")
    );
    assert_eq!(evaluate("items|join", &context), Value::from("a1true"));
}

#[test]
fn test_chained_builtins() {
    let mut context = Context::new();
    context.set("tags", Value::from(json!(["Rust", "Templates"])));

    assert_eq!(
        evaluate("tags|join:'-'|lower", &context),
        Value::from("rust-templates")
    );
}
