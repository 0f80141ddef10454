//! Stencil expression core: dotted-path resolution and filter chains.
//!
//! This crate is the expression-evaluation heart of a text-template engine.
//! An expression such as `user.name|upper|default:"N/A"` names a piece of
//! data by dotted path, then threads it through a chain of named filters.
//! Parsing happens once, at template-compile time; the resulting
//! [`FilterExpression`](expr::FilterExpression) is immutable and can be
//! evaluated any number of times against different [`Context`](context::Context)
//! instances.
//!
//! Missing data is never an error: path resolution degrades to
//! [`Value::Absent`](value::Value::Absent), which flows through filters so
//! that e.g. a `default` filter can substitute a fallback.
//!
//! # Example
//!
//! ```
//! use stencil::context::Context;
//! use stencil::expr::FilterExpression;
//! use stencil::filters::FilterRegistry;
//! use stencil::value::Value;
//!
//! let registry = FilterRegistry::with_builtins();
//! let expr = FilterExpression::parse("user.name|upper", &registry).unwrap();
//!
//! let mut context = Context::new();
//! context.set("user", Value::from(serde_json::json!({"name": "alice"})));
//!
//! let value = expr.evaluate(&context).unwrap();
//! assert_eq!(value, Value::from("ALICE"));
//! ```

pub mod context;
pub mod expr;
pub mod filters;
pub mod value;

pub use context::Context;
pub use expr::{ExpressionError, FilterExpression, Variable};
pub use filters::{Filter, FilterError, FilterRegistry};
pub use value::{Number, PropertyLookup, Value};
