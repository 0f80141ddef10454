//! Filter registry and invocation contract.
//!
//! A [`Filter`] transforms one [`Value`] into another, optionally
//! parameterized by positional string arguments. Filters are resolved by
//! name in a [`FilterRegistry`] at expression-parse time; an unknown name
//! is a parse error, never a runtime one. A filter may fail with a
//! [`FilterError`], which aborts the rest of its chain.
//!
//! # Example
//!
//! ```
//! use stencil::filters::{Filter, FilterRegistry};
//! use stencil::value::Value;
//!
//! let mut registry = FilterRegistry::with_builtins();
//! registry.register(
//!     "shout",
//!     Filter::new(|value, _args| Ok(Value::String(format!("{}!", value)))),
//! );
//!
//! let shout = registry.find("shout").unwrap();
//! assert_eq!(shout.apply(Value::from("hi"), &[]).unwrap(), Value::from("hi!"));
//! ```

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::value::Value;

mod builtins;

/// An evaluation-time filter failure.
///
/// Propagated verbatim to the expression's caller; the engine never wraps
/// or swallows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterError {
    message: String,
}

impl FilterError {
    /// Creates a filter error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for FilterError {}

/// A named value transformation.
///
/// The callable receives the current value and the raw string arguments
/// from the expression; argument interpretation is the filter's business.
#[derive(Clone)]
pub struct Filter(Arc<dyn Fn(Value, &[String]) -> Result<Value, FilterError> + Send + Sync>);

impl Filter {
    /// Wraps a callable as a filter.
    pub fn new(
        f: impl Fn(Value, &[String]) -> Result<Value, FilterError> + Send + Sync + 'static,
    ) -> Self {
        Self(Arc::new(f))
    }

    /// Applies the filter to a value.
    pub fn apply(&self, value: Value, args: &[String]) -> Result<Value, FilterError> {
        (self.0)(value, args)
    }
}

impl fmt::Debug for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Filter(..)")
    }
}

/// Name-to-filter registry consulted at parse time.
#[derive(Debug, Clone, Default)]
pub struct FilterRegistry {
    filters: IndexMap<String, Filter>,
}

impl FilterRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            filters: IndexMap::new(),
        }
    }

    /// Creates a registry preloaded with the built-in filters
    /// (`upper`, `lower`, `default`, `length`, `join`).
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        builtins::install(&mut registry);
        registry
    }

    /// Registers a filter under a name, replacing any previous binding.
    pub fn register(&mut self, name: impl Into<String>, filter: Filter) {
        self.filters.insert(name.into(), filter);
    }

    /// Finds a filter by name.
    pub fn find(&self, name: &str) -> Option<&Filter> {
        self.filters.get(name)
    }

    /// Returns the registered filter names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.filters.keys().map(String::as_str)
    }
}
