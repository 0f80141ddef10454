//! Variable scope stack consumed by path resolution.
//!
//! A [`Context`] is a stack of name-to-value scopes. Lookup searches
//! innermost-first, so a block-local binding shadows an outer one; an
//! unknown name yields [`Value::Absent`], never an error. The render loop
//! pushes a scope when entering a nested block and pops it on exit.
//!
//! # Example
//!
//! ```
//! use stencil::context::Context;
//! use stencil::value::Value;
//!
//! let mut context = Context::new();
//! context.set("name", Value::from("outer"));
//!
//! context.push_scope();
//! context.set("name", Value::from("inner"));
//! assert_eq!(context.lookup("name"), Value::from("inner"));
//!
//! context.pop_scope();
//! assert_eq!(context.lookup("name"), Value::from("outer"));
//! assert_eq!(context.lookup("missing"), Value::Absent);
//! ```

use indexmap::IndexMap;

use crate::value::{PropertyLookup, Value};

/// A stack of variable scopes.
#[derive(Debug, Clone, PartialEq)]
pub struct Context {
    scopes: Vec<IndexMap<String, Value>>,
}

impl Context {
    /// Creates a context with a single empty base scope.
    pub fn new() -> Self {
        Self {
            scopes: vec![IndexMap::new()],
        }
    }

    /// Binds a name in the innermost scope.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        // The base scope always exists, so last_mut cannot fail.
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name.into(), value.into());
        }
    }

    /// Looks a name up, innermost scope first.
    ///
    /// Returns a clone of the bound value, or `Value::Absent` when no
    /// scope binds the name.
    pub fn lookup(&self, name: &str) -> Value {
        for scope in self.scopes.iter().rev() {
            if let Some(value) = scope.get(name) {
                return value.clone();
            }
        }
        Value::Absent
    }

    /// Pushes a fresh empty scope.
    pub fn push_scope(&mut self) {
        self.scopes.push(IndexMap::new());
    }

    /// Pops the innermost scope. The base scope is never popped.
    pub fn pop_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    /// Returns the current scope depth.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

/// A context can itself appear as a traversable object value, so nested
/// scopes resolve through the same segment logic as host objects.
impl PropertyLookup for Context {
    fn get(&self, name: &str) -> Value {
        self.lookup(name)
    }
}
