//! Expression parser and evaluator for variable paths with filter chains.
//!
//! This module handles the `variable|filter:arg` expressions that appear
//! inside template output tags, resolving dotted paths against a context
//! and threading the result through named filters.
//!
//! # Supported Syntax
//!
//! - `user.name` - dotted path through nested data
//! - `items.0` - numeric sequence index
//! - `items.first` / `items.last` / `items.count` - sequence pseudo-properties
//! - `'literal'` or `"literal"` - quoted string literal
//! - `value|upper` - filter application
//! - `value|default:"N/A"` - filter with arguments
//! - `greet:'hello, world'` - quoted arguments keep separators intact
//!
//! # Examples
//!
//! ```
//! // user.name|upper          - uppercase a nested field
//! // items.count              - number of elements
//! // name|default:'anonymous' - fallback for missing data
//! ```

pub mod error;
pub mod pipeline;
pub mod tokenizer;
pub mod variable;

pub use error::ExpressionError;
pub use pipeline::{FilterExpression, FilterInvocation};
pub use tokenizer::smart_split;
pub use variable::Variable;
