//! Error types for expression parsing.

use std::fmt;

/// Errors that can occur while parsing a filter expression.
///
/// Both variants are parse-time failures; evaluation never raises them.
/// Missing data during path resolution is not an error at all — it
/// resolves to `Value::Absent`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpressionError {
    /// The expression token split into zero segments.
    Empty,
    /// A filter name with no entry in the registry.
    UnknownFilter { name: String },
}

impl fmt::Display for ExpressionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpressionError::Empty => write!(f, "Empty filter expression"),
            ExpressionError::UnknownFilter { name } => {
                write!(f, "Unknown filter '{}'", name)
            }
        }
    }
}

impl std::error::Error for ExpressionError {}
