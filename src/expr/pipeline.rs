//! Filter pipeline parsing and evaluation.

use crate::context::Context;
use crate::filters::{Filter, FilterError, FilterRegistry};
use crate::value::Value;

use super::error::ExpressionError;
use super::tokenizer::smart_split;
use super::variable::Variable;

/// A filter bound to its name and arguments at parse time.
#[derive(Debug, Clone)]
pub struct FilterInvocation {
    name: String,
    filter: Filter,
    args: Vec<String>,
}

impl FilterInvocation {
    /// Returns the filter name as written in the expression.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the raw string arguments, quote-stripped and trimmed.
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

/// A parsed expression: one variable plus an ordered chain of filters.
///
/// Immutable after parsing, so a compiled template can evaluate the same
/// expression against any number of contexts, concurrently included.
#[derive(Debug, Clone)]
pub struct FilterExpression {
    variable: Variable,
    invocations: Vec<FilterInvocation>,
}

impl FilterExpression {
    /// Parses an expression token like `user.name|upper|default:"N/A"`.
    ///
    /// Filter names are bound against the registry here, at parse time;
    /// an unknown name fails the whole parse and no partial expression
    /// is produced. An expression that splits into zero segments fails
    /// with [`ExpressionError::Empty`].
    pub fn parse(token: &str, registry: &FilterRegistry) -> Result<Self, ExpressionError> {
        let mut parts = smart_split(token, '|').into_iter();
        let raw_path = parts.next().ok_or(ExpressionError::Empty)?;
        let variable = Variable::new(&raw_path);

        let mut invocations = Vec::new();
        for spec in parts {
            let mut pieces = smart_split(&spec, ':').into_iter();
            let name = pieces.next().unwrap_or_default();
            let rest: Vec<String> = pieces.collect();

            let args = if rest.is_empty() {
                Vec::new()
            } else {
                // Only the first colon separates name from arguments;
                // later unquoted colons belong to the argument list.
                smart_split(&rest.join(":"), ',')
                    .iter()
                    .map(|arg| strip_quotes(arg))
                    .collect()
            };

            let filter = registry
                .find(&name)
                .cloned()
                .ok_or_else(|| ExpressionError::UnknownFilter { name: name.clone() })?;
            invocations.push(FilterInvocation { name, filter, args });
        }

        Ok(Self {
            variable,
            invocations,
        })
    }

    /// Returns the expression's variable.
    pub fn variable(&self) -> &Variable {
        &self.variable
    }

    /// Returns the filter invocations in application order.
    pub fn invocations(&self) -> &[FilterInvocation] {
        &self.invocations
    }

    /// Evaluates the expression against a context.
    ///
    /// Resolves the variable, then folds the value through each filter in
    /// declared order. The first failing invocation aborts evaluation and
    /// its error propagates unchanged; later filters never run.
    pub fn evaluate(&self, context: &Context) -> Result<Value, FilterError> {
        let mut value = self.variable.resolve(context);
        for invocation in &self.invocations {
            value = invocation.filter.apply(value, &invocation.args)?;
        }
        Ok(value)
    }
}

/// Strips one surrounding pair of double quotes and one of single quotes,
/// each checked independently: `"x"` and `'x'` both become `x`.
fn strip_quotes(arg: &str) -> String {
    let mut arg = arg;
    for quote in ['"', '\''] {
        if arg.len() >= 2 && arg.starts_with(quote) && arg.ends_with(quote) {
            arg = &arg[1..arg.len() - 1];
        }
    }
    arg.to_string()
}
