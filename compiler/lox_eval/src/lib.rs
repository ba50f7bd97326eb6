//! Tree-walking evaluator for Lox expressions.
//!
//! [`evaluate`] reduces an [`Expr`] to a [`Value`] or the first
//! [`EvalError`]. Evaluation is pure: no environment, no output, and the tree
//! is only borrowed, so the same tree can be evaluated any number of times.
//!
//! # Module Structure
//!
//! - `value`: the runtime [`Value`] sum type
//! - `operators` / `unary_operators`: operator dispatch on evaluated operands
//! - `interpreter`: the recursive walk and literal decoding
//! - `errors`: [`EvalError`], [`EvalErrorKind`] and their factories

mod errors;
mod interpreter;
mod operators;
mod unary_operators;
mod value;

pub use errors::{EvalError, EvalErrorKind, EvalResult, OpResult};
pub use operators::evaluate_binary;
pub use unary_operators::evaluate_unary;
pub use value::Value;

use lox_ir::Expr;

/// Evaluate `expr`.
#[tracing::instrument(level = "debug", skip_all)]
pub fn evaluate(expr: &Expr) -> EvalResult {
    let result = interpreter::eval_expr(expr);
    if let Ok(value) = &result {
        tracing::debug!(kind = value.type_name(), "evaluation complete");
    }
    result
}

#[cfg(test)]
mod tests;
