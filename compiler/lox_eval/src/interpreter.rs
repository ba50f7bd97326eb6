//! The tree walker.
//!
//! Children are evaluated left before right, and the first fault aborts the
//! whole evaluation. Each fault is located at the token of the node that
//! raised it: the operator for unary and binary nodes, the literal token for
//! literals.

use lox_ir::{BinaryOp, Expr, Literal, Token, TokenKind, UnaryOp};
use lox_stack::ensure_sufficient_stack;
use tracing::{debug, trace};

use crate::errors::{invalid_literal, malformed_number, unsupported_operator, EvalResult};
use crate::operators::evaluate_binary;
use crate::unary_operators::evaluate_unary;
use crate::Value;

/// Reduce `expr` to a value.
pub(crate) fn eval_expr(expr: &Expr) -> EvalResult {
    ensure_sufficient_stack(|| match expr {
        Expr::Literal(token) => eval_literal(token),
        Expr::Grouping(inner) => eval_expr(inner),
        Expr::Unary { operator, operand } => {
            let value = eval_expr(operand)?;
            let Some(op) = UnaryOp::from_token_kind(operator.kind) else {
                return Err(fault_at(operator, unsupported_operator(&operator.lexeme)));
            };
            trace!(op = op.as_symbol(), line = operator.line, "unary");
            evaluate_unary(value, op).map_err(|kind| fault_at(operator, kind))
        }
        Expr::Binary {
            left,
            operator,
            right,
        } => {
            let lhs = eval_expr(left)?;
            let rhs = eval_expr(right)?;
            let Some(op) = BinaryOp::from_token_kind(operator.kind) else {
                return Err(fault_at(operator, unsupported_operator(&operator.lexeme)));
            };
            trace!(op = op.as_symbol(), line = operator.line, "binary");
            evaluate_binary(lhs, rhs, op).map_err(|kind| fault_at(operator, kind))
        }
    })
}

fn eval_literal(token: &Token) -> EvalResult {
    match token.kind {
        TokenKind::Number => token
            .lexeme
            .parse::<f64>()
            .map(Value::Number)
            .map_err(|_| fault_at(token, malformed_number(&token.lexeme))),
        TokenKind::String => Ok(Value::Str(string_contents(token))),
        TokenKind::True => Ok(Value::Bool(true)),
        TokenKind::False => Ok(Value::Bool(false)),
        TokenKind::Nil => Ok(Value::Nil),
        _ => Err(fault_at(token, invalid_literal(&token.lexeme))),
    }
}

/// The cooked payload when the scanner attached one, else the lexeme minus
/// its surrounding quotes.
fn string_contents(token: &Token) -> String {
    match &token.literal {
        Some(Literal::Str(s)) => s.clone(),
        None => {
            let lexeme = token.lexeme.as_str();
            lexeme
                .strip_prefix('"')
                .and_then(|rest| rest.strip_suffix('"'))
                .unwrap_or(lexeme)
                .to_string()
        }
    }
}

#[cold]
fn fault_at(token: &Token, kind: crate::EvalErrorKind) -> crate::EvalError {
    debug!(line = token.line, %kind, "runtime fault");
    kind.at(token.line, token.span)
}
