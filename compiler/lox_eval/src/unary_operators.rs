//! Unary operator implementations.

use lox_ir::UnaryOp;

use crate::errors::{negate_non_number, OpResult};
use crate::Value;

/// Apply `op` to an already-evaluated operand.
///
/// `!` works on any value by truthiness; `-` requires a number.
#[allow(
    clippy::needless_pass_by_value,
    reason = "operand is consumed from the tree walker"
)]
pub fn evaluate_unary(value: Value, op: UnaryOp) -> OpResult {
    match (&value, op) {
        (_, UnaryOp::Not) => Ok(Value::Bool(!value.is_truthy())),
        (Value::Number(n), UnaryOp::Neg) => Ok(Value::Number(-n)),
        (_, UnaryOp::Neg) => Err(negate_non_number(value.type_name())),
    }
}
