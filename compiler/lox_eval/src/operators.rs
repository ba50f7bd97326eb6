//! Binary operator implementations.
//!
//! Dispatch is on the `(left, right)` pair. Equality is defined for every pair
//! of values; everything else requires numbers, except `+` which also joins
//! two strings.

use lox_ir::BinaryOp;

use crate::errors::{add_operand_mismatch, number_operands_required, OpResult};
use crate::Value;

/// Apply `op` to two already-evaluated operands.
#[allow(
    clippy::needless_pass_by_value,
    reason = "operands are consumed from the tree walker; borrowing would force clones there"
)]
pub fn evaluate_binary(left: Value, right: Value, op: BinaryOp) -> OpResult {
    match (&left, &right) {
        (Value::Number(a), Value::Number(b)) => Ok(eval_number_binary(*a, *b, op)),
        _ if op == BinaryOp::Eq => Ok(Value::Bool(left == right)),
        _ if op == BinaryOp::NotEq => Ok(Value::Bool(left != right)),
        (Value::Str(a), Value::Str(b)) if op == BinaryOp::Add => {
            let mut joined = String::with_capacity(a.len() + b.len());
            joined.push_str(a);
            joined.push_str(b);
            Ok(Value::Str(joined))
        }
        _ if op == BinaryOp::Add => Err(add_operand_mismatch(left.type_name(), right.type_name())),
        _ => Err(number_operands_required(
            op.as_symbol(),
            left.type_name(),
            right.type_name(),
        )),
    }
}

/// IEEE-754 arithmetic: division by zero yields an infinity or NaN.
#[allow(clippy::float_cmp, reason = "Lox number equality is exact IEEE comparison")]
fn eval_number_binary(a: f64, b: f64, op: BinaryOp) -> Value {
    match op {
        BinaryOp::Add => Value::Number(a + b),
        BinaryOp::Sub => Value::Number(a - b),
        BinaryOp::Mul => Value::Number(a * b),
        BinaryOp::Div => Value::Number(a / b),
        BinaryOp::Gt => Value::Bool(a > b),
        BinaryOp::GtEq => Value::Bool(a >= b),
        BinaryOp::Lt => Value::Bool(a < b),
        BinaryOp::LtEq => Value::Bool(a <= b),
        BinaryOp::Eq => Value::Bool(a == b),
        BinaryOp::NotEq => Value::Bool(a != b),
    }
}
