use crate::unary_operators::evaluate_unary;
use crate::{EvalErrorKind, Value};
use lox_ir::UnaryOp;

mod negation {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn number() {
        assert_eq!(
            evaluate_unary(Value::Number(5.0), UnaryOp::Neg),
            Ok(Value::Number(-5.0))
        );
    }

    #[test]
    fn negative_number() {
        assert_eq!(
            evaluate_unary(Value::Number(-2.5), UnaryOp::Neg),
            Ok(Value::Number(2.5))
        );
    }

    #[test]
    fn string_faults() {
        assert_eq!(
            evaluate_unary(Value::string("a"), UnaryOp::Neg),
            Err(EvalErrorKind::NegateNonNumber { got: "string" })
        );
    }

    #[test]
    fn nil_faults() {
        assert_eq!(
            evaluate_unary(Value::Nil, UnaryOp::Neg),
            Err(EvalErrorKind::NegateNonNumber { got: "nil" })
        );
    }

    #[test]
    fn bool_faults() {
        assert!(evaluate_unary(Value::Bool(true), UnaryOp::Neg).is_err());
    }
}

mod logical_not {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn falsy_values() {
        assert_eq!(evaluate_unary(Value::Nil, UnaryOp::Not), Ok(Value::Bool(true)));
        assert_eq!(
            evaluate_unary(Value::Bool(false), UnaryOp::Not),
            Ok(Value::Bool(true))
        );
    }

    #[test]
    fn zero_and_empty_string_are_truthy() {
        assert_eq!(
            evaluate_unary(Value::Number(0.0), UnaryOp::Not),
            Ok(Value::Bool(false))
        );
        assert_eq!(
            evaluate_unary(Value::string(""), UnaryOp::Not),
            Ok(Value::Bool(false))
        );
    }
}
