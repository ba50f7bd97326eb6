use crate::{evaluate, EvalError, EvalErrorKind, Value};
use lox_ir::{Expr, Literal, Span, Token, TokenKind};
use pretty_assertions::assert_eq;

fn parse_source(source: &str) -> Expr {
    let scanned = lox_lexer::scan(source);
    assert!(scanned.errors.is_empty(), "lex errors in {source:?}");
    match lox_parse::parse(&scanned.tokens) {
        Ok(expr) => expr,
        Err(err) => panic!("parse of {source:?} failed: {err}"),
    }
}

fn eval_ok(source: &str) -> Value {
    match evaluate(&parse_source(source)) {
        Ok(value) => value,
        Err(err) => panic!("evaluation of {source:?} faulted: {err}"),
    }
}

fn eval_err(source: &str) -> EvalError {
    match evaluate(&parse_source(source)) {
        Ok(value) => panic!("evaluation of {source:?} produced {value}"),
        Err(err) => err,
    }
}

#[test]
fn precedence_and_grouping() {
    assert_eq!(eval_ok("2 + 3 * 4"), Value::Number(14.0));
    assert_eq!(eval_ok("(2 + 3) * 4"), Value::Number(20.0));
    assert_eq!(eval_ok("10 - 4 - 3"), Value::Number(3.0));
    assert_eq!(eval_ok("-(1 + 2)"), Value::Number(-3.0));
}

#[test]
fn literals() {
    assert_eq!(eval_ok("12.5"), Value::Number(12.5));
    assert_eq!(eval_ok("\"hi\""), Value::string("hi"));
    assert_eq!(eval_ok("true"), Value::Bool(true));
    assert_eq!(eval_ok("false"), Value::Bool(false));
    assert_eq!(eval_ok("nil"), Value::Nil);
}

#[test]
fn strings_and_equality() {
    assert_eq!(eval_ok("\"ab\" + \"cd\""), Value::string("abcd"));
    assert_eq!(eval_ok("1 == \"1\""), Value::Bool(false));
    assert_eq!(eval_ok("nil == nil"), Value::Bool(true));
    assert_eq!(eval_ok("1 < 2 == true"), Value::Bool(true));
}

#[test]
fn truthiness_through_bang() {
    assert_eq!(eval_ok("!nil"), Value::Bool(true));
    assert_eq!(eval_ok("!0"), Value::Bool(false));
    assert_eq!(eval_ok("!!\"\""), Value::Bool(true));
}

#[test]
fn fault_is_located_at_operator() {
    let err = eval_err("1 +\n\"a\"");
    assert_eq!(
        err.kind,
        EvalErrorKind::AddOperandMismatch {
            left: "number",
            right: "string",
        }
    );
    assert_eq!(err.line, 1);
    assert_eq!(err.span, Span::new(2, 3));
}

#[test]
fn negating_a_string_faults() {
    let err = eval_err("\n-\"x\"");
    assert_eq!(err.kind, EvalErrorKind::NegateNonNumber { got: "string" });
    assert_eq!(err.line, 2);
}

#[test]
fn first_fault_wins() {
    let err = eval_err("-nil + (1 < \"a\")");
    assert_eq!(err.kind, EvalErrorKind::NegateNonNumber { got: "nil" });
}

#[test]
fn same_tree_evaluates_repeatedly() {
    let expr = parse_source("1 + 2");
    assert_eq!(evaluate(&expr), evaluate(&expr));
}

// ─── Hand-built trees ───

#[test]
fn malformed_number_literal() {
    let expr = Expr::literal(Token::synthetic(TokenKind::Number, "1.2.3"));
    match evaluate(&expr) {
        Err(err) => assert_eq!(
            err.kind,
            EvalErrorKind::MalformedNumber {
                lexeme: "1.2.3".to_string()
            }
        ),
        Ok(value) => panic!("expected fault, got {value}"),
    }
}

#[test]
fn non_literal_token_in_literal_node() {
    let expr = Expr::literal(Token::synthetic(TokenKind::Plus, "+"));
    assert!(matches!(
        evaluate(&expr).map_err(|e| e.kind),
        Err(EvalErrorKind::InvalidLiteral { .. })
    ));
}

#[test]
fn unsupported_operator_token() {
    let one = || Expr::literal(Token::synthetic(TokenKind::Number, "1"));
    let expr = Expr::binary(one(), Token::synthetic(TokenKind::And, "and"), one());
    assert!(matches!(
        evaluate(&expr).map_err(|e| e.kind),
        Err(EvalErrorKind::UnsupportedOperator { .. })
    ));

    let expr = Expr::unary(Token::synthetic(TokenKind::Plus, "+"), one());
    assert!(matches!(
        evaluate(&expr).map_err(|e| e.kind),
        Err(EvalErrorKind::UnsupportedOperator { .. })
    ));
}

#[test]
fn string_literal_payload_or_lexeme() {
    let cooked = Token::new(
        TokenKind::String,
        "\"a\\nb\"",
        Some(Literal::Str("a\nb".to_string())),
        1,
        Span::DUMMY,
    );
    assert_eq!(evaluate(&Expr::literal(cooked)), Ok(Value::string("a\nb")));

    let bare = Token::synthetic(TokenKind::String, "\"plain\"");
    assert_eq!(evaluate(&Expr::literal(bare)), Ok(Value::string("plain")));
}

#[test]
fn deep_grouping_evaluates() {
    let depth = 2_000;
    let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(eval_ok(&source), Value::Number(1.0));
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn addition_matches_f64(a in 0u32..100_000, b in 0u32..100_000) {
            let source = format!("{a} + {b}");
            prop_assert_eq!(eval_ok(&source), Value::Number(f64::from(a) + f64::from(b)));
        }

        #[test]
        fn double_negation_is_identity(n in 0u32..1_000_000) {
            let source = format!("--{n}");
            prop_assert_eq!(eval_ok(&source), Value::Number(f64::from(n)));
        }

        #[test]
        fn equality_is_reflexive_for_strings(s in "[a-z]{0,12}") {
            let source = format!("\"{s}\" == \"{s}\"");
            prop_assert_eq!(eval_ok(&source), Value::Bool(true));
        }
    }
}
