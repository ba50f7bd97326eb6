//! Runtime errors.
//!
//! Operator implementations report an [`EvalErrorKind`] through the `#[cold]`
//! factories below; the tree walker attaches the line of the token that
//! produced the fault and hands back an [`EvalError`].

use lox_diagnostic::{Diagnostic, ErrorCode};
use lox_ir::Span;
use std::fmt;

/// Result of evaluating an expression.
pub type EvalResult = Result<crate::Value, EvalError>;

/// Result of applying an operator, before a line is known.
pub type OpResult = Result<crate::Value, EvalErrorKind>;

/// A runtime fault located at the token that caused it.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}\n[line {line}]")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// 1-based line of the operator or literal token.
    pub line: u32,
    pub span: Span,
}

/// What went wrong at runtime.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum EvalErrorKind {
    /// Unary `-` on something that isn't a number.
    NegateNonNumber { got: &'static str },
    /// `+` with operands that are neither both numbers nor both strings.
    AddOperandMismatch {
        left: &'static str,
        right: &'static str,
    },
    /// Arithmetic or ordering operator with a non-number operand.
    NumberOperandsRequired {
        op: &'static str,
        left: &'static str,
        right: &'static str,
    },
    /// A `NUMBER` lexeme that doesn't parse as a float.
    MalformedNumber { lexeme: String },
    /// A literal node whose token isn't a literal kind.
    InvalidLiteral { lexeme: String },
    /// An operator node whose token isn't an operator of that arity.
    UnsupportedOperator { lexeme: String },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalErrorKind::NegateNonNumber { got } => {
                write!(f, "Operand must be a number, got {got}.")
            }
            EvalErrorKind::AddOperandMismatch { left, right } => write!(
                f,
                "Operands must be two numbers or two strings, got {left} and {right}."
            ),
            EvalErrorKind::NumberOperandsRequired { op, left, right } => write!(
                f,
                "Operands of '{op}' must be numbers, got {left} and {right}."
            ),
            EvalErrorKind::MalformedNumber { lexeme } => {
                write!(f, "Malformed number literal '{lexeme}'.")
            }
            EvalErrorKind::InvalidLiteral { lexeme } => {
                write!(f, "'{lexeme}' is not a literal.")
            }
            EvalErrorKind::UnsupportedOperator { lexeme } => {
                write!(f, "Unsupported operator '{lexeme}'.")
            }
        }
    }
}

impl EvalErrorKind {
    /// Locate this fault at `line`/`span`.
    pub fn at(self, line: u32, span: Span) -> EvalError {
        EvalError {
            kind: self,
            line,
            span,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            EvalErrorKind::NegateNonNumber { .. }
            | EvalErrorKind::AddOperandMismatch { .. }
            | EvalErrorKind::NumberOperandsRequired { .. } => ErrorCode::E2001,
            EvalErrorKind::InvalidLiteral { .. } | EvalErrorKind::UnsupportedOperator { .. } => {
                ErrorCode::E2002
            }
            EvalErrorKind::MalformedNumber { .. } => ErrorCode::E2003,
        }
    }
}

impl EvalError {
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::new(self.code(), self.line, self.message()).with_span(self.span)
    }
}

// ─── Factories ───

#[cold]
pub fn negate_non_number(got: &'static str) -> EvalErrorKind {
    EvalErrorKind::NegateNonNumber { got }
}

#[cold]
pub fn add_operand_mismatch(left: &'static str, right: &'static str) -> EvalErrorKind {
    EvalErrorKind::AddOperandMismatch { left, right }
}

#[cold]
pub fn number_operands_required(
    op: &'static str,
    left: &'static str,
    right: &'static str,
) -> EvalErrorKind {
    EvalErrorKind::NumberOperandsRequired { op, left, right }
}

#[cold]
pub fn malformed_number(lexeme: &str) -> EvalErrorKind {
    EvalErrorKind::MalformedNumber {
        lexeme: lexeme.to_string(),
    }
}

#[cold]
pub fn invalid_literal(lexeme: &str) -> EvalErrorKind {
    EvalErrorKind::InvalidLiteral {
        lexeme: lexeme.to_string(),
    }
}

#[cold]
pub fn unsupported_operator(lexeme: &str) -> EvalErrorKind {
    EvalErrorKind::UnsupportedOperator {
        lexeme: lexeme.to_string(),
    }
}
