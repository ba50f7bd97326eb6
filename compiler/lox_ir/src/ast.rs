//! Expression tree.
//!
//! A strict tree: every child is owned by exactly one parent through a `Box`,
//! and the root is owned by whoever called the parser. Trees are immutable once
//! built and can be evaluated any number of times.
//!
//! The constructors perform no grammar validation; producing well-formed trees
//! is the parser's job.

mod operators;

pub use operators::{BinaryOp, UnaryOp};

use std::fmt;

use crate::Token;

/// An expression node.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Expr {
    /// `NUMBER`, `STRING`, `true`, `false` or `nil`.
    Literal(Token),
    /// A parenthesized sub-expression.
    Grouping(Box<Expr>),
    /// `!operand` or `-operand`.
    Unary { operator: Token, operand: Box<Expr> },
    /// `left operator right`.
    Binary {
        left: Box<Expr>,
        operator: Token,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn literal(token: Token) -> Expr {
        Expr::Literal(token)
    }

    pub fn grouping(inner: Expr) -> Expr {
        Expr::Grouping(Box::new(inner))
    }

    pub fn unary(operator: Token, operand: Expr) -> Expr {
        Expr::Unary {
            operator,
            operand: Box::new(operand),
        }
    }

    pub fn binary(left: Expr, operator: Token, right: Expr) -> Expr {
        Expr::Binary {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    /// Canonical fully-parenthesized prefix rendering.
    ///
    /// - literal: its lexeme
    /// - grouping: `(group <inner>)`
    /// - unary: `(<op> <operand>)`
    /// - binary: `(<op> <left> <right>)`
    pub fn print(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(token) => f.write_str(&token.lexeme),
            Expr::Grouping(inner) => write!(f, "(group {inner})"),
            Expr::Unary { operator, operand } => write!(f, "({} {operand})", operator.lexeme),
            Expr::Binary {
                left,
                operator,
                right,
            } => write!(f, "({} {left} {right})", operator.lexeme),
        }
    }
}
