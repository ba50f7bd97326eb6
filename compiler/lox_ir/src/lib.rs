//! Shared data types for the Lox interpreter.
//!
//! Every stage of the pipeline speaks in terms of these types:
//!
//! - [`Token`] / [`TokenKind`]: produced by `lox_lexer`, borrowed by `lox_parse`
//! - [`Expr`]: produced by `lox_parse`, walked by `lox_eval`
//! - [`Span`]: byte ranges into the source, carried for diagnostics
//!
//! The crate has no dependencies and performs no I/O.

mod ast;
mod span;
mod token;

pub use ast::{BinaryOp, Expr, UnaryOp};
pub use span::Span;
pub use token::{Literal, Token, TokenKind};
