//! Diagnostic types shared by every pipeline stage.
//!
//! Each stage keeps its own structured error type (`LexError`, `ParseError`,
//! `EvalError`) and converts it into a [`Diagnostic`] when a caller wants a
//! uniform, printable report:
//!
//! - an [`ErrorCode`] for searchability
//! - the line the problem was found on
//! - where on that line (`at 'x'`, `at end`, or nothing)
//! - what went wrong

mod diagnostic;
mod error_code;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
