//! Error codes for all interpreter diagnostics.
//!
//! The first digit names the phase that reported the problem.

use std::fmt;

/// Error codes for all interpreter diagnostics.
///
/// Format: E#### where the first digit indicates the phase:
/// - E0xxx: lexer errors
/// - E1xxx: parser errors
/// - E2xxx: runtime faults
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unterminated string literal
    E0001,
    /// Invalid character in source
    E0002,

    // Parser Errors (E1xxx)
    /// Expected expression
    E1001,
    /// Unclosed parenthesis
    E1002,
    /// Tokens left over after a complete expression
    E1003,
    /// Expression nests deeper than the configured limit
    E1004,

    // Runtime Errors (E2xxx)
    /// Operand type not supported by the operator
    E2001,
    /// Operator or literal token the node kind does not support
    E2002,
    /// Number literal that does not parse as a float
    E2003,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
