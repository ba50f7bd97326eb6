//! Syntax errors.
//!
//! Parsing stops at the first error; there is no recovery and no partial
//! tree. The error keeps the token the parser was looking at, which carries
//! the line and span for reporting.

use lox_diagnostic::{Diagnostic, ErrorCode};
use lox_ir::Token;
use std::fmt;

/// A syntax error and the token it was found at.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("[line {line}] Error {location}: {kind}", line = .token.line, location = location(.token))]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// The offending token.
    pub token: Token,
}

/// What the parser expected and didn't find.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// A token that cannot start an operand.
    UnexpectedToken,
    /// `(` expression without the closing `)`.
    UnclosedGroup,
    /// A complete expression followed by more tokens.
    TrailingTokens,
    /// Nesting beyond `ParseOptions::max_depth`.
    NestingTooDeep { limit: usize },
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::UnexpectedToken => f.write_str("Expect expression."),
            ParseErrorKind::UnclosedGroup => f.write_str("Expect ')' after expression."),
            ParseErrorKind::TrailingTokens => f.write_str("Expect end of expression."),
            ParseErrorKind::NestingTooDeep { limit } => {
                write!(f, "Expression nests deeper than {limit} levels.")
            }
        }
    }
}

/// `at end` for the end marker, `at '<lexeme>'` otherwise.
fn location(token: &Token) -> String {
    if token.is_eof() {
        "at end".to_string()
    } else {
        format!("at '{}'", token.lexeme)
    }
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, token: Token) -> Self {
        ParseError { kind, token }
    }

    /// 1-based line of the offending token.
    pub fn line(&self) -> u32 {
        self.token.line
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            ParseErrorKind::UnexpectedToken => ErrorCode::E1001,
            ParseErrorKind::UnclosedGroup => ErrorCode::E1002,
            ParseErrorKind::TrailingTokens => ErrorCode::E1003,
            ParseErrorKind::NestingTooDeep { .. } => ErrorCode::E1004,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::new(self.code(), self.line(), self.message())
            .at(location(&self.token))
            .with_span(self.token.span)
    }
}

#[cfg(test)]
mod tests;
