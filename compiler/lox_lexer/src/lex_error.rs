//! Lexical errors.
//!
//! Lexical errors never stop the scanner: each one is recorded and scanning
//! resumes with the next character. Whether any of them should prevent parsing
//! is up to the caller.

use lox_diagnostic::{Diagnostic, ErrorCode};
use lox_ir::Span;
use std::fmt;

/// A recorded lexical error.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("Line {line}: {kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    /// 1-based line the offending text starts on.
    pub line: u32,
    pub span: Span,
}

/// What went wrong.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// End of input reached before the closing `"`.
    UnterminatedString,
    /// A character that starts no token.
    InvalidCharacter { ch: char },
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexErrorKind::UnterminatedString => f.write_str("Unterminated string."),
            LexErrorKind::InvalidCharacter { .. } => f.write_str("Invalid character."),
        }
    }
}

impl LexError {
    pub fn new(kind: LexErrorKind, line: u32, span: Span) -> Self {
        LexError { kind, line, span }
    }

    /// Human-readable message without the line prefix.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::UnterminatedString => ErrorCode::E0001,
            LexErrorKind::InvalidCharacter { .. } => ErrorCode::E0002,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::new(self.code(), self.line, self.message()).with_span(self.span);
        match self.kind {
            LexErrorKind::InvalidCharacter { ch } => diag.at(format!("at {ch:?}")),
            LexErrorKind::UnterminatedString => diag,
        }
    }
}

#[cfg(test)]
mod tests;
