//! The printable diagnostic record.

use lox_ir::Span;
use std::fmt;

use crate::ErrorCode;

/// A single reported problem.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    pub code: ErrorCode,
    /// 1-based source line.
    pub line: u32,
    /// Location hint such as `at ')'` or `at end`; empty when there is none.
    pub location: String,
    pub message: String,
    pub span: Option<Span>,
}

impl Diagnostic {
    pub fn new(code: ErrorCode, line: u32, message: impl Into<String>) -> Self {
        Diagnostic {
            code,
            line,
            location: String::new(),
            message: message.into(),
            span: None,
        }
    }

    #[must_use]
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }
}

/// `[line N] Error <location>: <message>`, or `[line N] Error: <message>`
/// without a location. The code is not rendered.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}] Error", self.line)?;
        if !self.location.is_empty() {
            write!(f, " {}", self.location)?;
        }
        write!(f, ": {}", self.message)
    }
}
