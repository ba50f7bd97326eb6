//! The three ways a run can fail.
//!
//! Each variant wraps the stage's own error untouched; rendering goes through
//! [`Diagnostic`] so every stage prints the same way.

use lox_diagnostic::Diagnostic;
use lox_eval::EvalError;
use lox_lexer::LexError;
use lox_parse::ParseError;
use std::fmt;

/// A failed run, by stage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Problem {
    /// Every lexical error found in the source; parsing was not attempted.
    Lex(Vec<LexError>),
    Syntax(ParseError),
    Runtime(EvalError),
}

impl Problem {
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        match self {
            Problem::Lex(errors) => errors.iter().map(LexError::to_diagnostic).collect(),
            Problem::Syntax(err) => vec![err.to_diagnostic()],
            Problem::Runtime(err) => vec![err.to_diagnostic()],
        }
    }

    pub fn is_lex(&self) -> bool {
        matches!(self, Problem::Lex(_))
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self, Problem::Syntax(_))
    }

    pub fn is_runtime(&self) -> bool {
        matches!(self, Problem::Runtime(_))
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, diag) in self.diagnostics().iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{diag}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Problem {}

impl From<ParseError> for Problem {
    fn from(err: ParseError) -> Self {
        Problem::Syntax(err)
    }
}

impl From<EvalError> for Problem {
    fn from(err: EvalError) -> Self {
        Problem::Runtime(err)
    }
}
