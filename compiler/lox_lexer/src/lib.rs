//! Scanner for Lox: source text to tokens.
//!
//! [`scan`] is the entry point. It never fails: lexical problems are
//! collected in [`ScanOutput::errors`] while scanning continues, and the token
//! list always ends with a single `Eof` token.
//!
//! # Module Structure
//!
//! - `cursor`: byte cursor with memchr-accelerated skipping
//! - `scanner`: the byte dispatch and per-lexeme rules
//! - `escape`: cooking of string literal escapes
//! - `lex_error`: [`LexError`] and its diagnostic conversion

mod cursor;
mod escape;
mod lex_error;
mod scanner;

pub use lex_error::{LexError, LexErrorKind};
pub use scanner::Scanner;

use lox_ir::Token;

/// Tokens and lexical errors from one scan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanOutput {
    /// Tokens in source order, terminated by exactly one `Eof`.
    pub tokens: Vec<Token>,
    /// Lexical errors in source order.
    pub errors: Vec<LexError>,
}

impl ScanOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Scan `source` into tokens.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn scan(source: &str) -> ScanOutput {
    let output = Scanner::new(source).scan_tokens();
    tracing::debug!(
        tokens = output.tokens.len(),
        errors = output.errors.len(),
        "scan complete"
    );
    output
}
