//! Token types for the Lox scanner.
//!
//! A [`Token`] is created once by the scanner and never mutated afterwards.
//! The parser only ever borrows tokens.

mod kind;

pub use kind::TokenKind;

use std::fmt;

use crate::Span;

/// Pre-parsed payload attached to a token.
///
/// Only string literals carry one: the text between the quotes with escapes
/// already cooked. Numbers keep their lexeme and are parsed on evaluation.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Literal {
    Str(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Str(s) => f.write_str(s),
        }
    }
}

/// A scanned token.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    /// Exact source text the token was scanned from.
    pub lexeme: String,
    pub literal: Option<Literal>,
    /// 1-based line the token starts on.
    pub line: u32,
    pub span: Span,
}

impl Token {
    pub fn new(
        kind: TokenKind,
        lexeme: impl Into<String>,
        literal: Option<Literal>,
        line: u32,
        span: Span,
    ) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            literal,
            line,
            span,
        }
    }

    /// The end-of-input marker: empty lexeme, zero-width span at `offset`.
    pub fn eof(line: u32, offset: u32) -> Self {
        Token::new(TokenKind::Eof, "", None, line, Span::point(offset))
    }

    /// Token built outside the scanner (tests, synthesized trees).
    pub fn synthetic(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Token::new(kind, lexeme, None, 1, Span::DUMMY)
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

/// Debug form: `<KIND> - <quoted-lexeme> - <literal-or-nil>`.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {:?} - ", self.kind, self.lexeme)?;
        match &self.literal {
            Some(literal) => write!(f, "{literal}"),
            None => f.write_str("nil"),
        }
    }
}

#[cfg(test)]
mod tests;
