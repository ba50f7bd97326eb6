//! Recursive descent parser for Lox expressions.
//!
//! Takes the scanner's token sequence and builds one [`Expr`] tree. The parse
//! is a single committed pass: one cursor, strictly left to right, no
//! backtracking. The first syntax error ends the parse and no partial tree is
//! returned.
//!
//! # Nesting
//!
//! Parenthesized groups and prefix operators recurse. Each recursive step runs
//! under [`lox_stack::ensure_sufficient_stack`], and [`ParseOptions::max_depth`]
//! lets callers parsing untrusted input reject deep nesting outright.

mod cursor;
mod error;
mod grammar;

pub use cursor::Cursor;
pub use error::{ParseError, ParseErrorKind};

use lox_ir::{Expr, Token};
use lox_stack::ensure_sufficient_stack;

/// Parser configuration.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum nesting of groups and prefix operators. `None` is unlimited.
    pub max_depth: Option<usize>,
}

impl ParseOptions {
    #[must_use]
    pub fn with_max_depth(mut self, limit: usize) -> Self {
        self.max_depth = Some(limit);
        self
    }
}

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    options: ParseOptions,
    /// Current nesting depth of groups and prefix operators.
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser::with_options(tokens, ParseOptions::default())
    }

    pub fn with_options(tokens: &'a [Token], options: ParseOptions) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            options,
            depth: 0,
        }
    }

    // Cursor delegation.

    #[inline]
    fn current(&self) -> &Token {
        self.cursor.current()
    }

    #[inline]
    fn previous(&self) -> &Token {
        self.cursor.previous()
    }

    #[inline]
    fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    #[inline]
    fn match_kinds(&mut self, kinds: &[lox_ir::TokenKind]) -> bool {
        self.cursor.match_kinds(kinds)
    }

    fn error_at_current(&self, kind: ParseErrorKind) -> ParseError {
        let err = ParseError::new(kind, self.current().clone());
        tracing::debug!(error = %err, "syntax error");
        err
    }

    /// Run one nesting level of the grammar.
    ///
    /// Enforces `max_depth` and grows the stack when it runs low.
    fn nested(
        &mut self,
        f: fn(&mut Self) -> Result<Expr, ParseError>,
    ) -> Result<Expr, ParseError> {
        if let Some(limit) = self.options.max_depth {
            if self.depth >= limit {
                return Err(self.error_at_current(ParseErrorKind::NestingTooDeep { limit }));
            }
        }
        self.depth += 1;
        let result = ensure_sufficient_stack(|| f(self));
        self.depth -= 1;
        result
    }

    /// Parse the whole token sequence as exactly one expression.
    pub fn parse(mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_expression()?;
        if !self.is_at_end() {
            return Err(self.error_at_current(ParseErrorKind::TrailingTokens));
        }
        Ok(expr)
    }
}

/// Parse `tokens` as one expression with default options.
pub fn parse(tokens: &[Token]) -> Result<Expr, ParseError> {
    parse_with(tokens, ParseOptions::default())
}

/// Parse `tokens` as one expression.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn parse_with(tokens: &[Token], options: ParseOptions) -> Result<Expr, ParseError> {
    Parser::with_options(tokens, options).parse()
}
