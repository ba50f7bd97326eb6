//! Token cursor for navigating the token stream.
//!
//! Moves strictly left to right and never backs up past a consumed token.

use lox_ir::{Token, TokenKind};

/// Cursor over a borrowed token sequence.
///
/// A well-formed sequence ends with `Eof`. If the caller hands over one that
/// doesn't (or an empty one), the cursor behaves as though an `Eof` followed
/// the last token, so reads never go out of range.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
    /// Stand-in end marker for sequences that lack one.
    eof: Token,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        let eof = match tokens.last() {
            Some(last) => Token::eof(last.line, last.span.end),
            None => Token::eof(1, 0),
        };
        Cursor {
            tokens,
            pos: 0,
            eof,
        }
    }

    /// The token under the cursor.
    #[inline]
    pub fn current(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&self.eof)
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    /// The most recently consumed token, or the current one if nothing has
    /// been consumed yet.
    pub fn previous(&self) -> &Token {
        match self.pos.checked_sub(1) {
            Some(prev) => self.tokens.get(prev).unwrap_or(&self.eof),
            None => self.current(),
        }
    }

    /// True iff the current token is the end marker.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    /// Non-consuming test of the current token's kind. Always false at the end
    /// of input.
    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        !self.is_at_end() && self.current_kind() == kind
    }

    /// Return the current token and step past it, unless it is the end
    /// marker.
    pub fn advance(&mut self) -> &Token {
        let at = self.pos;
        if !self.is_at_end() {
            self.pos += 1;
        }
        self.tokens.get(at).unwrap_or(&self.eof)
    }

    /// Consume the current token if its kind is one of `kinds`.
    pub fn match_kinds(&mut self, kinds: &[TokenKind]) -> bool {
        if kinds.iter().any(|&kind| self.check(kind)) {
            self.advance();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests;
