//! Single-pass scanner.
//!
//! One forward pass over the source with at most one byte of lookahead beyond
//! the current position (two-character operators and the `.` of a fractional
//! number). Dispatch is a `match` on the current byte; each arm advances the
//! cursor and either yields a token kind or nothing (whitespace, comments,
//! broken string literals).
//!
//! The scanner owns all its cursor state; it is built for one source and
//! consumed by [`Scanner::scan_tokens`].

use lox_ir::{Literal, Span, Token, TokenKind};
use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::escape::cook_string;
use crate::lex_error::{LexError, LexErrorKind};
use crate::ScanOutput;

/// Scanner state for one pass over one source text.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    /// Byte offset where the token being scanned starts.
    start: u32,
    /// Line the token being scanned starts on.
    start_line: u32,
    /// Current 1-based line.
    line: u32,
    tokens: Vec<Token>,
    errors: Vec<LexError>,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Scanner {
            cursor: Cursor::new(source),
            start: 0,
            start_line: 1,
            line: 1,
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Scan the whole source.
    ///
    /// The returned token list always ends with exactly one `Eof` token, even
    /// for empty input.
    pub fn scan_tokens(mut self) -> ScanOutput {
        while !self.cursor.is_eof() {
            self.start = self.cursor.pos();
            self.start_line = self.line;
            if let Some((kind, literal)) = self.scan_token() {
                self.push_token(kind, literal);
            }
        }

        self.tokens.push(Token::eof(self.line, self.cursor.pos()));
        ScanOutput {
            tokens: self.tokens,
            errors: self.errors,
        }
    }

    fn push_token(&mut self, kind: TokenKind, literal: Option<Literal>) {
        let lexeme = self.cursor.slice_from(self.start);
        trace!(kind = %kind, lexeme, line = self.start_line, "token");
        let span = Span::new(self.start, self.cursor.pos());
        self.tokens
            .push(Token::new(kind, lexeme, literal, self.start_line, span));
    }

    fn error(&mut self, kind: LexErrorKind) {
        let err = LexError::new(
            kind,
            self.start_line,
            Span::new(self.start, self.cursor.pos()),
        );
        debug!(error = %err, "lexical error");
        self.errors.push(err);
    }

    /// Scan one lexeme starting at `self.start`.
    ///
    /// Returns `None` when the lexeme produces no token.
    fn scan_token(&mut self) -> Option<(TokenKind, Option<Literal>)> {
        let c = self.cursor.current();
        if !c.is_ascii() {
            // Keep the lexeme a whole character.
            self.cursor.advance_char();
            return Some((self.invalid_character(), None));
        }
        self.cursor.advance();

        let kind = match c {
            b'(' => TokenKind::LeftParen,
            b')' => TokenKind::RightParen,
            b'{' => TokenKind::LeftBrace,
            b'}' => TokenKind::RightBrace,
            b',' => TokenKind::Comma,
            b'.' => TokenKind::Dot,
            b'-' => TokenKind::Minus,
            b'+' => TokenKind::Plus,
            b';' => TokenKind::Semicolon,
            b'*' => TokenKind::Star,
            b'!' => self.with_equal(TokenKind::BangEqual, TokenKind::Bang),
            b'=' => self.with_equal(TokenKind::EqualEqual, TokenKind::Equal),
            b'<' => self.with_equal(TokenKind::LessEqual, TokenKind::Less),
            b'>' => self.with_equal(TokenKind::GreaterEqual, TokenKind::Greater),
            b'/' => {
                if self.cursor.eat(b'/') {
                    self.cursor.eat_until_newline_or_eof();
                    return None;
                }
                TokenKind::Slash
            }
            b' ' | b'\t' | b'\r' => return None,
            b'\n' => {
                self.line += 1;
                return None;
            }
            b'"' => return self.string(),
            b'0'..=b'9' => self.number(),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(),
            _ => self.invalid_character(),
        };
        Some((kind, None))
    }

    /// Second character of `!=`, `==`, `<=`, `>=`.
    fn with_equal(&mut self, two: TokenKind, one: TokenKind) -> TokenKind {
        if self.cursor.eat(b'=') {
            two
        } else {
            one
        }
    }

    /// String literal; the opening quote is already consumed.
    ///
    /// A backslash makes the next character part of the body, so `\"` does not
    /// close the string. Newlines in the body advance the line counter; the
    /// token keeps the line it started on.
    fn string(&mut self) -> Option<(TokenKind, Option<Literal>)> {
        loop {
            match self.cursor.skip_to_string_delim() {
                Some(b'"') => {
                    self.cursor.advance();
                    break;
                }
                Some(b'\\') => {
                    self.cursor.advance();
                    if self.cursor.current() == b'\n' {
                        self.line += 1;
                    }
                    self.cursor.advance_char();
                }
                Some(_) => {
                    // newline
                    self.line += 1;
                    self.cursor.advance();
                }
                None => {
                    self.error(LexErrorKind::UnterminatedString);
                    return None;
                }
            }
        }

        let end = self.cursor.pos();
        let body = self.cursor.slice(self.start + 1, end - 1);
        Some((TokenKind::String, Some(Literal::Str(cook_string(body)))))
    }

    /// Number literal; the first digit is already consumed.
    ///
    /// A `.` is only part of the number when a digit follows it, so `123.`
    /// scans as `123` then `.`.
    fn number(&mut self) -> TokenKind {
        self.cursor.eat_while(|b| b.is_ascii_digit());
        if self.cursor.current() == b'.' && self.cursor.peek().is_ascii_digit() {
            self.cursor.advance();
            self.cursor.eat_while(|b| b.is_ascii_digit());
        }
        TokenKind::Number
    }

    /// Identifier or keyword; the first character is already consumed.
    fn identifier(&mut self) -> TokenKind {
        self.cursor.eat_while(is_ident_continue);
        let text = self.cursor.slice_from(self.start);
        TokenKind::keyword(text).unwrap_or(TokenKind::Identifier)
    }

    /// Any other character, already consumed.
    fn invalid_character(&mut self) -> TokenKind {
        let ch = self
            .cursor
            .slice_from(self.start)
            .chars()
            .next()
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        self.error(LexErrorKind::InvalidCharacter { ch });
        TokenKind::Illegal
    }
}

#[inline]
fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}
