//! Byte cursor over the source text.
//!
//! Reads past the end return `0`, so lookahead never needs a bounds check at
//! the call site. Because the source may legitimately contain a NUL byte,
//! end-of-input is decided by position ([`Cursor::is_eof`]), never by the byte
//! value alone.

/// Forward-only cursor over a `&str`.
///
/// [`Copy`], so the scanner can take a cheap snapshot when it needs one.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a> {
    source: &'a str,
    pos: u32,
    /// Source length, saturated to `u32::MAX` for inputs over 4 GiB.
    len: u32,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Cursor {
            source,
            pos: 0,
            len: u32::try_from(source.len()).unwrap_or(u32::MAX),
        }
    }

    #[inline]
    fn byte_at(&self, pos: u32) -> u8 {
        if pos >= self.len {
            return 0;
        }
        self.source.as_bytes().get(pos as usize).copied().unwrap_or(0)
    }

    /// Byte at the current position, `0` at end of input.
    #[inline]
    pub(crate) fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Byte one past the current position, `0` past end of input.
    #[inline]
    pub(crate) fn peek(&self) -> u8 {
        self.byte_at(self.pos.saturating_add(1))
    }

    #[inline]
    pub(crate) fn advance(&mut self) {
        if self.pos < self.len {
            self.pos += 1;
        }
    }

    /// Advance past one full UTF-8 character.
    pub(crate) fn advance_char(&mut self) {
        let width = match self.current() {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        };
        self.pos = self.pos.saturating_add(width).min(self.len);
    }

    /// Consume the current byte if it equals `expected`.
    #[inline]
    pub(crate) fn eat(&mut self, expected: u8) -> bool {
        if !self.is_eof() && self.current() == expected {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.len
    }

    #[inline]
    pub(crate) fn pos(&self) -> u32 {
        self.pos
    }

    /// Source text in `start..end`.
    ///
    /// Token boundaries always fall on character boundaries, so this only
    /// returns `""` for a malformed range.
    pub(crate) fn slice(&self, start: u32, end: u32) -> &'a str {
        self.source
            .get(start as usize..end as usize)
            .unwrap_or_default()
    }

    pub(crate) fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` holds for the current byte (and not at EOF).
    #[inline]
    pub(crate) fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.pos += 1;
        }
    }

    fn remaining(&self) -> &'a [u8] {
        self.source
            .as_bytes()
            .get(self.pos as usize..self.len as usize)
            .unwrap_or_default()
    }

    /// Advance to the next `\n` (left unconsumed) or to EOF.
    ///
    /// Used to skip line comment bodies.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset < remaining().len() <= len, which fits in u32"
    )]
    pub(crate) fn eat_until_newline_or_eof(&mut self) {
        match memchr::memchr(b'\n', self.remaining()) {
            Some(offset) => self.pos += offset as u32,
            None => self.pos = self.len,
        }
    }

    /// Advance past plain string content to the next byte the string
    /// scanner must look at: `"`, `\` or `\n`.
    ///
    /// Returns that byte with the cursor positioned on it, or `None` with the
    /// cursor at EOF.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset < remaining().len() <= len, which fits in u32"
    )]
    pub(crate) fn skip_to_string_delim(&mut self) -> Option<u8> {
        match memchr::memchr3(b'"', b'\\', b'\n', self.remaining()) {
            Some(offset) => {
                self.pos += offset as u32;
                Some(self.current())
            }
            None => {
                self.pos = self.len;
                None
            }
        }
    }
}
