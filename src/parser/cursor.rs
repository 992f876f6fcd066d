use crate::error::{ParseError, ParseErrorKind};

/// Byte-position cursor over a candidate span. Cheap to copy for lookahead
/// probes; `pos` always sits on a char boundary.
#[derive(Clone, Copy)]
pub(crate) struct Cursor<'i> {
    s: &'i str,
    pos: usize,
}

impl<'i> Cursor<'i> {
    pub(crate) fn new(s: &'i str) -> Self {
        Self { s, pos: 0 }
    }

    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub(crate) fn rest(&self) -> &'i str {
        &self.s[self.pos..]
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.pos >= self.s.len()
    }

    #[inline]
    pub(crate) fn peek_byte(&self) -> Option<u8> {
        self.s.as_bytes().get(self.pos).copied()
    }

    #[inline]
    pub(crate) fn peek_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Advance one char and return it.
    #[inline]
    pub(crate) fn bump(&mut self) -> Option<char> {
        let c = self.peek_char()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Advance `n` bytes. The caller must keep `pos` on a char boundary.
    #[inline]
    pub(crate) fn advance(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.s.len());
    }

    /// Consume `b` if it is the next byte.
    #[inline]
    pub(crate) fn eat_byte(&mut self, b: u8) -> bool {
        if self.peek_byte() == Some(b) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    #[inline]
    pub(crate) fn starts_with(&self, pat: &str) -> bool {
        self.rest().starts_with(pat)
    }

    /// A ParseError anchored at the current position.
    #[inline]
    pub(crate) fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, self.pos)
    }
}
