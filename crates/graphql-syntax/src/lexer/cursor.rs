/// Character cursor over the source, tracking absolute byte offsets.
///
/// A cursor can start at any byte offset, which is how the parser re-lexes
/// from the end of its current token.
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'a> {
    source: &'a str,
    offset: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(source: &'a str, offset: usize) -> Cursor<'a> {
        Cursor { source, offset }
    }

    /// Byte offset of the next unread character.
    pub(crate) fn offset(&self) -> usize {
        self.offset
    }

    /// The unread remainder of the source.
    pub(crate) fn rest(&self) -> &'a str {
        &self.source[self.offset..]
    }

    /// Peeks the next character without consuming it.
    pub(crate) fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consumes and returns the next character.
    pub(crate) fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.offset += c.len_utf8();
        Some(c)
    }

    /// Consumes the next character if it is `c`.
    pub(crate) fn eat(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.offset += c.len_utf8();
            true
        } else {
            false
        }
    }

    /// The consumed source between `start` and the cursor position.
    pub(crate) fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.offset]
    }
}
