// SPDX-License-Identifier: Apache-2.0

/// A slice was requested outside the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfBounds;

/// The input text together with the current parsing position.
///
/// Both front ends (tree parser and mapper) read through this cursor, so
/// whitespace rules and end-of-input handling live in one place.
#[derive(Debug)]
pub struct SliceInputBuffer<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> SliceInputBuffer<'a> {
    /// Creates a new SliceInputBuffer with the given data.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn current_pos(&self) -> usize {
        self.pos
    }

    /// True once every byte has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Returns the byte under the cursor without consuming it.
    pub fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    /// Moves the cursor forward by `count` bytes, never past the end.
    pub fn advance(&mut self, count: usize) {
        self.pos = self.pos.saturating_add(count).min(self.data.len());
    }

    /// Skips JSON whitespace (space, tab, newline, carriage return).
    pub fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
            self.pos += 1;
        }
    }

    /// The unconsumed tail of the input.
    pub fn remaining(&self) -> &'a [u8] {
        self.data.get(self.pos..).unwrap_or(&[])
    }

    /// Input bytes `start..end`, which must lie within the input.
    pub fn slice(&self, start: usize, end: usize) -> Result<&'a [u8], OutOfBounds> {
        self.data.get(start..end).ok_or(OutOfBounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peek_does_not_move() {
        let mut buffer = SliceInputBuffer::new(b"[1]");
        assert_eq!(buffer.peek(), Some(b'['));
        assert_eq!(buffer.peek(), Some(b'['));
        buffer.advance(2);
        assert_eq!((buffer.current_pos(), buffer.peek()), (2, Some(b']')));
        buffer.advance(1);
        assert!(buffer.is_at_end());
        assert_eq!(buffer.peek(), None);
    }

    #[test]
    fn test_skip_whitespace_stops_at_content() {
        let mut buffer = SliceInputBuffer::new(b" \t\r\n  x ");
        buffer.skip_whitespace();
        assert_eq!(buffer.current_pos(), 6);
        assert_eq!(buffer.remaining(), b"x ");
    }

    #[test]
    fn test_advance_is_clamped() {
        let mut buffer = SliceInputBuffer::new(b"true");
        buffer.advance(10);
        assert!(buffer.is_at_end());
        assert_eq!(buffer.remaining(), b"");
    }

    #[test]
    fn test_slice_bounds() {
        let buffer = SliceInputBuffer::new(b"hello");
        assert_eq!(buffer.slice(1, 3), Ok(&b"el"[..]));
        assert_eq!(buffer.slice(3, 9), Err(OutOfBounds));
        assert_eq!(buffer.slice(4, 2), Err(OutOfBounds));
    }
}
