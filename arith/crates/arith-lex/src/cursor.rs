//! Character cursor for traversing an input line.
//!
//! This module provides the `Cursor` struct which maintains the scan offset
//! while iterating through a line of text. Offsets are byte offsets, and the
//! cursor always moves by whole characters so slicing never splits a UTF-8
//! sequence.

/// A cursor for traversing a line character by character.
///
/// # Example
///
/// ```
/// use arith_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("1+2");
///
/// assert_eq!(cursor.current_char(), '1');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), '+');
/// ```
pub struct Cursor<'a> {
    /// The line being traversed.
    source: &'a str,

    /// Current byte position in the line.
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
        }
    }

    /// Returns the character at the cursor position.
    ///
    /// Returns '\0' (null character) if at the end of the line.
    ///
    /// # Example
    ///
    /// ```
    /// use arith_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("");
    /// assert_eq!(cursor.current_char(), '\0');
    /// ```
    #[inline]
    pub fn current_char(&self) -> char {
        if self.position >= self.source.len() {
            return '\0';
        }

        // Fast path for ASCII (most common case)
        let b = self.source.as_bytes()[self.position];
        if b < 128 {
            return b as char;
        }

        // Slow path for UTF-8
        self.source[self.position..].chars().next().unwrap_or('\0')
    }

    /// Advances past the current character. Does nothing at the end.
    #[inline]
    pub fn advance(&mut self) {
        if self.position >= self.source.len() {
            return;
        }

        let b = self.source.as_bytes()[self.position];
        if b < 128 {
            self.position += 1;
        } else if let Some(c) = self.source[self.position..].chars().next() {
            self.position += c.len_utf8();
        }
    }

    /// Advances while `predicate` holds for the current character.
    ///
    /// # Example
    ///
    /// ```
    /// use arith_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("123+");
    /// cursor.eat_while(|c| c.is_ascii_digit());
    /// assert_eq!(cursor.current_char(), '+');
    /// ```
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while !self.is_at_end() && predicate(self.current_char()) {
            self.advance();
        }
    }

    /// Returns true if the cursor is at the end of the line.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current byte position.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the text between `start` and the current position.
    ///
    /// `start` must be a position previously returned by [`Cursor::position`].
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the full line.
    pub fn source(&self) -> &'a str {
        self.source
    }
}
