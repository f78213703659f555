//! Character cursor over COLON source text.
//!
//! A [`Cursor`] is created for a single parse call and passed by `&mut` to every
//! parse function; it tracks the byte offset together with the 1-based line and
//! column used in error messages.

use crate::Error;

pub(crate) struct Cursor<'a> {
    input: &'a str,
    position: usize,
    line: usize,
    column: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Cursor {
            input,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    pub(crate) fn peek(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    pub(crate) fn next_char(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    pub(crate) fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if ch.is_whitespace() {
                self.next_char();
            } else {
                break;
            }
        }
    }

    pub(crate) fn at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Consumes `expected` if it is the next character.
    pub(crate) fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.next_char();
            true
        } else {
            false
        }
    }

    pub(crate) fn line(&self) -> usize {
        self.line
    }

    pub(crate) fn column(&self) -> usize {
        self.column
    }

    /// The full source line the cursor is on.
    pub(crate) fn current_line(&self) -> &'a str {
        let start = self.input[..self.position]
            .rfind('\n')
            .map_or(0, |i| i + 1);
        let end = self.input[self.position..]
            .find('\n')
            .map_or(self.input.len(), |i| self.position + i);
        &self.input[start..end]
    }

    pub(crate) fn malformed(&self, msg: &str) -> Error {
        Error::malformed(self.line, self.column, msg, self.current_line())
    }

    /// Error at an earlier position, quoting that position's source line.
    pub(crate) fn malformed_at(&self, line: usize, col: usize, msg: &str) -> Error {
        let context = self.input.lines().nth(line.saturating_sub(1)).unwrap_or("");
        Error::malformed(line, col, msg, context)
    }

    pub(crate) fn recursion_limit(&self, limit: usize) -> Error {
        Error::recursion_limit(limit, self.line, self.column)
    }
}
