//! Scan position over a private copy of the source text.

use alloc::boxed::Box;

use crate::error::{ErrorKind, ParseError};

/// Tracks the scan position within an owned copy of the source.
///
/// `line` and `column` are 1-based and always describe the character that
/// [`Cursor::peek`] would return next.
#[derive(Debug)]
pub(crate) struct Cursor {
    source: Box<[u8]>,
    pos: usize,
    line: usize,
    column: usize,
}

impl Cursor {
    pub(crate) fn new(source: &str) -> Self {
        Self {
            source: source.as_bytes().into(),
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Decode the next scalar without consuming it.
    pub(crate) fn peek(&self) -> Option<char> {
        let (ch, len) = bstr::decode_utf8(&self.source[self.pos..]);
        if len == 0 {
            return None;
        }
        Some(ch.unwrap_or('\u{FFFD}'))
    }

    /// Like [`Cursor::peek`], but end of input is a grammar violation here.
    pub(crate) fn require(&self) -> Result<char, ParseError> {
        self.peek()
            .ok_or_else(|| self.error(ErrorKind::UnexpectedEnd))
    }

    /// Consume one character, updating the line/column bookkeeping.
    ///
    /// A line feed moves to the next line and rewinds the column; a carriage
    /// return only rewinds the column, so a CRLF pair counts as one line.
    pub(crate) fn advance(&mut self) {
        let (ch, len) = bstr::decode_utf8(&self.source[self.pos..]);
        if len == 0 {
            return;
        }
        self.pos += len;
        match ch {
            Some('\n') => {
                self.line += 1;
                self.column = 1;
            }
            Some('\r') => self.column = 1,
            _ => self.column += 1,
        }
    }

    /// Consume one character, requiring it to equal `expected`.
    pub(crate) fn expect_char(&mut self, expected: char) -> Result<(), ParseError> {
        let found = self.require()?;
        if found == expected {
            self.advance();
            Ok(())
        } else {
            Err(self.error(ErrorKind::SyntaxError { expected, found }))
        }
    }

    /// Match `literal` character by character; used for `true`, `false`,
    /// and `null`.
    pub(crate) fn expect_literal(&mut self, literal: &str) -> Result<(), ParseError> {
        for expected in literal.chars() {
            self.expect_char(expected)?;
        }
        Ok(())
    }

    /// Skip the four whitespace characters JSON permits between tokens.
    pub(crate) fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(' ' | '\t' | '\n' | '\r')) {
            self.advance();
        }
    }

    /// Build a [`ParseError`] pointing at the character about to be read.
    pub(crate) fn error(&self, kind: ErrorKind) -> ParseError {
        ParseError {
            kind,
            line: self.line,
            column: self.column,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Cursor;
    use crate::error::ErrorKind;

    #[test]
    fn tracks_columns_per_character() {
        let mut cursor = Cursor::new("abc");
        assert_eq!(cursor.peek(), Some('a'));
        cursor.advance();
        assert_eq!(cursor.peek(), Some('b'));
        cursor.advance();
        let err = cursor.error(ErrorKind::UnexpectedEnd);
        assert_eq!((err.line, err.column), (1, 3));
    }

    #[test]
    fn line_feed_starts_a_new_line() {
        let mut cursor = Cursor::new("a\nb");
        cursor.advance();
        cursor.advance();
        let err = cursor.error(ErrorKind::UnexpectedEnd);
        assert_eq!((err.line, err.column), (2, 1));
        cursor.advance();
        let err = cursor.error(ErrorKind::UnexpectedEnd);
        assert_eq!((err.line, err.column), (2, 2));
    }

    #[test]
    fn crlf_counts_as_one_line() {
        let mut cursor = Cursor::new("a\r\nb");
        cursor.advance();
        cursor.advance(); // CR rewinds the column only
        cursor.advance(); // LF starts line 2
        let err = cursor.error(ErrorKind::UnexpectedEnd);
        assert_eq!((err.line, err.column), (2, 1));
    }

    #[test]
    fn multibyte_scalars_count_as_one_column() {
        let mut cursor = Cursor::new("é\"");
        assert_eq!(cursor.peek(), Some('é'));
        cursor.advance();
        assert_eq!(cursor.peek(), Some('"'));
        let err = cursor.error(ErrorKind::UnexpectedEnd);
        assert_eq!((err.line, err.column), (1, 2));
    }

    #[test]
    fn expect_char_reports_expected_and_found() {
        let mut cursor = Cursor::new("x");
        let err = cursor.expect_char(':').unwrap_err();
        assert_eq!(
            err.kind,
            ErrorKind::SyntaxError {
                expected: ':',
                found: 'x'
            }
        );
        assert_eq!((err.line, err.column), (1, 1));
    }

    #[test]
    fn expect_literal_consumes_the_whole_word() {
        let mut cursor = Cursor::new("nullx");
        cursor.expect_literal("null").unwrap();
        assert_eq!(cursor.peek(), Some('x'));
    }

    #[test]
    fn expect_literal_fails_at_the_mismatch() {
        let mut cursor = Cursor::new("nuxl");
        let err = cursor.expect_literal("null").unwrap_err();
        assert_eq!(
            err.kind,
            ErrorKind::SyntaxError {
                expected: 'l',
                found: 'x'
            }
        );
        assert_eq!((err.line, err.column), (1, 3));
    }

    #[test]
    fn require_fails_at_end_of_input() {
        let cursor = Cursor::new("");
        let err = cursor.require().unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnexpectedEnd);
        assert_eq!((err.line, err.column), (1, 1));
    }

    #[test]
    fn skip_whitespace_stops_at_tokens() {
        let mut cursor = Cursor::new(" \t\r\n {");
        cursor.skip_whitespace();
        assert_eq!(cursor.peek(), Some('{'));
    }
}
