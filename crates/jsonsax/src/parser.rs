//! The recursive-descent value parser and the `parse` entry point.

use alloc::string::ToString;

use crate::cursor::Cursor;
use crate::error::{ErrorKind, ParseError};
use crate::number;
use crate::sink::EventSink;
use crate::string;

/// Parse a complete JSON document, reporting each construct to `sink`.
///
/// The document must be fully resident in memory; the parser takes a
/// private copy and scans it exactly once. Exactly one JSON value is
/// expected — anything but whitespace after it is an error.
///
/// On the first grammar violation the recursive descent unwinds,
/// `sink.on_error` fires exactly once with the offending position, and the
/// error is returned. Events already delivered for constructs completed
/// before the violation are not retracted; callers needing all-or-nothing
/// behavior must buffer events and commit on `Ok`.
///
/// # Errors
///
/// Returns the first [`ParseError`] found, with 1-based line and column.
///
/// # Examples
///
/// ```rust
/// use jsonsax::{EventSink, parse};
///
/// #[derive(Default)]
/// struct Depth {
///     current: usize,
///     max: usize,
/// }
///
/// impl EventSink for Depth {
///     fn on_array_start(&mut self) {
///         self.current += 1;
///         self.max = self.max.max(self.current);
///     }
///     fn on_array_end(&mut self) {
///         self.current -= 1;
///     }
/// }
///
/// let mut depth = Depth::default();
/// parse("[[[]], []]", &mut depth).unwrap();
/// assert_eq!(depth.max, 3);
/// ```
pub fn parse<S: EventSink + ?Sized>(source: &str, sink: &mut S) -> Result<(), ParseError> {
    let mut cursor = Cursor::new(source);
    match parse_document(&mut cursor, sink) {
        Ok(()) => Ok(()),
        Err(err) => {
            sink.on_error(err.line, err.column, &err.kind.to_string());
            Err(err)
        }
    }
}

fn parse_document<S: EventSink + ?Sized>(
    cursor: &mut Cursor,
    sink: &mut S,
) -> Result<(), ParseError> {
    parse_value(cursor, sink)?;
    cursor.skip_whitespace();
    if let Some(ch) = cursor.peek() {
        return Err(cursor.error(ErrorKind::UnexpectedCharacter(ch)));
    }
    Ok(())
}

fn parse_value<S: EventSink + ?Sized>(cursor: &mut Cursor, sink: &mut S) -> Result<(), ParseError> {
    cursor.skip_whitespace();
    match cursor.require()? {
        '{' => parse_object(cursor, sink),
        '[' => parse_array(cursor, sink),
        '"' => {
            cursor.advance();
            let scratch = string::decode_string(cursor)?;
            sink.on_string(scratch.as_bytes());
            Ok(())
        }
        't' => {
            cursor.expect_literal("true")?;
            sink.on_boolean(true);
            Ok(())
        }
        'f' => {
            cursor.expect_literal("false")?;
            sink.on_boolean(false);
            Ok(())
        }
        'n' => {
            cursor.expect_literal("null")?;
            sink.on_null();
            Ok(())
        }
        c if c == '-' || c.is_ascii_digit() => {
            let value = number::scan_number(cursor)?;
            sink.on_number(value);
            Ok(())
        }
        other => Err(cursor.error(ErrorKind::UnexpectedCharacter(other))),
    }
}

fn parse_object<S: EventSink + ?Sized>(
    cursor: &mut Cursor,
    sink: &mut S,
) -> Result<(), ParseError> {
    cursor.expect_char('{')?;
    sink.on_object_start();
    cursor.skip_whitespace();
    if cursor.require()? == '}' {
        cursor.advance();
        sink.on_object_end();
        return Ok(());
    }
    loop {
        cursor.skip_whitespace();
        cursor.expect_char('"')?;
        let key = string::decode_string(cursor)?;
        sink.on_object_key(key.as_bytes());
        cursor.skip_whitespace();
        cursor.expect_char(':')?;
        parse_value(cursor, sink)?;
        cursor.skip_whitespace();
        match cursor.require()? {
            ',' => cursor.advance(),
            '}' => {
                cursor.advance();
                sink.on_object_end();
                return Ok(());
            }
            found => {
                return Err(cursor.error(ErrorKind::SyntaxError {
                    expected: ',',
                    found,
                }));
            }
        }
    }
}

fn parse_array<S: EventSink + ?Sized>(cursor: &mut Cursor, sink: &mut S) -> Result<(), ParseError> {
    cursor.expect_char('[')?;
    sink.on_array_start();
    cursor.skip_whitespace();
    if cursor.require()? == ']' {
        cursor.advance();
        sink.on_array_end();
        return Ok(());
    }
    loop {
        parse_value(cursor, sink)?;
        cursor.skip_whitespace();
        match cursor.require()? {
            ',' => cursor.advance(),
            ']' => {
                cursor.advance();
                sink.on_array_end();
                return Ok(());
            }
            found => {
                return Err(cursor.error(ErrorKind::SyntaxError {
                    expected: ',',
                    found,
                }));
            }
        }
    }
}
