//! Decoding of quoted string bodies into UTF-8 bytes.

use crate::cursor::Cursor;
use crate::error::{ErrorKind, ParseError};
use crate::escape;
use crate::scratch::ScratchBuffer;

/// Decode a string body after the opening quote has been consumed.
///
/// Runs until the unescaped closing quote, which is consumed; the decoded
/// bytes are returned in the scratch buffer. Raw control characters
/// (below 0x20) must be escaped per RFC 8259.
pub(crate) fn decode_string(cursor: &mut Cursor) -> Result<ScratchBuffer, ParseError> {
    let mut scratch = ScratchBuffer::new();
    loop {
        let Some(ch) = cursor.peek() else {
            return Err(cursor.error(ErrorKind::UnterminatedString));
        };
        match ch {
            '"' => {
                cursor.advance();
                return Ok(scratch);
            }
            '\\' => {
                cursor.advance();
                decode_escape(cursor, &mut scratch)?;
            }
            '\0'..='\x1F' => {
                return Err(cursor.error(ErrorKind::UnexpectedCharacter(ch)));
            }
            _ => {
                cursor.advance();
                scratch.push_char(ch);
            }
        }
    }
}

fn decode_escape(cursor: &mut Cursor, scratch: &mut ScratchBuffer) -> Result<(), ParseError> {
    let Some(ch) = cursor.peek() else {
        return Err(cursor.error(ErrorKind::UnterminatedString));
    };
    match ch {
        '"' | '\\' | '/' => {
            cursor.advance();
            scratch.push(ch as u8);
        }
        'b' => {
            cursor.advance();
            scratch.push(0x08);
        }
        'f' => {
            cursor.advance();
            scratch.push(0x0C);
        }
        'n' => {
            cursor.advance();
            scratch.push(b'\n');
        }
        'r' => {
            cursor.advance();
            scratch.push(b'\r');
        }
        't' => {
            cursor.advance();
            scratch.push(b'\t');
        }
        'u' => {
            cursor.advance();
            scratch.push_char(escape::read_escaped_scalar(cursor)?);
        }
        other => return Err(cursor.error(ErrorKind::InvalidEscape(other))),
    }
    Ok(())
}
