//! Decoding of `\uXXXX` escapes, including surrogate pairing.

use crate::cursor::Cursor;
use crate::error::{ErrorKind, ParseError};

fn is_high_surrogate(unit: u16) -> bool {
    (0xD800..=0xDBFF).contains(&unit)
}

fn is_low_surrogate(unit: u16) -> bool {
    (0xDC00..=0xDFFF).contains(&unit)
}

/// Read the four case-insensitive hex digits of a `\u` escape into one
/// UTF-16 code unit. The `\u` prefix must already be consumed.
fn read_code_unit(cursor: &mut Cursor) -> Result<u16, ParseError> {
    let mut unit: u16 = 0;
    for _ in 0..4 {
        let ch = cursor.require()?;
        let Some(digit) = ch.to_digit(16) else {
            return Err(cursor.error(ErrorKind::InvalidEscape(ch)));
        };
        cursor.advance();
        #[allow(clippy::cast_possible_truncation)]
        {
            unit = (unit << 4) | digit as u16;
        }
    }
    Ok(unit)
}

/// Resolve one `\u` escape into a scalar value.
///
/// A high surrogate must be immediately followed by another `\u` escape in
/// the low range; the pair combines to one codepoint above U+FFFF. Any lone
/// or misordered half fails with [`ErrorKind::InvalidSurrogatePair`].
pub(crate) fn read_escaped_scalar(cursor: &mut Cursor) -> Result<char, ParseError> {
    let unit = read_code_unit(cursor)?;
    if is_low_surrogate(unit) {
        return Err(cursor.error(ErrorKind::InvalidSurrogatePair(unit)));
    }
    if is_high_surrogate(unit) {
        if cursor.peek() != Some('\\') {
            return Err(cursor.error(ErrorKind::InvalidSurrogatePair(unit)));
        }
        cursor.advance();
        if cursor.peek() != Some('u') {
            return Err(cursor.error(ErrorKind::InvalidSurrogatePair(unit)));
        }
        cursor.advance();
        let low = read_code_unit(cursor)?;
        if !is_low_surrogate(low) {
            return Err(cursor.error(ErrorKind::InvalidSurrogatePair(low)));
        }
        let code = 0x10000 + (u32::from(unit) - 0xD800) * 0x400 + (u32::from(low) - 0xDC00);
        return char::from_u32(code).ok_or_else(|| cursor.error(ErrorKind::InvalidSurrogatePair(low)));
    }
    char::from_u32(u32::from(unit)).ok_or_else(|| cursor.error(ErrorKind::InvalidSurrogatePair(unit)))
}
