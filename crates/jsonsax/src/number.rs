//! Scanning of JSON number tokens.

use crate::cursor::Cursor;
use crate::error::{ErrorKind, ParseError};
use crate::scratch::ScratchBuffer;

/// Scan one number token and convert it to an `f64`.
///
/// Grammar: `-? ( 0 | [1-9][0-9]* ) ( . [0-9]+ )? ( [eE] [+-]? [0-9]+ )?`.
/// The caller has dispatched on a leading `-` or digit; nothing is consumed
/// yet.
pub(crate) fn scan_number(cursor: &mut Cursor) -> Result<f64, ParseError> {
    let mut scratch = ScratchBuffer::new();

    if cursor.peek() == Some('-') {
        cursor.advance();
        scratch.push(b'-');
    }

    // Integer part. A leading zero must stand alone: `01` is malformed.
    match cursor.peek() {
        Some('0') => {
            cursor.advance();
            scratch.push(b'0');
            if matches!(cursor.peek(), Some(c) if c.is_ascii_digit()) {
                return Err(cursor.error(ErrorKind::InvalidNumberFormat));
            }
        }
        Some(c) if c.is_ascii_digit() => digits(cursor, &mut scratch),
        _ => return Err(cursor.error(ErrorKind::InvalidNumberFormat)),
    }

    if cursor.peek() == Some('.') {
        cursor.advance();
        scratch.push(b'.');
        require_digits(cursor, &mut scratch)?;
    }

    if matches!(cursor.peek(), Some('e' | 'E')) {
        cursor.advance();
        scratch.push(b'e');
        if let Some(sign @ ('+' | '-')) = cursor.peek() {
            cursor.advance();
            scratch.push(sign as u8);
        }
        require_digits(cursor, &mut scratch)?;
    }

    let Ok(text) = core::str::from_utf8(scratch.as_bytes()) else {
        return Err(cursor.error(ErrorKind::InvalidNumberFormat));
    };
    text.parse::<f64>()
        .map_err(|_| cursor.error(ErrorKind::InvalidNumberFormat))
}

fn digits(cursor: &mut Cursor, scratch: &mut ScratchBuffer) {
    while let Some(c) = cursor.peek() {
        if !c.is_ascii_digit() {
            break;
        }
        cursor.advance();
        scratch.push(c as u8);
    }
}

fn require_digits(cursor: &mut Cursor, scratch: &mut ScratchBuffer) -> Result<(), ParseError> {
    match cursor.peek() {
        Some(c) if c.is_ascii_digit() => {
            digits(cursor, scratch);
            Ok(())
        }
        _ => Err(cursor.error(ErrorKind::InvalidNumberFormat)),
    }
}

#[cfg(test)]
mod tests {
    use super::scan_number;
    use crate::cursor::Cursor;
    use crate::error::ErrorKind;

    fn scan(source: &str) -> Result<f64, ErrorKind> {
        let mut cursor = Cursor::new(source);
        scan_number(&mut cursor).map_err(|err| err.kind)
    }

    #[test]
    fn integers() {
        assert_eq!(scan("0"), Ok(0.0));
        assert_eq!(scan("42"), Ok(42.0));
        assert_eq!(scan("-17"), Ok(-17.0));
    }

    #[test]
    fn fractions() {
        assert_eq!(scan("3.25"), Ok(3.25));
        assert_eq!(scan("-0.5"), Ok(-0.5));
    }

    #[test]
    fn exponents() {
        assert_eq!(scan("1e3"), Ok(1000.0));
        assert_eq!(scan("1E+3"), Ok(1000.0));
        assert_eq!(scan("25e-2"), Ok(0.25));
        assert_eq!(scan("6.02e23"), Ok(6.02e23));
    }

    #[test]
    fn stops_at_the_first_non_number_character() {
        let mut cursor = Cursor::new("12.5]");
        assert_eq!(scan_number(&mut cursor).unwrap(), 12.5);
        assert_eq!(cursor.peek(), Some(']'));
    }

    #[test]
    fn leading_zero_before_digit_rejected() {
        assert_eq!(scan("01"), Err(ErrorKind::InvalidNumberFormat));
        assert_eq!(scan("-01"), Err(ErrorKind::InvalidNumberFormat));
    }

    #[test]
    fn bare_minus_rejected() {
        assert_eq!(scan("-"), Err(ErrorKind::InvalidNumberFormat));
        assert_eq!(scan("-x"), Err(ErrorKind::InvalidNumberFormat));
    }

    #[test]
    fn dangling_fraction_or_exponent_rejected() {
        assert_eq!(scan("1."), Err(ErrorKind::InvalidNumberFormat));
        assert_eq!(scan("1.e3"), Err(ErrorKind::InvalidNumberFormat));
        assert_eq!(scan("1e"), Err(ErrorKind::InvalidNumberFormat));
        assert_eq!(scan("1e+"), Err(ErrorKind::InvalidNumberFormat));
    }
}
