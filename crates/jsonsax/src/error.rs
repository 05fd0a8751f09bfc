use thiserror::Error;

/// The kind of grammar violation that aborted a parse.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input ran out in the middle of a construct.
    #[error("unexpected end of input")]
    UnexpectedEnd,
    /// A character no JSON value can start with, or a raw control character
    /// inside a string.
    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(char),
    /// A required literal character or separator was not found.
    #[error("expected '{expected}', found '{found}'")]
    SyntaxError {
        /// The character the grammar required at this position.
        expected: char,
        /// The character actually present.
        found: char,
    },
    /// Input ended before the closing quote of a string.
    #[error("unterminated string")]
    UnterminatedString,
    /// An unknown escape character, or a non-hex digit in a `\u` escape.
    #[error("invalid escape sequence '\\{0}'")]
    InvalidEscape(char),
    /// A `\u` surrogate half without its partner.
    #[error("unpaired surrogate \\u{0:04X}")]
    InvalidSurrogatePair(u16),
    /// A number token violating the JSON number grammar, e.g. `01` or `1.`.
    #[error("invalid number format")]
    InvalidNumberFormat,
}

/// The first grammar violation found in a document, with the 1-based
/// position of the offending character.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{kind} at {line}:{column}")]
pub struct ParseError {
    /// What went wrong.
    pub kind: ErrorKind,
    /// 1-based line of the offending character.
    pub line: usize,
    /// 1-based column of the offending character, counted per line.
    pub column: usize,
}
