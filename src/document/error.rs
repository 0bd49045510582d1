//! Error types for JSON lexing and parsing.

use std::fmt;
use std::str::Utf8Error;

/// Errors that can occur while tokenizing or parsing a JSON document.
///
/// All variants are terminal for the parse call that produced them; no
/// partial tree is ever returned.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Input ended inside a string literal.
    UnterminatedString { position: usize },
    /// Input ended inside a block comment.
    UnterminatedComment { position: usize },
    /// Malformed escape sequence inside a string literal.
    InvalidEscape { position: usize, found: String },
    /// Malformed number literal (leading zero, missing fraction or exponent
    /// digits, and so on).
    InvalidNumber { position: usize, text: String },
    /// A token that does not fit the grammar at this point.
    UnexpectedToken {
        position: usize,
        found: String,
        expected: String,
    },
    /// The document's top-level value is not an object or an array.
    InvalidRoot { found: String },
    /// Non-whitespace input remained after the root value.
    TrailingData { position: usize },
    /// Byte input was not valid UTF-8.
    InvalidEncoding(Utf8Error),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnterminatedString { position } => {
                write!(f, "Unterminated string starting at byte {}", position)
            }
            ParseError::UnterminatedComment { position } => {
                write!(f, "Unterminated block comment starting at byte {}", position)
            }
            ParseError::InvalidEscape { position, found } => {
                write!(f, "Invalid escape sequence '{}' at byte {}", found, position)
            }
            ParseError::InvalidNumber { position, text } => {
                write!(f, "Invalid number '{}' at byte {}", text, position)
            }
            ParseError::UnexpectedToken {
                position,
                found,
                expected,
            } => write!(
                f,
                "Unexpected token '{}' at byte {}, expected {}",
                found, position, expected
            ),
            ParseError::InvalidRoot { found } => write!(
                f,
                "JSON document must start with an object or an array, found '{}'",
                found
            ),
            ParseError::TrailingData { position } => {
                write!(f, "Unexpected trailing data after root value at byte {}", position)
            }
            ParseError::InvalidEncoding(err) => write!(f, "Input is not valid UTF-8: {}", err),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<Utf8Error> for ParseError {
    fn from(err: Utf8Error) -> Self {
        ParseError::InvalidEncoding(err)
    }
}
