//! JSON tokenizer.
//!
//! Scans raw input into a flat sequence of tokens in strict source order.
//! Unlike a conventional JSON lexer, whitespace runs and comments are not
//! skipped: they come out as their own tokens so the parser can attach them
//! to adjacent nodes and keep the tree re-renderable byte-for-byte.
//!
//! The lexer never looks ahead beyond what is needed to classify the current
//! token, and only advances a cursor over the immutable input.

use super::error::ParseError;

/// The kind of a lexical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    Colon,
    Comma,
    String,
    Number,
    True,
    False,
    Null,
    Whitespace,
    LineComment,
    BlockComment,
    Eof,
}

impl TokenKind {
    /// Whitespace and comments: tokens with no semantic content.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::LineComment | TokenKind::BlockComment
        )
    }
}

/// One lexical token with its byte span.
///
/// For `String` tokens `text` is the decoded value (quotes stripped, escapes
/// resolved); for every other kind it is the verbatim source spelling.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub start: usize,
    pub end: usize,
}

/// Tokenizes the whole input, ending with an `Eof` token.
pub fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}

/// Cursor-based scanner over a JSON source string.
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Scans and returns the next token.
    pub fn next_token(&mut self) -> Result<Token, ParseError> {
        let bytes = self.input.as_bytes();
        let start = self.pos;

        let Some(&byte) = bytes.get(start) else {
            return Ok(self.token(TokenKind::Eof, start, start));
        };

        match byte {
            b'{' => Ok(self.single(TokenKind::LeftBrace)),
            b'}' => Ok(self.single(TokenKind::RightBrace)),
            b'[' => Ok(self.single(TokenKind::LeftBracket)),
            b']' => Ok(self.single(TokenKind::RightBracket)),
            b':' => Ok(self.single(TokenKind::Colon)),
            b',' => Ok(self.single(TokenKind::Comma)),
            b' ' | b'\t' | b'\r' | b'\n' => Ok(self.read_whitespace()),
            b'/' => self.read_comment(),
            b'"' => self.read_string(),
            b'-' | b'0'..=b'9' => self.read_number(),
            b't' => self.read_keyword("true", TokenKind::True),
            b'f' => self.read_keyword("false", TokenKind::False),
            b'n' => self.read_keyword("null", TokenKind::Null),
            _ => {
                let ch = self.input[start..].chars().next().unwrap_or('\u{FFFD}');
                Err(ParseError::UnexpectedToken {
                    position: start,
                    found: ch.to_string(),
                    expected: "a JSON value".to_string(),
                })
            }
        }
    }

    fn token(&self, kind: TokenKind, start: usize, end: usize) -> Token {
        Token {
            kind,
            text: self.input[start..end].to_string(),
            start,
            end,
        }
    }

    fn single(&mut self, kind: TokenKind) -> Token {
        let start = self.pos;
        self.pos += 1;
        self.token(kind, start, self.pos)
    }

    fn read_whitespace(&mut self) -> Token {
        let start = self.pos;
        let bytes = self.input.as_bytes();
        while matches!(bytes.get(self.pos), Some(b' ' | b'\t' | b'\r' | b'\n')) {
            self.pos += 1;
        }
        self.token(TokenKind::Whitespace, start, self.pos)
    }

    /// Reads `// ...` (up to, not including, the newline) or `/* ... */`.
    fn read_comment(&mut self) -> Result<Token, ParseError> {
        let start = self.pos;
        let bytes = self.input.as_bytes();

        match bytes.get(start + 1) {
            Some(b'/') => {
                self.pos = start + 2;
                while let Some(&b) = bytes.get(self.pos) {
                    if b == b'\n' {
                        break;
                    }
                    self.pos += 1;
                }
                Ok(self.token(TokenKind::LineComment, start, self.pos))
            }
            Some(b'*') => {
                self.pos = start + 2;
                while self.pos + 1 < bytes.len() {
                    if bytes[self.pos] == b'*' && bytes[self.pos + 1] == b'/' {
                        self.pos += 2;
                        return Ok(self.token(TokenKind::BlockComment, start, self.pos));
                    }
                    self.pos += 1;
                }
                Err(ParseError::UnterminatedComment { position: start })
            }
            _ => Err(ParseError::UnexpectedToken {
                position: start,
                found: "/".to_string(),
                expected: "'//' or '/*'".to_string(),
            }),
        }
    }

    /// String state machine: quote -> chars/escapes -> closing quote.
    fn read_string(&mut self) -> Result<Token, ParseError> {
        let start = self.pos;
        let mut decoded = String::new();
        let mut chars = self.input[start + 1..].char_indices();

        loop {
            let Some((offset, ch)) = chars.next() else {
                return Err(ParseError::UnterminatedString { position: start });
            };

            match ch {
                '"' => {
                    let end = start + 1 + offset + 1;
                    self.pos = end;
                    return Ok(Token {
                        kind: TokenKind::String,
                        text: decoded,
                        start,
                        end,
                    });
                }
                '\\' => {
                    let Some((esc_offset, esc)) = chars.next() else {
                        return Err(ParseError::UnterminatedString { position: start });
                    };
                    let esc_pos = start + 1 + esc_offset;
                    match esc {
                        '"' => decoded.push('"'),
                        '\\' => decoded.push('\\'),
                        '/' => decoded.push('/'),
                        'b' => decoded.push('\u{0008}'),
                        'f' => decoded.push('\u{000C}'),
                        'n' => decoded.push('\n'),
                        'r' => decoded.push('\r'),
                        't' => decoded.push('\t'),
                        'u' => decoded.push(self.read_unicode_escape(&mut chars, esc_pos)?),
                        other => {
                            return Err(ParseError::InvalidEscape {
                                position: esc_pos,
                                found: format!("\\{}", other),
                            })
                        }
                    }
                }
                _ => decoded.push(ch),
            }
        }
    }

    /// Decodes `\uXXXX`, pairing surrogates when needed. `chars` is
    /// positioned just after the `u`.
    fn read_unicode_escape(
        &self,
        chars: &mut std::str::CharIndices,
        position: usize,
    ) -> Result<char, ParseError> {
        let high = self.read_hex4(chars, position)?;

        if (0xDC00..=0xDFFF).contains(&high) {
            // Low surrogate with no preceding high surrogate.
            return Err(ParseError::InvalidEscape {
                position,
                found: format!("\\u{:04X}", high),
            });
        }

        let code = if (0xD800..=0xDBFF).contains(&high) {
            let pair_err = || ParseError::InvalidEscape {
                position,
                found: format!("\\u{:04X}", high),
            };
            match (chars.next(), chars.next()) {
                (Some((_, '\\')), Some((low_pos, 'u'))) => {
                    let low = self.read_hex4(chars, position + low_pos)?;
                    if !(0xDC00..=0xDFFF).contains(&low) {
                        return Err(pair_err());
                    }
                    0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00)
                }
                _ => return Err(pair_err()),
            }
        } else {
            high
        };

        char::from_u32(code).ok_or_else(|| ParseError::InvalidEscape {
            position,
            found: format!("\\u{:04X}", code),
        })
    }

    fn read_hex4(
        &self,
        chars: &mut std::str::CharIndices,
        position: usize,
    ) -> Result<u32, ParseError> {
        let mut code = 0u32;
        for _ in 0..4 {
            let digit = chars
                .next()
                .and_then(|(_, c)| c.to_digit(16))
                .ok_or_else(|| ParseError::InvalidEscape {
                    position,
                    found: "\\u".to_string(),
                })?;
            code = code * 16 + digit;
        }
        Ok(code)
    }

    /// Number state machine: minus -> integer -> fraction -> exponent.
    fn read_number(&mut self) -> Result<Token, ParseError> {
        let start = self.pos;
        let bytes = self.input.as_bytes();
        let mut i = start;

        let invalid = |end: usize| -> ParseError {
            let end = end.min(bytes.len());
            ParseError::InvalidNumber {
                position: start,
                text: String::from_utf8_lossy(&bytes[start..end]).into_owned(),
            }
        };

        if bytes.get(i) == Some(&b'-') {
            i += 1;
        }

        match bytes.get(i) {
            Some(b'0') => {
                i += 1;
                if matches!(bytes.get(i), Some(b'0'..=b'9')) {
                    return Err(invalid(i + 1));
                }
            }
            Some(b'1'..=b'9') => {
                while matches!(bytes.get(i), Some(b'0'..=b'9')) {
                    i += 1;
                }
            }
            _ => return Err(invalid(i + 1)),
        }

        if bytes.get(i) == Some(&b'.') {
            i += 1;
            if !matches!(bytes.get(i), Some(b'0'..=b'9')) {
                return Err(invalid(i + 1));
            }
            while matches!(bytes.get(i), Some(b'0'..=b'9')) {
                i += 1;
            }
        }

        if matches!(bytes.get(i), Some(b'e' | b'E')) {
            i += 1;
            if matches!(bytes.get(i), Some(b'+' | b'-')) {
                i += 1;
            }
            if !matches!(bytes.get(i), Some(b'0'..=b'9')) {
                return Err(invalid(i + 1));
            }
            while matches!(bytes.get(i), Some(b'0'..=b'9')) {
                i += 1;
            }
        }

        self.pos = i;
        Ok(self.token(TokenKind::Number, start, i))
    }

    fn read_keyword(&mut self, keyword: &str, kind: TokenKind) -> Result<Token, ParseError> {
        let start = self.pos;
        if self.input[start..].starts_with(keyword) {
            self.pos = start + keyword.len();
            Ok(self.token(kind, start, self.pos))
        } else {
            let rest: String = self.input[start..].chars().take(keyword.len()).collect();
            Err(ParseError::UnexpectedToken {
                position: start,
                found: rest,
                expected: format!("'{}'", keyword),
            })
        }
    }
}
