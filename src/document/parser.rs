//! Recursive-descent JSON parser.
//!
//! Consumes the lexer's token stream and builds the structure-preserving
//! value tree: every node records its byte span, whitespace and comments
//! attach to the nodes they are adjacent to, and separator commas are
//! recorded rather than dropped. Comments and trailing commas are accepted
//! on input because the tree exists to represent them.
//!
//! # Example
//!
//! ```
//! use jsonquarry::document::parser::parse_json;
//!
//! let tree = parse_json(r#"{"name": "Alice"}"#).unwrap();
//! assert!(tree.root().value.content.is_object());
//! ```

use std::sync::Arc;

use super::error::ParseError;
use super::lexer::{tokenize, Token, TokenKind};
use super::node::{
    Array, ArrayItem, Identifier, Literal, LiteralValue, Object, Property, RootKind, RootNode,
    StructuralItem, StructuralKind, TextSpan, Value, ValueContent,
};
use super::tree::JsonTree;

/// Parses a JSON document into a [`JsonTree`].
///
/// The document's top-level value must be an object or an array; a bare
/// literal root fails with [`ParseError::InvalidRoot`], and any
/// non-whitespace input after the root value fails with
/// [`ParseError::TrailingData`]. On error no partial tree is returned.
///
/// # Example
///
/// ```
/// use jsonquarry::document::parser::parse_json;
/// use jsonquarry::document::node::RootKind;
///
/// let tree = parse_json(r#"[1, 2, 3]"#).unwrap();
/// assert_eq!(tree.root_kind(), RootKind::Array);
///
/// assert!(parse_json("42").is_err());
/// ```
pub fn parse_json(input: &str) -> Result<JsonTree, ParseError> {
    let tokens = tokenize(input)?;
    let mut parser = Parser {
        input,
        tokens,
        pos: 0,
    };
    let root = parser.parse_root()?;
    Ok(JsonTree::new(Arc::from(input), root))
}

/// Parses a JSON document from raw bytes, decoding them as UTF-8 first.
pub fn parse_json_bytes(bytes: &[u8]) -> Result<JsonTree, ParseError> {
    let text = std::str::from_utf8(bytes)?;
    parse_json(text)
}

struct Parser<'a> {
    input: &'a str,
    tokens: Vec<Token>,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn current(&self) -> &Token {
        // The token vector always ends with Eof and the cursor never moves
        // past it.
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn bump(&mut self) -> Token {
        let token = self.current().clone();
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    /// The kind of the next token that is not whitespace or a comment,
    /// without consuming anything.
    fn peek_semantic(&self) -> &Token {
        self.tokens[self.pos..]
            .iter()
            .find(|t| !t.kind.is_structural())
            .expect("token stream ends with Eof")
    }

    /// Consumes consecutive whitespace/comment tokens.
    fn take_structure(&mut self) -> Vec<StructuralItem> {
        let mut items = Vec::new();
        loop {
            let kind = match self.current().kind {
                TokenKind::Whitespace => StructuralKind::Whitespace,
                TokenKind::LineComment => StructuralKind::LineComment,
                TokenKind::BlockComment => StructuralKind::BlockComment,
                _ => return items,
            };
            let token = self.bump();
            items.push(StructuralItem {
                kind,
                text: token.text,
            });
        }
    }

    fn expect(&mut self, kind: TokenKind, expected: &str) -> Result<Token, ParseError> {
        if self.current().kind == kind {
            Ok(self.bump())
        } else {
            Err(self.unexpected(expected))
        }
    }

    fn unexpected(&self, expected: &str) -> ParseError {
        let token = self.current();
        let found = if token.kind == TokenKind::Eof {
            "end of input".to_string()
        } else {
            self.input[token.start..token.end].to_string()
        };
        ParseError::UnexpectedToken {
            position: token.start,
            found,
            expected: expected.to_string(),
        }
    }

    fn parse_root(&mut self) -> Result<RootNode, ParseError> {
        let kind = match self.peek_semantic().kind {
            TokenKind::LeftBrace => RootKind::Object,
            TokenKind::LeftBracket => RootKind::Array,
            TokenKind::Eof => {
                return Err(ParseError::InvalidRoot {
                    found: "end of input".to_string(),
                })
            }
            _ => {
                let token = self.peek_semantic();
                return Err(ParseError::InvalidRoot {
                    found: self.input[token.start..token.end].to_string(),
                });
            }
        };

        let value = self.parse_value()?;

        if self.current().kind != TokenKind::Eof {
            return Err(ParseError::TrailingData {
                position: self.current().start,
            });
        }

        Ok(RootNode { kind, value })
    }

    /// Parses one value, including the structure immediately before and
    /// after it.
    fn parse_value(&mut self) -> Result<Value, ParseError> {
        let prefix = self.take_structure();

        let content = match self.current().kind {
            TokenKind::LeftBrace => ValueContent::Object(self.parse_object()?),
            TokenKind::LeftBracket => ValueContent::Array(self.parse_array()?),
            TokenKind::String => {
                let token = self.bump();
                self.literal(&token, LiteralValue::String(token.text.clone()))
            }
            TokenKind::Number => {
                let token = self.bump();
                let number = token.text.parse::<f64>().map_err(|_| {
                    ParseError::InvalidNumber {
                        position: token.start,
                        text: token.text.clone(),
                    }
                })?;
                self.literal(&token, LiteralValue::Number(number))
            }
            TokenKind::True => {
                let token = self.bump();
                self.literal(&token, LiteralValue::Bool(true))
            }
            TokenKind::False => {
                let token = self.bump();
                self.literal(&token, LiteralValue::Bool(false))
            }
            TokenKind::Null => {
                let token = self.bump();
                self.literal(&token, LiteralValue::Null)
            }
            _ => return Err(self.unexpected("a JSON value")),
        };

        let suffix = self.take_structure();

        Ok(Value {
            prefix,
            content,
            suffix,
        })
    }

    fn literal(&self, token: &Token, value: LiteralValue) -> ValueContent {
        ValueContent::Literal(Literal {
            value,
            raw: self.input[token.start..token.end].to_string(),
            span: TextSpan {
                start: token.start,
                end: token.end,
            },
        })
    }

    fn parse_object(&mut self) -> Result<Object, ParseError> {
        let open = self.expect(TokenKind::LeftBrace, "'{'")?;
        let mut children: Vec<Property> = Vec::new();

        loop {
            let structure = self.take_structure();

            if self.current().kind == TokenKind::RightBrace {
                let close = self.bump();
                return Ok(Object {
                    children,
                    trailing: structure,
                    span: TextSpan {
                        start: open.start,
                        end: close.end,
                    },
                });
            }

            // A property may only follow the opening brace or a comma.
            if let Some(last) = children.last() {
                if !last.has_comma {
                    return Err(self.unexpected("',' or '}'"));
                }
            }

            let key_token = self.expect(TokenKind::String, "a property key or '}'")?;
            let key = Identifier {
                prefix: structure,
                name: key_token.text,
                suffix: self.take_structure(),
            };

            self.expect(TokenKind::Colon, "':'")?;

            let value = self.parse_value()?;

            let has_comma = if self.current().kind == TokenKind::Comma {
                self.bump();
                true
            } else {
                false
            };

            children.push(Property {
                key,
                value,
                has_comma,
            });
        }
    }

    fn parse_array(&mut self) -> Result<Array, ParseError> {
        let open = self.expect(TokenKind::LeftBracket, "'['")?;
        let mut children: Vec<ArrayItem> = Vec::new();

        loop {
            if self.peek_semantic().kind == TokenKind::RightBracket {
                let trailing = self.take_structure();
                let close = self.bump();
                return Ok(Array {
                    children,
                    trailing,
                    span: TextSpan {
                        start: open.start,
                        end: close.end,
                    },
                });
            }

            if let Some(last) = children.last() {
                if !last.has_comma {
                    // Skip the structure so the error points at the value.
                    self.take_structure();
                    return Err(self.unexpected("',' or ']'"));
                }
            }

            let value = self.parse_value()?;

            let has_comma = if self.current().kind == TokenKind::Comma {
                self.bump();
                true
            } else {
                false
            };

            children.push(ArrayItem { value, has_comma });
        }
    }
}
