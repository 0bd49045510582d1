//! Path-query string parser.
//!
//! Compiles a query like `$.store.items[2].name` into a [`JsonPath`]. The
//! grammar is deliberately small: `$` followed by any number of `.key` and
//! `[index]` selectors. No wildcards, slices, filters, quoted bracket keys,
//! or recursive descent.
//!
//! The parser is a pure string grammar; the only thing it knows about the
//! tree is the root's shape, which the very first selector must match.

use super::ast::{JsonPath, PathSegment};
use super::error::QueryError;
use crate::document::node::RootKind;

/// Parser for path-query strings.
pub struct Parser {
    input: String,
    position: usize,
}

impl Parser {
    /// Creates a new parser for the given query string.
    pub fn new(query: &str) -> Self {
        Self {
            input: query.to_string(),
            position: 0,
        }
    }

    /// Parses the query string into a [`JsonPath`], validating the first
    /// selector against the root's shape.
    pub fn parse(query: &str, root: RootKind) -> Result<JsonPath, QueryError> {
        let mut parser = Parser::new(query);
        parser.parse_path(root)
    }

    fn parse_path(&mut self, root: RootKind) -> Result<JsonPath, QueryError> {
        // Also covers the empty query: no '$', no root selector.
        if self.peek() != Some('$') {
            return Err(QueryError::MissingRootSelector);
        }
        self.next();

        // The first selector must match the root's shape, checked before the
        // rest of the query is tokenized.
        match (root, self.peek()) {
            (RootKind::Object, Some('.')) | (RootKind::Array, Some('[')) => {}
            _ => return Err(QueryError::RootSelectorMismatch { root }),
        }

        let mut segments = Vec::new();
        while let Some(ch) = self.peek() {
            match ch {
                '.' => {
                    self.next();
                    let name = self.parse_identifier()?;
                    segments.push(PathSegment::Key(name));
                }
                '[' => {
                    segments.push(self.parse_index()?);
                }
                other => {
                    return Err(QueryError::SelectorSyntax {
                        position: self.position,
                        fragment: other.to_string(),
                    })
                }
            }
        }

        Ok(JsonPath::new(segments))
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    /// Returns the current character and advances past it.
    fn next(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += ch.len_utf8();
        Some(ch)
    }

    fn offending_fragment(&self) -> String {
        self.peek()
            .map(|c| c.to_string())
            .unwrap_or_else(|| "end of query".to_string())
    }

    /// Parses a bare identifier after a `.`.
    fn parse_identifier(&mut self) -> Result<String, QueryError> {
        let start = self.position;
        let mut name = String::new();
        while let Some(ch) = self.peek() {
            if ch.is_alphanumeric() || ch == '_' || ch == '-' {
                name.push(ch);
                self.next();
            } else {
                break;
            }
        }
        if name.is_empty() {
            Err(QueryError::SelectorSyntax {
                position: start,
                fragment: self.offending_fragment(),
            })
        } else {
            Ok(name)
        }
    }

    /// Parses `[n]` with n a non-negative base-10 integer.
    fn parse_index(&mut self) -> Result<PathSegment, QueryError> {
        self.next(); // consume '['
        let start = self.position;

        let mut digits = String::new();
        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                digits.push(ch);
                self.next();
            } else {
                break;
            }
        }

        if digits.is_empty() {
            return Err(QueryError::SelectorSyntax {
                position: start,
                fragment: self.offending_fragment(),
            });
        }

        if self.peek() != Some(']') {
            return Err(QueryError::SelectorSyntax {
                position: self.position,
                fragment: self.offending_fragment(),
            });
        }
        self.next();

        let index = digits
            .parse::<usize>()
            .map_err(|_| QueryError::SelectorSyntax {
                position: start,
                fragment: digits.clone(),
            })?;

        Ok(PathSegment::Index(index))
    }
}
