//! JSON document representation and parsing.
//!
//! The pipeline is lexer -> parser -> tree: [`lexer`] scans raw text into
//! tokens (keeping whitespace and comments as tokens of their own),
//! [`parser`] builds the structure-preserving value tree defined in
//! [`node`], and [`tree`] wraps the result together with the shared source
//! buffer.

pub mod error;
pub mod lexer;
pub mod node;
pub mod parser;
pub mod tree;

pub use error::ParseError;
pub use node::{RootKind, RootNode, Value, ValueContent};
pub use parser::{parse_json, parse_json_bytes};
pub use tree::JsonTree;
