//! Error types for query compilation and execution.

use std::fmt;

use crate::document::node::RootKind;

/// Errors that can occur while compiling or executing a path query.
///
/// Compile errors (`MissingRootSelector`, `RootSelectorMismatch`,
/// `SelectorSyntax`) and execute errors (`TypeMismatch`, `KeyNotFound`,
/// `IndexOutOfBounds`, `UnexpectedLiteral`) are both terminal for the call
/// that produced them; the tree is left untouched and reusable.
/// `Coercion` is raised by the typed accessors when the result's text does
/// not parse as the requested scalar type.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryError {
    /// The query does not start with `$` (or is empty).
    MissingRootSelector,
    /// The first selector after `$` does not match the root's shape.
    RootSelectorMismatch { root: RootKind },
    /// A selector the grammar does not recognize.
    SelectorSyntax { position: usize, fragment: String },
    /// A selector asked for one container shape but found the other.
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
    /// No property with the requested key.
    KeyNotFound { key: String },
    /// Array index at or past the end of the array.
    IndexOutOfBounds { index: usize, len: usize },
    /// A non-final selector resolved to a scalar value.
    UnexpectedLiteral,
    /// Result text did not parse as the requested scalar type.
    Coercion { text: String, target: &'static str },
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::MissingRootSelector => write!(
                f,
                "Query must start with '$' representing the root object or array"
            ),
            QueryError::RootSelectorMismatch { root } => match root {
                RootKind::Object => write!(
                    f,
                    "Root JSON type is an object, so the query must begin by selecting \
                     a key, e.g. `$.keyOnRootObject`"
                ),
                RootKind::Array => write!(
                    f,
                    "Root JSON type is an array, so the query must begin by selecting \
                     an item by index, e.g. `$[0]`"
                ),
            },
            QueryError::SelectorSyntax { position, fragment } => write!(
                f,
                "Invalid selector '{}' at position {}: expected `.` for object keys \
                 or `[` for array indexes",
                fragment, position
            ),
            QueryError::TypeMismatch { expected, found } => write!(
                f,
                "Query asked for an {} but found an {}",
                expected, found
            ),
            QueryError::KeyNotFound { key } => {
                write!(f, "Could not find a key named '{}'", key)
            }
            QueryError::IndexOutOfBounds { index, len } => write!(
                f,
                "Index {} is out of bounds for an array of length {}",
                index, len
            ),
            QueryError::UnexpectedLiteral => {
                write!(f, "Query attempted to descend into a scalar value")
            }
            QueryError::Coercion { text, target } => {
                write!(f, "Result '{}' is not parseable as {}", text, target)
            }
        }
    }
}

impl std::error::Error for QueryError {}
