//! Path-query compilation, execution, and the typed accessor API.
//!
//! # Supported syntax
//!
//! - `$`: the document root (must come first)
//! - `.key`: object member access, bare identifiers only
//! - `[n]`: array element access, non-negative base-10 index
//!
//! Wildcards, slices, filters, and recursive descent are not supported.
//!
//! # Examples
//!
//! ```
//! use jsonquarry::document::parser::parse_json;
//!
//! let tree = parse_json(r#"{"user": {"name": "Ada", "logins": [3, 14]}}"#).unwrap();
//!
//! assert_eq!(tree.get("$.user.name").unwrap(), "Ada");
//! assert_eq!(tree.get_f64("$.user.logins[1]").unwrap(), 14.0);
//! ```

pub mod ast;
pub mod error;
pub mod evaluator;
pub mod parser;

pub use ast::{JsonPath, PathSegment};
pub use error::QueryError;
pub use evaluator::Evaluator;
pub use parser::Parser;

use crate::document::node::{RootKind, Value};
use crate::document::tree::JsonTree;

/// Compiles a query string against a root shape.
///
/// The result is reusable: it can be executed any number of times, against
/// any tree whose root has the same shape.
pub fn compile(query: &str, root: RootKind) -> Result<JsonPath, QueryError> {
    Parser::parse(query, root)
}

/// Executes a compiled query against a tree, returning the terminal value.
pub fn execute<'a>(tree: &'a JsonTree, path: &JsonPath) -> Result<&'a Value, QueryError> {
    Evaluator::new(tree).evaluate(path)
}

/// Query entry points. All of these are pure: they compile, execute, and
/// convert in one call without retaining any state on the tree, so a tree
/// shared between threads can serve queries concurrently.
impl JsonTree {
    /// Runs a query and returns the terminal tree value.
    pub fn query(&self, query: &str) -> Result<&Value, QueryError> {
        let path = compile(query, self.root_kind())?;
        execute(self, &path)
    }

    /// Runs a query and renders the result as text: containers as their
    /// verbatim source slice, literals as their canonical text (decoded
    /// strings, source-spelled numbers).
    ///
    /// # Example
    ///
    /// ```
    /// use jsonquarry::document::parser::parse_json;
    ///
    /// let tree = parse_json(r#"{"pi": 3.14159}"#).unwrap();
    /// assert_eq!(tree.get("$.pi").unwrap(), "3.14159");
    /// ```
    pub fn get(&self, query: &str) -> Result<String, QueryError> {
        Ok(self.render_value(self.query(query)?))
    }

    /// Runs a query and coerces the rendered result to a bool.
    pub fn get_bool(&self, query: &str) -> Result<bool, QueryError> {
        let text = self.get(query)?;
        text.parse().map_err(|_| QueryError::Coercion {
            text,
            target: "bool",
        })
    }

    /// Runs a query and coerces the rendered result to an f64, JSON's only
    /// number type.
    pub fn get_f64(&self, query: &str) -> Result<f64, QueryError> {
        let text = self.get(query)?;
        text.parse().map_err(|_| QueryError::Coercion {
            text,
            target: "f64",
        })
    }

    /// Runs a query and converts the result to a generic
    /// [`serde_json::Value`]: maps for objects, vectors for arrays, native
    /// scalars for literals.
    pub fn get_value(&self, query: &str) -> Result<serde_json::Value, QueryError> {
        Ok(self.query(query)?.to_generic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::parser::parse_json;

    #[test]
    fn test_get_renders_literals() {
        let tree = parse_json(r#"{"s": "hi", "n": 1.50, "b": false, "z": null}"#).unwrap();
        assert_eq!(tree.get("$.s").unwrap(), "hi");
        assert_eq!(tree.get("$.n").unwrap(), "1.50");
        assert_eq!(tree.get("$.b").unwrap(), "false");
        assert_eq!(tree.get("$.z").unwrap(), "null");
    }

    #[test]
    fn test_get_renders_containers_verbatim() {
        let tree = parse_json(r#"{"obj": { "a" : [1,  2] }}"#).unwrap();
        assert_eq!(tree.get("$.obj").unwrap(), r#"{ "a" : [1,  2] }"#);
    }

    #[test]
    fn test_get_bool() {
        let tree = parse_json(r#"{"yes": true, "s": "maybe"}"#).unwrap();
        assert!(tree.get_bool("$.yes").unwrap());
        assert_eq!(
            tree.get_bool("$.s"),
            Err(QueryError::Coercion {
                text: "maybe".to_string(),
                target: "bool",
            })
        );
    }

    #[test]
    fn test_get_f64() {
        let tree = parse_json(r#"{"pi": 3.14159, "s": "x"}"#).unwrap();
        assert_eq!(tree.get_f64("$.pi").unwrap(), 3.14159);
        assert!(matches!(
            tree.get_f64("$.s"),
            Err(QueryError::Coercion { .. })
        ));
    }

    #[test]
    fn test_get_value_shapes() {
        let tree = parse_json(r#"{"o": {"k": [1, "two", true, null]}}"#).unwrap();
        let value = tree.get_value("$.o").unwrap();
        assert_eq!(value, serde_json::json!({"k": [1.0, "two", true, null]}));
    }

    #[test]
    fn test_compiled_path_is_reusable() {
        let path = compile("$.n", RootKind::Object).unwrap();
        let one = parse_json(r#"{"n": 1}"#).unwrap();
        let two = parse_json(r#"{"n": 2}"#).unwrap();

        assert_eq!(one.render_value(execute(&one, &path).unwrap()), "1");
        assert_eq!(two.render_value(execute(&two, &path).unwrap()), "2");
    }

    #[test]
    fn test_query_errors_propagate_through_accessors() {
        let tree = parse_json(r#"{"a": 1}"#).unwrap();
        assert!(matches!(
            tree.get_bool("$missing"),
            Err(QueryError::RootSelectorMismatch { .. })
        ));
        assert!(matches!(
            tree.get_f64("$.b"),
            Err(QueryError::KeyNotFound { .. })
        ));
    }
}
