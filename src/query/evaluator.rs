//! Tree-walking query executor.
//!
//! Walks a compiled [`JsonPath`] from the root of a tree, narrowing a cursor
//! (the object or array currently held) one segment at a time. Whatever value
//! the final segment lands on becomes the result, container or literal.
//! Execution never mutates the tree and keeps no state across calls.

use super::ast::{JsonPath, PathSegment};
use super::error::QueryError;
use crate::document::node::{Array, Object, Value, ValueContent};
use crate::document::tree::JsonTree;

/// The executor's position during traversal: the container currently held.
enum Cursor<'a> {
    Object(&'a Object),
    Array(&'a Array),
}

pub struct Evaluator<'a> {
    tree: &'a JsonTree,
}

impl<'a> Evaluator<'a> {
    pub fn new(tree: &'a JsonTree) -> Self {
        Evaluator { tree }
    }

    /// Follows the path from the root and returns the terminal value.
    pub fn evaluate(&self, path: &JsonPath) -> Result<&'a Value, QueryError> {
        let root_value = &self.tree.root().value;
        let mut cursor = match &root_value.content {
            ValueContent::Object(obj) => Cursor::Object(obj),
            ValueContent::Array(arr) => Cursor::Array(arr),
            // The parser rejects literal roots, so a path can always start
            // descending from a container.
            ValueContent::Literal(_) => return Err(QueryError::UnexpectedLiteral),
        };

        for (i, segment) in path.segments.iter().enumerate() {
            let target = match (segment, &cursor) {
                (PathSegment::Key(key), Cursor::Object(obj)) => {
                    obj.get(key).ok_or_else(|| QueryError::KeyNotFound {
                        key: key.clone(),
                    })?
                }
                (PathSegment::Key(_), Cursor::Array(_)) => {
                    return Err(QueryError::TypeMismatch {
                        expected: "object",
                        found: "array",
                    })
                }
                (PathSegment::Index(index), Cursor::Array(arr)) => {
                    if *index >= arr.len() {
                        return Err(QueryError::IndexOutOfBounds {
                            index: *index,
                            len: arr.len(),
                        });
                    }
                    &arr.children[*index].value
                }
                (PathSegment::Index(_), Cursor::Object(_)) => {
                    return Err(QueryError::TypeMismatch {
                        expected: "array",
                        found: "object",
                    })
                }
            };

            if i + 1 == path.segments.len() {
                // The final segment's value is the result as-is, even when
                // it is a container.
                return Ok(target);
            }

            cursor = match &target.content {
                ValueContent::Object(obj) => Cursor::Object(obj),
                ValueContent::Array(arr) => Cursor::Array(arr),
                ValueContent::Literal(_) => return Err(QueryError::UnexpectedLiteral),
            };
        }

        Ok(root_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::node::{Literal, LiteralValue};
    use crate::document::parser::parse_json;
    use crate::query::parser::Parser;

    fn eval<'a>(tree: &'a JsonTree, query: &str) -> Result<&'a Value, QueryError> {
        let path = Parser::parse(query, tree.root_kind()).unwrap();
        Evaluator::new(tree).evaluate(&path)
    }

    fn literal<'a>(value: &'a Value) -> &'a Literal {
        match &value.content {
            ValueContent::Literal(lit) => lit,
            other => panic!("Expected literal, got {:?}", other),
        }
    }

    #[test]
    fn test_evaluate_key() {
        let tree = parse_json(r#"{"name": "test"}"#).unwrap();
        let result = eval(&tree, "$.name").unwrap();
        assert_eq!(
            literal(result).value,
            LiteralValue::String("test".to_string())
        );
    }

    #[test]
    fn test_evaluate_nested_keys() {
        let tree = parse_json(r#"{"a": {"b": {"c": 42}}}"#).unwrap();
        let result = eval(&tree, "$.a.b.c").unwrap();
        assert_eq!(literal(result).value, LiteralValue::Number(42.0));
    }

    #[test]
    fn test_evaluate_array_index() {
        let tree = parse_json(r#"{"items": ["a", "b", "c"]}"#).unwrap();
        let result = eval(&tree, "$.items[1]").unwrap();
        assert_eq!(literal(result).value, LiteralValue::String("b".to_string()));
    }

    #[test]
    fn test_evaluate_array_root() {
        let tree = parse_json(r#"[10, [20, 21]]"#).unwrap();
        let result = eval(&tree, "$[1][0]").unwrap();
        assert_eq!(literal(result).value, LiteralValue::Number(20.0));
    }

    #[test]
    fn test_terminal_container_returned_as_is() {
        let tree = parse_json(r#"{"obj": {"k": 1}}"#).unwrap();
        let result = eval(&tree, "$.obj").unwrap();
        assert!(result.content.is_object());
    }

    #[test]
    fn test_key_not_found() {
        let tree = parse_json(r#"{"a": 1}"#).unwrap();
        assert_eq!(
            eval(&tree, "$.missing"),
            Err(QueryError::KeyNotFound {
                key: "missing".to_string()
            })
        );
    }

    #[test]
    fn test_index_out_of_bounds() {
        let tree = parse_json(r#"{"items": [1, 2]}"#).unwrap();
        assert_eq!(
            eval(&tree, "$.items[2]"),
            Err(QueryError::IndexOutOfBounds { index: 2, len: 2 })
        );
    }

    #[test]
    fn test_type_mismatch_key_on_array() {
        let tree = parse_json(r#"{"items": [1, 2]}"#).unwrap();
        assert_eq!(
            eval(&tree, "$.items.name"),
            Err(QueryError::TypeMismatch {
                expected: "object",
                found: "array"
            })
        );
    }

    #[test]
    fn test_type_mismatch_index_on_object() {
        let tree = parse_json(r#"{"obj": {"k": 1}}"#).unwrap();
        assert_eq!(
            eval(&tree, "$.obj[0]"),
            Err(QueryError::TypeMismatch {
                expected: "array",
                found: "object"
            })
        );
    }

    #[test]
    fn test_descending_into_literal_fails() {
        let tree = parse_json(r#"{"n": 5}"#).unwrap();
        assert_eq!(eval(&tree, "$.n.deeper"), Err(QueryError::UnexpectedLiteral));
    }

    #[test]
    fn test_duplicate_key_first_wins() {
        let tree = parse_json(r#"{"k": "first", "k": "second"}"#).unwrap();
        let result = eval(&tree, "$.k").unwrap();
        assert_eq!(
            literal(result).value,
            LiteralValue::String("first".to_string())
        );
    }

    #[test]
    fn test_evaluation_is_deterministic_and_non_mutating() {
        let tree = parse_json(r#"{"a": [1, {"b": true}]}"#).unwrap();
        let before = tree.clone();
        let path = Parser::parse("$.a[1].b", tree.root_kind()).unwrap();

        let first = Evaluator::new(&tree).evaluate(&path).unwrap().clone();
        let second = Evaluator::new(&tree).evaluate(&path).unwrap().clone();

        assert_eq!(first, second);
        assert_eq!(tree, before);
    }
}
