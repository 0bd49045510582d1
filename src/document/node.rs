//! Structure-preserving JSON value tree.
//!
//! This module defines the node types a parsed JSON document is built from.
//! Every node records the byte span it occupies in the original source, and
//! the whitespace and comments around values and keys are captured verbatim
//! as [`StructuralItem`]s instead of being discarded. Together these allow
//! any subtree to be re-rendered byte-identical to its source, which is what
//! makes the tree useful for edit-in-place tooling.
//!
//! # Example
//!
//! ```
//! use jsonquarry::document::parser::parse_json;
//! use jsonquarry::document::node::{RootKind, ValueContent};
//!
//! let tree = parse_json(r#"{"pi": 3.14159}"#).unwrap();
//! assert_eq!(tree.root().kind, RootKind::Object);
//!
//! match &tree.root().value.content {
//!     ValueContent::Object(obj) => {
//!         let pi = obj.get("pi").unwrap();
//!         assert!(matches!(pi.content, ValueContent::Literal(_)));
//!     }
//!     _ => unreachable!(),
//! }
//! ```

use serde_json::{Map, Number, Value as GenericValue};

/// A byte range in the original JSON source.
///
/// Spans are half-open `[start, end)` offsets into the single source buffer
/// held by the tree, valid for as long as that buffer is alive and unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextSpan {
    /// Start byte offset in the original source
    pub start: usize,
    /// End byte offset in the original source (exclusive)
    pub end: usize,
}

/// The shape of a document's root value.
///
/// JSON documents accepted here always start with an object or an array;
/// the query language relies on this to validate the first selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootKind {
    Object,
    Array,
}

/// The root of a parsed document: the shape tag plus the root value.
///
/// The tag is set once at parse time and always matches the concrete content
/// of `value`.
#[derive(Debug, Clone, PartialEq)]
pub struct RootNode {
    pub kind: RootKind,
    pub value: Value,
}

/// Classification of a run of non-semantic source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructuralKind {
    Whitespace,
    LineComment,
    BlockComment,
}

/// A whitespace run or comment captured verbatim from the source.
///
/// Structural items are attached as prefix/suffix lists on the nodes they
/// are adjacent to, so re-rendering can reproduce the exact byte sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct StructuralItem {
    pub kind: StructuralKind,
    pub text: String,
}

impl StructuralItem {
    pub fn is_whitespace(&self) -> bool {
        self.kind == StructuralKind::Whitespace
    }

    pub fn is_comment(&self) -> bool {
        matches!(
            self.kind,
            StructuralKind::LineComment | StructuralKind::BlockComment
        )
    }
}

/// A JSON value plus the structure immediately around it.
///
/// `prefix` holds whitespace/comments between the preceding delimiter and the
/// first byte of the value; `suffix` holds whatever sits between its last
/// byte and the next delimiter.
#[derive(Debug, Clone, PartialEq)]
pub struct Value {
    pub prefix: Vec<StructuralItem>,
    pub content: ValueContent,
    pub suffix: Vec<StructuralItem>,
}

impl Value {
    /// Creates a value with no surrounding structure.
    pub fn new(content: ValueContent) -> Self {
        Self {
            prefix: Vec::new(),
            content,
            suffix: Vec::new(),
        }
    }

    /// The byte span of the value's content, delimiters included.
    pub fn span(&self) -> TextSpan {
        self.content.span()
    }

    /// Recursively converts this value to a generic [`serde_json::Value`].
    pub fn to_generic(&self) -> GenericValue {
        self.content.to_generic()
    }
}

/// A JSON value's content: object, array, or literal.
///
/// This is the closed set of shapes a value can take; every consumer matches
/// on it exhaustively, so adding a variant is a compile error at each site
/// rather than a runtime fallback.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueContent {
    Object(Object),
    Array(Array),
    Literal(Literal),
}

impl ValueContent {
    pub fn span(&self) -> TextSpan {
        match self {
            ValueContent::Object(obj) => obj.span,
            ValueContent::Array(arr) => arr.span,
            ValueContent::Literal(lit) => lit.span,
        }
    }

    pub fn is_object(&self) -> bool {
        matches!(self, ValueContent::Object(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, ValueContent::Array(_))
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, ValueContent::Literal(_))
    }

    /// Returns true if this value can be descended into by a query.
    pub fn is_container(&self) -> bool {
        matches!(self, ValueContent::Object(_) | ValueContent::Array(_))
    }

    /// Recursively converts to a generic [`serde_json::Value`].
    ///
    /// Objects become maps (for duplicate keys only the first occurrence is
    /// kept, matching query lookup), arrays become vectors, and literals
    /// become native scalars. Numbers use the decoded `f64`, not the source
    /// text, so original formatting is not preserved in this form.
    pub fn to_generic(&self) -> GenericValue {
        match self {
            ValueContent::Object(obj) => {
                let mut map = Map::new();
                for prop in &obj.children {
                    if !map.contains_key(&prop.key.name) {
                        map.insert(prop.key.name.clone(), prop.value.to_generic());
                    }
                }
                GenericValue::Object(map)
            }
            ValueContent::Array(arr) => GenericValue::Array(
                arr.children
                    .iter()
                    .map(|item| item.value.to_generic())
                    .collect(),
            ),
            ValueContent::Literal(lit) => lit.to_generic(),
        }
    }
}

/// A JSON object: an ordered sequence of properties.
///
/// Declaration order is preserved and keys are not deduplicated; lookup
/// returns the first match, mirroring what source JSON permits.
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    pub children: Vec<Property>,
    /// Structure between the last property (or opening brace) and the `}`.
    pub trailing: Vec<StructuralItem>,
    pub span: TextSpan,
}

impl Object {
    /// Returns the value of the first property named `key`, if any.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.children
            .iter()
            .find(|prop| prop.key.name == key)
            .map(|prop| &prop.value)
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// One `key: value` pair in an object.
///
/// `has_comma` records whether a comma followed the pair in source, so a
/// re-render can reproduce (or normalize) trailing commas instead of
/// silently dropping them.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub key: Identifier,
    pub value: Value,
    pub has_comma: bool,
}

/// An object property key: the decoded name plus adjacent structure.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub prefix: Vec<StructuralItem>,
    pub name: String,
    pub suffix: Vec<StructuralItem>,
}

/// A JSON array: an ordered sequence of items.
#[derive(Debug, Clone, PartialEq)]
pub struct Array {
    pub children: Vec<ArrayItem>,
    /// Structure between the last item (or opening bracket) and the `]`.
    pub trailing: Vec<StructuralItem>,
    pub span: TextSpan,
}

impl Array {
    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// One element of an array, with its comma flag.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayItem {
    pub value: Value,
    pub has_comma: bool,
}

/// A scalar JSON value.
///
/// `raw` keeps the verbatim source spelling (quotes, escapes, and numeric
/// formatting such as `1.0` vs `1`), while `value` holds the decoded native
/// value.
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    pub value: LiteralValue,
    pub raw: String,
    pub span: TextSpan,
}

/// The decoded native value of a literal.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    String(String),
    Number(f64),
    Bool(bool),
    Null,
}

impl Literal {
    /// Canonical textual rendering: the decoded text for strings (no quotes,
    /// escapes resolved), the verbatim source spelling otherwise.
    pub fn render(&self) -> String {
        match &self.value {
            LiteralValue::String(s) => s.clone(),
            LiteralValue::Number(_) | LiteralValue::Bool(_) | LiteralValue::Null => {
                self.raw.clone()
            }
        }
    }

    fn to_generic(&self) -> GenericValue {
        match &self.value {
            LiteralValue::String(s) => GenericValue::String(s.clone()),
            LiteralValue::Number(n) => Number::from_f64(*n)
                .map(GenericValue::Number)
                .unwrap_or(GenericValue::Null),
            LiteralValue::Bool(b) => GenericValue::Bool(*b),
            LiteralValue::Null => GenericValue::Null,
        }
    }
}
