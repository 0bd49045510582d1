//! The parsed document: root node plus the shared source buffer.
//!
//! A [`JsonTree`] owns its node structure and holds the original source in a
//! reference-counted immutable buffer. Node spans are byte offsets into that
//! buffer, so the buffer outlives every span by construction and all span
//! lookups are checked slices. A built tree is read-only, which makes
//! concurrent queries against it safe.
//!
//! # Example
//!
//! ```
//! use jsonquarry::document::parser::parse_json;
//!
//! let json = r#"{ "greeting": "hello" }"#;
//! let tree = parse_json(json).unwrap();
//!
//! assert_eq!(tree.source(), json);
//! assert_eq!(tree.render(), json);
//! ```

use std::sync::Arc;

use super::node::{RootKind, RootNode, TextSpan, Value, ValueContent};

/// A parsed, structure-preserving JSON document.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonTree {
    source: Arc<str>,
    root: RootNode,
}

impl JsonTree {
    pub(crate) fn new(source: Arc<str>, root: RootNode) -> Self {
        Self { source, root }
    }

    /// The document's root node.
    pub fn root(&self) -> &RootNode {
        &self.root
    }

    /// The shape of the root value, fixed at parse time.
    pub fn root_kind(&self) -> RootKind {
        self.root.kind
    }

    /// The original source text the tree was parsed from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The verbatim source bytes a span covers.
    pub fn slice(&self, span: TextSpan) -> &str {
        self.source.get(span.start..span.end).unwrap_or("")
    }

    /// Re-renders the whole document from the tree: leading structure, the
    /// root value's span, and trailing structure. For a tree straight out of
    /// the parser this reproduces the source byte-for-byte.
    pub fn render(&self) -> String {
        let value = &self.root.value;
        let mut out = String::with_capacity(self.source.len());
        for item in &value.prefix {
            out.push_str(&item.text);
        }
        out.push_str(self.slice(value.span()));
        for item in &value.suffix {
            out.push_str(&item.text);
        }
        out
    }

    /// Renders a value from this tree: containers as their verbatim source
    /// slice, literals as their canonical text.
    pub fn render_value(&self, value: &Value) -> String {
        match &value.content {
            ValueContent::Object(_) | ValueContent::Array(_) => {
                self.slice(value.span()).to_string()
            }
            ValueContent::Literal(lit) => lit.render(),
        }
    }
}
