//! Compiled representation of path queries.

/// One step of a compiled query: an object-key access or an array-index
/// access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Named key on an object (`.key`)
    Key(String),
    /// Index into an array (`[0]`)
    Index(usize),
}

/// A complete compiled query.
///
/// Immutable once produced; may be executed repeatedly, including against
/// different trees of compatible root shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonPath {
    /// Segments in the order they are applied from the root.
    pub segments: Vec<PathSegment>,
}

impl JsonPath {
    pub fn new(segments: Vec<PathSegment>) -> Self {
        Self { segments }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
