//! Extract values from JSON with path queries while preserving the original
//! source formatting.
//!
//! A parsed [`JsonTree`] keeps everything the source contained: whitespace,
//! `//` and `/* */` comments, trailing commas, and the exact spelling of
//! numbers and strings. Every node records its byte span into the shared
//! source buffer, so any subtree can be re-rendered byte-identical to its
//! source. On top of that tree sits a small path-query language
//! (`$.key.items[2].name`) for pulling individual values out of a document
//! without deserializing the whole thing.
//!
//! # Example
//!
//! ```
//! use jsonquarry::parse_json;
//!
//! let tree = parse_json(r#"{
//!     "name": "bradford",
//!     "someArray": ["some", "values"],
//!     "someBool": true,
//!     "PI": 3.14159
//! }"#).unwrap();
//!
//! assert_eq!(tree.get("$.name").unwrap(), "bradford");
//! assert_eq!(tree.get("$.someArray[1]").unwrap(), "values");
//! assert!(tree.get_bool("$.someBool").unwrap());
//! assert_eq!(tree.get_f64("$.PI").unwrap(), 3.14159);
//! ```
//!
//! Trees are immutable once built and hold their source in a
//! reference-counted buffer, so concurrent read-only queries from multiple
//! threads are safe.

pub mod document;
pub mod file;
pub mod query;

pub use document::error::ParseError;
pub use document::node::{RootKind, Value, ValueContent};
pub use document::parser::{parse_json, parse_json_bytes};
pub use document::tree::JsonTree;
pub use query::ast::{JsonPath, PathSegment};
pub use query::error::QueryError;
