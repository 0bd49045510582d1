//! File loading for JSON documents.

pub mod loader;

pub use loader::{load_json_file, load_json_from_stdin};
