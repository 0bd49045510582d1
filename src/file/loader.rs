//! JSON file loading.
//!
//! Loads JSON documents from the filesystem or stdin into [`JsonTree`]
//! structures. Files ending in `.gz` are decompressed transparently.

use crate::document::parser::parse_json;
use crate::document::tree::JsonTree;
use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

/// Loads and parses a JSON file from the filesystem.
///
/// # Example
///
/// ```no_run
/// use jsonquarry::file::loader::load_json_file;
///
/// let tree = load_json_file("config.json").unwrap();
/// ```
///
/// # Errors
///
/// Returns an error if the file cannot be read (or decompressed) or its
/// contents are not a valid JSON document.
pub fn load_json_file<P: AsRef<Path>>(path: P) -> Result<JsonTree> {
    let path = path.as_ref();

    let is_gzipped = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == "gz")
        .unwrap_or(false);

    let content = if is_gzipped {
        read_gzipped_file(path)?
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?
    };

    parse_json(&content).context("Failed to parse JSON")
}

/// Loads and parses JSON from standard input, reading until EOF.
pub fn load_json_from_stdin() -> Result<JsonTree> {
    let mut content = String::new();
    std::io::stdin()
        .read_to_string(&mut content)
        .context("Failed to read from stdin")?;
    parse_json(&content).context("Failed to parse JSON")
}

fn read_gzipped_file(path: &Path) -> Result<String> {
    let file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let mut decoder = GzDecoder::new(file);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .with_context(|| format!("Failed to decompress {}", path.display()))?;
    Ok(content)
}
