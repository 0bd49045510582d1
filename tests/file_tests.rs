//! Integration tests for file loading.

use flate2::write::GzEncoder;
use flate2::Compression;
use jsonquarry::file::loader::load_json_file;
use jsonquarry::RootKind;
use std::fs::{self, File};
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_load_json_file() {
    let file = NamedTempFile::new().unwrap();
    fs::write(file.path(), r#"{"name": "Alice", "age": 30}"#).unwrap();

    let tree = load_json_file(file.path()).unwrap();
    assert_eq!(tree.root_kind(), RootKind::Object);
    assert_eq!(tree.get("$.name").unwrap(), "Alice");
}

#[test]
fn test_load_preserves_formatting() {
    let json = "{\n  // config\n  \"port\": 8080\n}\n";
    let file = NamedTempFile::new().unwrap();
    fs::write(file.path(), json).unwrap();

    let tree = load_json_file(file.path()).unwrap();
    assert_eq!(tree.render(), json);
}

#[test]
fn test_load_gzipped_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.json.gz");

    let file = File::create(&path).unwrap();
    let mut encoder = GzEncoder::new(file, Compression::default());
    encoder
        .write_all(br#"{"compressed": true}"#)
        .unwrap();
    encoder.finish().unwrap();

    let tree = load_json_file(&path).unwrap();
    assert!(tree.get_bool("$.compressed").unwrap());
}

#[test]
fn test_load_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let result = load_json_file(dir.path().join("missing.json"));
    assert!(result.is_err());
}

#[test]
fn test_load_invalid_json_fails() {
    let file = NamedTempFile::new().unwrap();
    fs::write(file.path(), r#"{"unclosed": "#).unwrap();
    assert!(load_json_file(file.path()).is_err());
}

#[test]
fn test_load_literal_root_fails() {
    let file = NamedTempFile::new().unwrap();
    fs::write(file.path(), "42").unwrap();
    assert!(load_json_file(file.path()).is_err());
}
