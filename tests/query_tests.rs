//! End-to-end query tests against object-root and array-root documents.

use jsonquarry::{parse_json, QueryError, RootKind};

const OBJECT_DOC: &str = r#"{"name":"bradford","someArray":["some","values"],"obj":{"innerKey":{"innerKey2":"innerValue"}},"someBool":true,"PI":3.14159}"#;

const ARRAY_DOC: &str = r#"["some","values",{"objKey":"objValue"}]"#;

#[test]
fn test_object_root_string() {
    let tree = parse_json(OBJECT_DOC).unwrap();
    assert_eq!(tree.get("$.name").unwrap(), "bradford");
}

#[test]
fn test_object_root_array_element() {
    let tree = parse_json(OBJECT_DOC).unwrap();
    assert_eq!(tree.get("$.someArray[1]").unwrap(), "values");
}

#[test]
fn test_object_root_index_out_of_bounds() {
    let tree = parse_json(OBJECT_DOC).unwrap();
    assert_eq!(
        tree.get("$.someArray[2]"),
        Err(QueryError::IndexOutOfBounds { index: 2, len: 2 })
    );
}

#[test]
fn test_object_root_deep_key() {
    let tree = parse_json(OBJECT_DOC).unwrap();
    assert_eq!(tree.get("$.obj.innerKey.innerKey2").unwrap(), "innerValue");
}

#[test]
fn test_object_root_bool() {
    let tree = parse_json(OBJECT_DOC).unwrap();
    assert!(tree.get_bool("$.someBool").unwrap());
}

#[test]
fn test_object_root_float() {
    let tree = parse_json(OBJECT_DOC).unwrap();
    assert_eq!(tree.get_f64("$.PI").unwrap(), 3.14159);
}

#[test]
fn test_object_root_rejects_bracket_selector() {
    let tree = parse_json(OBJECT_DOC).unwrap();
    assert_eq!(
        tree.get("$[0]"),
        Err(QueryError::RootSelectorMismatch {
            root: RootKind::Object
        })
    );
}

#[test]
fn test_array_root_object_key() {
    let tree = parse_json(ARRAY_DOC).unwrap();
    assert_eq!(tree.get("$[2].objKey").unwrap(), "objValue");
}

#[test]
fn test_array_root_rejects_dot_selector() {
    let tree = parse_json(ARRAY_DOC).unwrap();
    assert_eq!(
        tree.get("$.objKey"),
        Err(QueryError::RootSelectorMismatch {
            root: RootKind::Array
        })
    );
}

#[test]
fn test_missing_key_reported_with_name() {
    let tree = parse_json(OBJECT_DOC).unwrap();
    let err = tree.get("$.nope").unwrap_err();
    assert_eq!(
        err,
        QueryError::KeyNotFound {
            key: "nope".to_string()
        }
    );
    assert!(err.to_string().contains("nope"));
}

#[test]
fn test_terminal_container_renders_source_slice() {
    let tree = parse_json(OBJECT_DOC).unwrap();
    assert_eq!(
        tree.get("$.someArray").unwrap(),
        r#"["some","values"]"#
    );
    assert_eq!(
        tree.get("$.obj.innerKey").unwrap(),
        r#"{"innerKey2":"innerValue"}"#
    );
}

#[test]
fn test_generic_projection_end_to_end() {
    let tree = parse_json(OBJECT_DOC).unwrap();
    let value = tree.get_value("$.obj").unwrap();
    assert_eq!(
        value,
        serde_json::json!({"innerKey": {"innerKey2": "innerValue"}})
    );

    let array = tree.get_value("$.someArray").unwrap();
    assert_eq!(array, serde_json::json!(["some", "values"]));
}

#[test]
fn test_repeated_queries_are_deterministic() {
    let tree = parse_json(OBJECT_DOC).unwrap();
    let first = tree.get("$.obj.innerKey.innerKey2").unwrap();
    let second = tree.get("$.obj.innerKey.innerKey2").unwrap();
    assert_eq!(first, second);

    // The tree stays usable after a failed query.
    assert!(tree.get("$.missing").is_err());
    assert_eq!(tree.get("$.name").unwrap(), "bradford");
}

#[test]
fn test_concurrent_queries_share_one_tree() {
    let tree = std::sync::Arc::new(parse_json(OBJECT_DOC).unwrap());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let tree = std::sync::Arc::clone(&tree);
            std::thread::spawn(move || tree.get("$.name").unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), "bradford");
    }
}
