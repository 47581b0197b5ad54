//! JSON encoding of request segments.

use gg_serve_data::{Data, DataKind};
use serde_json::json;

#[test]
fn decodes_text_segment() {
    let data: Data = serde_json::from_value(json!({"type": "text", "text": "hi there"})).unwrap();
    assert_eq!(data.kind(), DataKind::Text);
    assert_eq!(data.as_text().map(|t| t.text()), Some("hi there"));
}

#[test]
fn decodes_token_segment() {
    let data: Data =
        serde_json::from_value(json!({"type": "tokens", "token_ids": [5, 7, 9]})).unwrap();
    assert_eq!(data, Data::tokens(vec![5, 7, 9]));
    assert_eq!(data.length(), 3);
}

#[test]
fn decodes_mixed_request() {
    let raw = r#"[
        {"type": "text", "text": ""},
        {"type": "tokens", "token_ids": []},
        {"type": "tokens", "token_ids": [-1]}
    ]"#;
    let segments: Vec<Data> = serde_json::from_str(raw).unwrap();
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[0].length(), 0);
    assert_eq!(segments[1].length(), 0);
    // Decoding is structural only; negative ids are caught by validation.
    assert_eq!(segments[2].length(), 1);
}

#[test]
fn encodes_with_type_tag() {
    let value = serde_json::to_value(Data::tokens(vec![1, 2])).unwrap();
    assert_eq!(value, json!({"type": "tokens", "token_ids": [1, 2]}));
}

#[test]
fn rejects_unknown_segment_type() {
    let result = serde_json::from_value::<Data>(json!({"type": "image", "pixels": []}));
    assert!(result.is_err());
}

#[test]
fn rejects_out_of_range_integer_ids() {
    let result = serde_json::from_value::<Data>(json!({"type": "tokens", "token_ids": [4294967296u64]}));
    assert!(result.is_err());
}
