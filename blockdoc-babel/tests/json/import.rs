//! Import tests for the JSON format (lenient block decoding)

use blockdoc_babel::blocks::{Block, ImageData, QuoteData};
use blockdoc_babel::format::Format;
use blockdoc_babel::formats::json::JsonFormat;
use blockdoc_babel::unserialize;
use serde_json::json;

fn json_to_blocks(source: &str) -> Vec<Block> {
    JsonFormat::default().parse(source).unwrap().blocks
}

#[test]
fn test_unknown_types_are_skipped_in_order() {
    let source = json!({
        "blocks": [
            {"type": "paragraph", "data": {"text": "One"}},
            {"type": "video", "data": {"url": "x"}},
            {"data": {"text": "no type"}},
            {"type": "delimiter"},
            {"type": "paragraph", "data": {"text": "Two"}}
        ]
    })
    .to_string();

    assert_eq!(
        json_to_blocks(&source),
        vec![
            Block::paragraph("One"),
            Block::Delimiter,
            Block::paragraph("Two")
        ]
    );
}

#[test]
fn test_unknown_children_are_skipped() {
    let source = json!({
        "blocks": [{
            "type": "layer",
            "data": {"content": [
                {"type": "mystery", "data": {}},
                {"type": "code", "data": {"text": "x = 1"}}
            ]}
        }]
    })
    .to_string();

    assert_eq!(
        json_to_blocks(&source),
        vec![Block::layer(vec![Block::code("x = 1")])]
    );
}

#[test]
fn test_missing_fields_take_defaults() {
    let source = json!({
        "blocks": [
            {"type": "paragraph", "data": {}},
            {"type": "quote", "data": {"content": ["Q"]}},
            {"type": "image", "data": {"src": "/a.png"}}
        ]
    })
    .to_string();

    assert_eq!(
        json_to_blocks(&source),
        vec![
            Block::paragraph(""),
            Block::Quote(QuoteData {
                content: vec!["Q".to_string()],
                cite: None,
            }),
            Block::Image(ImageData {
                src: Some("/a.png".to_string()),
                ..Default::default()
            }),
        ]
    );
}

#[test]
fn test_non_object_payload_is_skipped() {
    let source = r#"{"blocks":[{"type":"paragraph","data":"text"},{"type":"delimiter"}]}"#;
    assert_eq!(json_to_blocks(source), vec![Block::Delimiter]);
}

#[test]
fn test_mistyped_scalars_fall_back_per_field() {
    let source = r#"{"blocks":[
        {"type":"paragraph","data":{"text":5}},
        {"type":"header","data":{"text":"T","level":"3"}},
        {"type":"header","data":{"text":"U","level":2.0}},
        {"type":"quote","data":{"content":["a",null]}}
    ]}"#;
    assert_eq!(
        unserialize(source),
        "<p>5</p>\n<h3>T</h3>\n<h2>U</h2>\n<blockquote><p>a</p></blockquote>"
    );
}

#[test]
fn test_mistyped_column_size_keeps_children() {
    let source = r#"{"blocks":[{"type":"columns","data":{"content":[
        {"type":"column","data":{"size":"8","content":[{"type":"paragraph","data":{"text":"A"}}]}},
        {"type":"column","data":{"size":{},"content":[{"type":"paragraph","data":{"text":"B"}}]}}
    ]}}]}"#;
    let html = unserialize(source);
    assert!(html.contains(r#"<div class="column column-8">"#), "{html}");
    assert!(html.contains(r#"<div class="column column-12">"#), "{html}");
    assert!(html.contains("<p>A</p>"), "{html}");
    assert!(html.contains("<p>B</p>"), "{html}");
}

#[test]
fn test_unserialize_degrades_to_empty() {
    assert_eq!(unserialize(""), "");
    assert_eq!(unserialize("{"), "");
    assert_eq!(unserialize(r#"{"version":"0.2"}"#), "");
    assert_eq!(unserialize(r#"{"blocks":{}}"#), "");
}
