//! Export tests for the HTML format (blocks → HTML)

use blockdoc_babel::blocks::{Block, ColumnData, Document, HeaderData, QuoteData};
use blockdoc_babel::format::Format;
use blockdoc_babel::formats::html::HtmlFormat;
use blockdoc_babel::unserialize;
use insta::assert_snapshot;

fn blocks_to_html(blocks: Vec<Block>) -> String {
    HtmlFormat.serialize(&Document::new(blocks)).unwrap()
}

#[test]
fn test_paragraph_delimiter_code_lines() {
    let html = blocks_to_html(vec![
        Block::paragraph("Hello"),
        Block::Delimiter,
        Block::code("code()"),
    ]);
    assert_eq!(html, "<p>Hello</p>\n<hr>\n<pre>code()</pre>");
}

#[test]
fn test_heading_level_clamped() {
    let html = unserialize(
        r#"{"blocks":[
            {"type":"header","data":{"text":"Nine","level":9}},
            {"type":"header","data":{"text":"Zero","level":0}},
            {"type":"header","data":{"text":"Negative","level":-4}}
        ]}"#,
    );
    assert_eq!(html, "<h6>Nine</h6>\n<h1>Zero</h1>\n<h1>Negative</h1>");

    let html = blocks_to_html(vec![Block::Header(HeaderData {
        text: "Deep".to_string(),
        level: 200,
    })]);
    assert_eq!(html, "<h6>Deep</h6>");
}

#[test]
fn test_empty_quote_items_suppressed() {
    let html = blocks_to_html(vec![Block::Quote(QuoteData {
        content: vec![String::new(), "  ".to_string(), "Kept".to_string()],
        cite: None,
    })]);
    assert_snapshot!(html, @"<blockquote><p>Kept</p></blockquote>");
}

#[test]
fn test_column_default_size() {
    let html = unserialize(r#"{"blocks":[{"type":"column","data":{"content":[]}}]}"#);
    assert_eq!(html, r#"<div class="column column-12"></div>"#);

    let html = blocks_to_html(vec![Block::Column(ColumnData {
        content: vec![Block::paragraph("Wide")],
        size: None,
        total: 12,
    })]);
    assert_eq!(html, r#"<div class="column column-12"><p>Wide</p></div>"#);
}

#[test]
fn test_nested_layers() {
    let html = blocks_to_html(vec![Block::layer(vec![
        Block::paragraph("Outer"),
        Block::layer(vec![Block::Delimiter, Block::paragraph("Inner")]),
    ])]);
    assert_snapshot!(html, @r"
    <div><p>Outer</p>
    <div><hr>
    <p>Inner</p></div></div>
    ");
}

#[test]
fn test_leaf_markup_is_not_escaped() {
    let html = blocks_to_html(vec![
        Block::paragraph("a <strong>b</strong> &amp; c"),
        Block::embed("<iframe src=\"/x\"></iframe>"),
    ]);
    assert_eq!(
        html,
        "<p>a <strong>b</strong> &amp; c</p>\n<figure><iframe src=\"/x\"></iframe></figure>"
    );
}
