//! Import tests for the HTML format (HTML → blocks)

use blockdoc_babel::blocks::{Block, ColumnData, ImageData, Link, QuoteData};
use blockdoc_babel::format::Format;
use blockdoc_babel::formats::html::HtmlFormat;

const SAMPLE: &str = include_str!("fixtures/sample.html");

fn html_to_blocks(html: &str) -> Vec<Block> {
    HtmlFormat.parse(html).unwrap().blocks
}

#[test]
fn test_sample_document() {
    let blocks = html_to_blocks(SAMPLE);

    let expected = vec![
        Block::header("This is an H1 Heading", 1),
        Block::header("This is an H2 Heading", 2),
        Block::paragraph("This is a paragraph"),
        Block::Delimiter,
        Block::code(
            "(function(){\n        console.log('this is some code');\n    })();",
        ),
        Block::Quote(QuoteData {
            content: vec!["This is a quote".to_string()],
            cite: Some("This is the quote citation".to_string()),
        }),
        Block::columns(vec![
            Block::column(vec![Block::paragraph("8/12 column")], 8),
            Block::column(vec![Block::paragraph("4/12 column")], 4),
        ]),
        Block::layer(vec![Block::paragraph("This is a layer")]),
        Block::Image(ImageData {
            src: Some("/img.jpg".to_string()),
            alt: Some("Alt Text".to_string()),
            caption: Some("Picture Caption".to_string()),
            ..Default::default()
        }),
        Block::Image(ImageData {
            src: Some("/img.jpg".to_string()),
            alt: Some("Alt Text".to_string()),
            caption: Some("Picture Caption".to_string()),
            link: Some(Link {
                href: "/".to_string(),
                target: Some("_blank".to_string()),
            }),
            ..Default::default()
        }),
        Block::embed(r#"<div class="embed-responsive">test</div>"#),
    ];

    assert_eq!(blocks, expected);
}

#[test]
fn test_grid_column_paragraph() {
    let blocks =
        html_to_blocks(r#"<div class="grid"><div class="column column-8"><p>A</p></div></div>"#);

    assert_eq!(blocks.len(), 1);
    let Block::Columns(grid) = &blocks[0] else {
        panic!("expected columns, got {:?}", blocks[0]);
    };
    assert_eq!(
        grid.content,
        vec![Block::Column(ColumnData {
            content: vec![Block::paragraph("A")],
            size: Some(8),
            total: 12,
        })]
    );
}

#[test]
fn test_column_classes_in_any_order() {
    let blocks = html_to_blocks(r#"<div class="column-3 wide column"><p>A</p></div>"#);
    assert_eq!(blocks, vec![Block::column(vec![Block::paragraph("A")], 3)]);
}

#[test]
fn test_column_size_needs_exact_class() {
    let blocks = html_to_blocks(r#"<div class="column xcolumn-3 column-123"></div>"#);
    assert_eq!(blocks, vec![Block::column(vec![], 12)]);
}

#[test]
fn test_wrapped_content_is_hidden() {
    let blocks = html_to_blocks("<section><p>Hidden</p></section><p>Shown</p>");
    assert_eq!(blocks, vec![Block::paragraph("Shown")]);
}

#[test]
fn test_quote_with_only_citation_is_dropped() {
    let blocks = html_to_blocks("<blockquote><p><cite>Nobody</cite></p></blockquote><hr>");
    assert_eq!(blocks, vec![Block::Delimiter]);
}

#[test]
fn test_image_id_from_data_attribute() {
    let blocks = html_to_blocks(r#"<figure><img src="/a.png" data-image="42"></figure>"#);
    assert_eq!(
        blocks,
        vec![Block::Image(ImageData {
            src: Some("/a.png".to_string()),
            id: Some("42".to_string()),
            ..Default::default()
        })]
    );
}

#[test]
fn test_whitespace_only_input() {
    assert!(html_to_blocks("  \n\t ").is_empty());
}
