//! HTML parsing (HTML → blocks import)
//!
//! Parses author HTML into a block document.
//! Pipeline: HTML string → RcDom → recursive walk → Vec<Block>
//!
//! Only a fixed set of block-level elements is recognized. Everything else is
//! skipped together with its content, so unknown wrappers hide what they wrap.

use crate::blocks::{Block, Document, ImageData, Link, QuoteData, COLUMNS_COUNT};
use crate::error::FormatError;
use crate::fragment::{collapse_whitespace, inner_markup, outer_markup, trim_markup, Whitespace};
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use once_cell::sync::Lazy;
use regex::Regex;

static COLUMN_SIZE_CLASS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^column-([0-9]{1,2})$").expect("valid regex"));

/// Parse an HTML string (document or fragment) into a block document
pub fn parse_from_html(source: &str) -> Result<Document, FormatError> {
    let dom = parse_document(RcDom::default(), Default::default()).one(source);

    let parse_errors = dom.errors.borrow().len();
    if parse_errors > 0 {
        tracing::debug!(parse_errors, "recovered from malformed HTML");
    }

    let blocks = walk(&dom.document)?;
    Ok(Document::new(blocks))
}

/// Convert the element children of `node` into blocks
fn walk(node: &Handle) -> Result<Vec<Block>, FormatError> {
    let mut blocks = Vec::new();

    for child in node.children.borrow().iter() {
        let Some(tag) = element_name(child) else {
            continue;
        };

        match tag.as_str() {
            // Document wrappers: their content is the document
            "html" | "body" => return walk(child),
            "p" => blocks.push(Block::paragraph(inner_markup(child, Whitespace::Collapse)?)),
            "hr" => blocks.push(Block::Delimiter),
            "pre" => {
                let text = inner_markup(child, Whitespace::Preserve)?;
                blocks.push(Block::code(trim_markup(&text)));
            }
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                let level = tag[1..].parse::<i64>().unwrap_or(1);
                let text = inner_markup(child, Whitespace::Collapse)?;
                blocks.push(Block::header(text, level));
            }
            "blockquote" => blocks.extend(parse_quote(child)?),
            "figure" => blocks.extend(parse_figure(child)?),
            "div" => blocks.push(parse_div(child)?),
            other => tracing::trace!(tag = other, "skipping unsupported element"),
        }
    }

    Ok(blocks)
}

/// Quote text comes from the text runs of the quote's paragraphs; a `cite`
/// anywhere in those paragraphs (or directly in the quote) is the citation.
fn parse_quote(node: &Handle) -> Result<Option<Block>, FormatError> {
    let mut content = Vec::new();
    let mut cite = None;

    for child in node.children.borrow().iter() {
        match element_name(child).as_deref() {
            Some("p") => {
                for part in child.children.borrow().iter() {
                    match &part.data {
                        NodeData::Text { .. } => {
                            let text = collapse_whitespace(&outer_markup(part)?);
                            if !text.is_empty() {
                                content.push(text);
                            }
                        }
                        NodeData::Element { .. } if is_element(part, "cite") => {
                            cite = non_empty(inner_markup(part, Whitespace::Collapse)?);
                        }
                        _ => {}
                    }
                }
            }
            Some("cite") => cite = non_empty(inner_markup(child, Whitespace::Collapse)?),
            _ => {}
        }
    }

    if content.is_empty() {
        tracing::debug!("skipping blockquote without quoted text");
        return Ok(None);
    }

    Ok(Some(Block::Quote(QuoteData { content, cite })))
}

/// A figure holding an image (directly or inside a link) becomes an image
/// block; any other figure is kept verbatim as an embed.
fn parse_figure(node: &Handle) -> Result<Option<Block>, FormatError> {
    let mut image = ImageData::default();
    let mut has_image = false;

    for child in node.children.borrow().iter() {
        match element_name(child).as_deref() {
            Some("img") => {
                apply_image_attributes(&mut image, child);
                has_image = true;
            }
            Some("figcaption") => {
                image.caption = non_empty(inner_markup(child, Whitespace::Collapse)?);
            }
            Some("a") => {
                if let Some(href) = attribute(child, "href") {
                    image.link = Some(Link {
                        href,
                        target: attribute(child, "target"),
                    });
                }
                for inner in child.children.borrow().iter() {
                    if is_element(inner, "img") {
                        apply_image_attributes(&mut image, inner);
                        has_image = true;
                    }
                }
            }
            _ => {}
        }
    }

    if has_image {
        return Ok(Some(Block::Image(image)));
    }

    let content = inner_markup(node, Whitespace::Collapse)?;
    if content.is_empty() {
        tracing::debug!("skipping empty figure");
        return Ok(None);
    }

    Ok(Some(Block::embed(content)))
}

/// Later images override earlier ones attribute by attribute.
fn apply_image_attributes(image: &mut ImageData, img: &Handle) {
    image.src = attribute(img, "src");
    image.alt = attribute(img, "alt");
    image.id = attribute(img, "data-image");
}

/// `grid` makes a columns container, `column` (with an optional `column-N`
/// width) a column, anything else a plain layer.
fn parse_div(node: &Handle) -> Result<Block, FormatError> {
    let class = attribute(node, "class").unwrap_or_default();
    let classes: Vec<&str> = class.split_whitespace().collect();
    let content = walk(node)?;

    if classes.contains(&"column") {
        let size = classes
            .iter()
            .filter_map(|class| COLUMN_SIZE_CLASS.captures(class))
            .filter_map(|captures| captures[1].parse::<u32>().ok())
            .last()
            .unwrap_or(COLUMNS_COUNT);
        return Ok(Block::column(content, size));
    }

    if classes.contains(&"grid") {
        return Ok(Block::columns(content));
    }

    Ok(Block::layer(content))
}

fn element_name(node: &Handle) -> Option<String> {
    match &node.data {
        NodeData::Element { name, .. } => Some(name.local.to_string()),
        _ => None,
    }
}

fn is_element(node: &Handle, tag: &str) -> bool {
    matches!(&node.data, NodeData::Element { name, .. } if &*name.local == tag)
}

/// Non-empty attribute value of an element
fn attribute(node: &Handle, attr: &str) -> Option<String> {
    let NodeData::Element { attrs, .. } = &node.data else {
        return None;
    };
    attrs
        .borrow()
        .iter()
        .find(|a| &*a.name.local == attr)
        .map(|a| a.value.to_string())
        .filter(|value| !value.is_empty())
}

fn non_empty(text: String) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
