//! HTML serialization (blocks → HTML export)
//!
//! Renders a block sequence back into an HTML fragment, one line per block,
//! newline-joined at every nesting level. Leaf content is stored as markup and
//! is inserted as-is; only attribute values are escaped.

use crate::blocks::nodes::clamp_level;
use crate::blocks::{Block, ColumnData, ImageData, QuoteData};
use crate::fragment::trim_markup;

/// Render a block sequence to an HTML fragment
pub fn serialize_to_html(blocks: &[Block]) -> String {
    render(blocks).join("\n")
}

/// One rendered line per block
fn render(blocks: &[Block]) -> Vec<String> {
    blocks.iter().map(render_block).collect()
}

fn render_block(block: &Block) -> String {
    match block {
        Block::Paragraph(data) => format!("<p>{}</p>", data.text),
        Block::Delimiter => "<hr>".to_string(),
        Block::Code(data) => format!("<pre>{}</pre>", data.text),
        Block::Header(data) => {
            let level = clamp_level(i64::from(data.level));
            format!("<h{level}>{}</h{level}>", data.text)
        }
        Block::Quote(data) => render_quote(data),
        Block::Layer(data) => format!("<div>{}</div>", serialize_to_html(&data.content)),
        Block::Columns(data) => format!(
            "<div class=\"grid\">{}</div>",
            serialize_to_html(&data.content)
        ),
        Block::Column(data) => render_column(data),
        Block::Embed(data) => format!("<figure>{}</figure>", data.content),
        Block::Image(data) => render_image(data),
    }
}

fn render_quote(data: &QuoteData) -> String {
    let mut html = String::from("<blockquote>");

    for item in &data.content {
        let item = trim_markup(item);
        if !item.is_empty() {
            html.push_str(&format!("<p>{item}</p>"));
        }
    }

    if let Some(cite) = data.cite.as_deref().filter(|cite| !cite.is_empty()) {
        html.push_str(&format!("<p><cite>{cite}</cite></p>"));
    }

    html.push_str("</blockquote>");
    html
}

fn render_column(data: &ColumnData) -> String {
    format!(
        "<div class=\"column column-{}\">{}</div>",
        data.size_or_default(),
        serialize_to_html(&data.content)
    )
}

fn render_image(data: &ImageData) -> String {
    let mut html = String::from("<figure>");

    if let Some(link) = &data.link {
        html.push_str("<a");
        push_attribute(&mut html, "href", Some(&link.href));
        push_attribute(&mut html, "target", link.target.as_deref());
        html.push('>');
    }

    html.push_str("<img");
    push_attribute(&mut html, "src", data.src.as_deref());
    push_attribute(&mut html, "alt", data.alt.as_deref());
    push_attribute(&mut html, "data-image", data.id.as_deref());
    html.push('>');

    if data.link.is_some() {
        html.push_str("</a>");
    }

    if let Some(caption) = data.caption.as_deref().filter(|c| !c.is_empty()) {
        html.push_str(&format!("<figcaption>{caption}</figcaption>"));
    }

    html.push_str("</figure>");
    html
}

/// Append ` name="value"` when the value is present and non-empty
fn push_attribute(html: &mut String, name: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        html.push_str(&format!(" {name}=\"{}\"", attribute_escape(value)));
    }
}

/// Escape the characters that would end or corrupt a quoted attribute value
fn attribute_escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('"', "&quot;")
}
