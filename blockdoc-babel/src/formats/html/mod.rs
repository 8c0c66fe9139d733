//! HTML format implementation
//!
//! This module implements bidirectional conversion between author HTML and the
//! block document.
//!
//! # Library Choice
//!
//! We use the `html5ever` + `markup5ever_rcdom` ecosystem for HTML parsing and
//! for re-serializing leaf content:
//! - `html5ever`: Browser-grade HTML5 parser from the Servo project
//! - `markup5ever_rcdom`: Reference-counted DOM tree implementation
//!
//! The parser handles malformed HTML gracefully, so import never fails on bad
//! markup; it produces a best-effort tree instead.
//!
//! # Element Mapping Table
//!
//! | Block      | HTML                                                       | Import Notes                                   |
//! |------------|------------------------------------------------------------|------------------------------------------------|
//! | paragraph  | `<p>`                                                      | inner markup, whitespace collapsed             |
//! | delimiter  | `<hr>`                                                     |                                                |
//! | code       | `<pre>`                                                    | inner markup verbatim, trimmed                 |
//! | header     | `<h1>`..`<h6>`                                             | level from the tag                             |
//! | quote      | `<blockquote><p>..</p><p><cite>..</cite></p></blockquote>` | text runs of the paragraphs; dropped if empty  |
//! | layer      | `<div>`                                                    | children walked recursively                    |
//! | columns    | `<div class="grid">`                                       |                                                |
//! | column     | `<div class="column column-N">`                            | N defaults to 12                               |
//! | embed      | `<figure>..</figure>`                                      | any figure without an image, kept verbatim     |
//! | image      | `<figure>[<a>]<img>[</a>][<figcaption>]</figure>`          | `data-image` attribute is the image id         |
//!
//! Any other element is skipped together with its content.
//!
//! # Lossy Conversions
//!
//! - Line breaks and indentation inside leaf text are removed
//! - Unknown elements, attributes and classes are dropped
//! - Inline markup inside quotes is reduced to its text runs

mod parser;
mod serializer;

pub use parser::parse_from_html;
pub use serializer::serialize_to_html;

use crate::blocks::Document;
use crate::error::FormatError;
use crate::format::Format;

/// Format implementation for HTML
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlFormat;

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML fragment of block-level elements"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        parse_from_html(source)
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(serialize_to_html(&doc.blocks))
    }
}
