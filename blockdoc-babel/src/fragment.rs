//! Inner-markup extraction for parsed HTML nodes
//!
//! Leaf blocks store their content as raw markup. The markup of a node's
//! content is produced by serializing each child with the html5ever serializer
//! and concatenating the results, so the node's own tags never need to be
//! stripped from a serialized string.

use crate::error::FormatError;
use html5ever::{serialize, serialize::SerializeOpts, serialize::TraversalScope};
use markup5ever_rcdom::{Handle, SerializableHandle};
use once_cell::sync::Lazy;
use regex::Regex;

/// A line break or tab together with the indentation that follows it.
static LINE_BREAK_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\t\r\n][\t\n\x0B\x0C\r ]*").expect("valid regex"));

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\t\n\x0B\x0C\r ]+").expect("valid regex"));

/// How whitespace in extracted markup is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Whitespace {
    /// Drop line breaks with their indentation, squeeze spaces, trim.
    Collapse,
    /// Keep the markup exactly as serialized.
    Preserve,
}

/// Serialize the children of `node` and concatenate them.
pub fn inner_markup(node: &Handle, whitespace: Whitespace) -> Result<String, FormatError> {
    let mut markup = String::new();
    for child in node.children.borrow().iter() {
        markup.push_str(&outer_markup(child)?);
    }

    Ok(match whitespace {
        Whitespace::Collapse => collapse_whitespace(&markup),
        Whitespace::Preserve => markup,
    })
}

/// Serialize `node` including its own tags (or escaped text, for text nodes).
pub fn outer_markup(node: &Handle) -> Result<String, FormatError> {
    let mut output = Vec::new();
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::IncludeNode,
        ..Default::default()
    };

    let serializable = SerializableHandle::from(node.clone());
    serialize(&mut output, &serializable, opts).map_err(|e| {
        FormatError::ResourceExhausted(format!("HTML serialization failed: {e}"))
    })?;

    String::from_utf8(output)
        .map_err(|e| FormatError::MalformedInput(format!("UTF-8 conversion failed: {e}")))
}

/// Normalize whitespace the way leaf block text is stored.
///
/// Line breaks and tabs are removed along with any whitespace after them, the
/// remaining runs become a single space, and the ends are trimmed.
pub fn collapse_whitespace(markup: &str) -> String {
    let joined = LINE_BREAK_RUN.replace_all(markup, "");
    let squeezed = WHITESPACE_RUN.replace_all(&joined, " ");
    trim_markup(&squeezed).to_string()
}

/// Trim the ASCII whitespace and NUL bytes surrounding extracted markup.
pub fn trim_markup(markup: &str) -> &str {
    markup.trim_matches(|c| matches!(c, ' ' | '\t' | '\n' | '\r' | '\0' | '\x0B'))
}
