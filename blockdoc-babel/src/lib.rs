//! Conversion between HTML fragments and block documents
//!
//!     This crate turns an HTML fragment made of block-level elements into an ordered sequence of
//!     typed blocks (paragraph, header, quote, layout containers, media...) wrapped in a versioned,
//!     checksummed JSON envelope, and renders such a block sequence back into HTML.
//!
//!     TLDR:
//!         - serialize(html) walks the HTML tree and seals the blocks in an Envelope.
//!         - unserialize(json) decodes the blocks leniently and renders them as HTML.
//!         - Nothing here fails on bad input: malformed HTML yields a best-effort tree, malformed
//!           JSON yields an empty document.
//!         - Converting the output of one direction back again is a fixed point: html -> blocks ->
//!           html -> blocks produces the same blocks twice.
//!
//! Architecture
//!
//!     The block sequence (./blocks) is the pivot. Every format converts to and from it, so the
//!     format code only deals with its own data shape.
//!
//!     This is a pure lib, that is, it powers blockdoc-cli but is shell agnostic: no code
//!     should be written that supposes a shell environment, be it to std print, env vars etc.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # The built-in formats by name and extension
//!     ├── blocks                  # Block model and lenient JSON decoding
//!     ├── envelope.rs             # Version, timestamp and checksum wrapper
//!     ├── fragment.rs             # Markup extraction helpers over the parsed tree
//!     ├── formats
//!     │   ├── html
//!     │   │   ├── parser.rs       # HTML -> blocks
//!     │   │   ├── serializer.rs   # blocks -> HTML
//!     │   │   └── mod.rs
//!     │   └── json                # Envelope encoding
//!     └── lib.rs
//!
//! Testing
//!     tests
//!     └── <format>
//!         └── <testname>.rs
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include these
//!     in the mod.
//!
//! Formats
//!
//!     Format specific capabilities are implemented with the Format trait. formats have a parse()
//!     and serialize() method, a name and file extensions. See the trait def [./format.rs ]
//!     - Format trait: Uniform interface for HTML and JSON, both directions
//!     - FormatRegistry: Lookup of the two formats and html <-> json conversion
//!
//!     Leaf content (paragraph text, code, embeds) is stored as HTML markup, not plain text. Inline
//!     formatting survives a round trip untouched, but is never interpreted.
//!
//! Library Choices
//!
//!     html5ever does the parsing, so the tree we walk is the one a browser would build, including
//!     its repairs of broken markup. Leaf markup is re-serialized with html5ever's serializer.
//!     serde_json handles the envelope, sha2 the checksum.
//!
pub mod blocks;
pub mod envelope;
pub mod error;
pub mod format;
pub mod formats;
pub mod fragment;
pub mod registry;

pub use blocks::{Block, Document};
pub use envelope::{Envelope, JsonStyle};
pub use error::FormatError;
pub use format::Format;
pub use registry::{FormatRegistry, FORMAT_NAMES};

/// Converts an HTML fragment into a sealed block document.
///
/// Fails only if encoding the blocks for the checksum fails.
pub fn serialize(html: &str) -> Result<Envelope, FormatError> {
    let _span = tracing::debug_span!("serialize", input_len = html.len()).entered();

    let doc = formats::html::parse_from_html(html)?;
    tracing::debug!(blocks = doc.blocks.len(), "sealing block document");
    Envelope::seal(doc.blocks)
}

/// Converts an HTML fragment into the encoded JSON envelope.
pub fn serialize_to_string(html: &str, style: JsonStyle) -> Result<String, FormatError> {
    serialize(html)?.to_json(style)
}

/// Renders a JSON block document as HTML.
///
/// Malformed JSON, a missing `blocks` array, unknown block types and undecodable
/// payloads are skipped; the worst case is an empty string.
pub fn unserialize(json: &str) -> String {
    let _span = tracing::debug_span!("unserialize", input_len = json.len()).entered();

    let doc = formats::json::parse_from_json(json);
    tracing::debug!(blocks = doc.blocks.len(), "rendering block document");
    formats::html::serialize_to_html(&doc.blocks)
}
