//! Block document (JSON envelope) format implementation
//!
//! Serializing wraps the blocks in an [`Envelope`] (version, time, checksum).
//! Parsing is lenient: malformed JSON, a missing `blocks` field, unknown block
//! types and undecodable payloads all degrade to fewer blocks instead of an
//! error. The envelope metadata is ignored on import.
//!
//! Options:
//! - `pretty`: `true` (indented, default) or `false` (single line)

use crate::blocks::{decode_blocks, Document};
use crate::envelope::{read_value, Envelope, JsonStyle};
use crate::error::FormatError;
use crate::format::Format;
use std::collections::HashMap;

/// Format implementation for the JSON block document
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonFormat {
    style: JsonStyle,
}

impl JsonFormat {
    pub fn new(style: JsonStyle) -> Self {
        Self { style }
    }
}

/// Decode the blocks of a JSON document, treating anything unusable as empty
pub fn parse_from_json(source: &str) -> Document {
    match read_value(source) {
        Ok(value) => Document::new(value.get("blocks").map(decode_blocks).unwrap_or_default()),
        Err(err) => {
            tracing::debug!(error = %err, "treating malformed block document as empty");
            Document::default()
        }
    }
}

/// Seal the blocks into a fresh envelope and encode it
pub fn serialize_to_json(doc: &Document, style: JsonStyle) -> Result<String, FormatError> {
    Envelope::seal(doc.blocks.clone())?.to_json(style)
}

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Versioned, checksummed JSON block document"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json", "blocks"]
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        Ok(parse_from_json(source))
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        serialize_to_json(doc, self.style)
    }

    fn serialize_with_options(
        &self,
        doc: &Document,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let mut style = self.style;

        for (key, value) in options {
            match key.as_str() {
                "pretty" => style = JsonStyle::from_pretty(parse_bool_option(key, value)?),
                other => {
                    return Err(FormatError::NotSupported(format!(
                        "Format 'json' does not support parameter '{other}'"
                    )))
                }
            }
        }

        serialize_to_json(doc, style)
    }
}

fn parse_bool_option(key: &str, value: &str) -> Result<bool, FormatError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(FormatError::NotSupported(format!(
            "Invalid value '{value}' for parameter '{key}'"
        ))),
    }
}
