//! Lookup of the built-in formats by name or by file extension.

use crate::envelope::JsonStyle;
use crate::error::FormatError;
use crate::format::Format;
use crate::formats::html::HtmlFormat;
use crate::formats::json::JsonFormat;
use std::collections::HashMap;
use std::path::Path;

/// Names accepted wherever a format is chosen, in listing order.
pub const FORMAT_NAMES: &[&str] = &["html", "json"];

/// The HTML and JSON formats, with the JSON layout fixed at construction.
#[derive(Debug, Default, Clone, Copy)]
pub struct FormatRegistry {
    html: HtmlFormat,
    json: JsonFormat,
}

impl FormatRegistry {
    pub fn new(style: JsonStyle) -> Self {
        Self {
            html: HtmlFormat,
            json: JsonFormat::new(style),
        }
    }

    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        match name {
            "html" => Ok(&self.html),
            "json" => Ok(&self.json),
            other => Err(FormatError::FormatNotFound(other.to_string())),
        }
    }

    /// All formats, in the order of [`FORMAT_NAMES`].
    pub fn formats(&self) -> [&dyn Format; 2] {
        [&self.html, &self.json]
    }

    /// The format owning the extension of `path`, compared case-insensitively.
    pub fn detect(&self, path: &Path) -> Option<&dyn Format> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        self.formats()
            .into_iter()
            .find(|format| format.file_extensions().contains(&extension.as_str()))
    }

    /// Parse `source` as `from` and write it out as `to`.
    pub fn convert(
        &self,
        source: &str,
        from: &str,
        to: &str,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let _span = tracing::debug_span!("convert", from, to).entered();

        let reader = self.get(from)?;
        let writer = self.get(to)?;
        let doc = reader.parse(source)?;
        tracing::debug!(blocks = doc.blocks.len(), "parsed source document");
        writer.serialize_with_options(&doc, options)
    }
}
