//! The seam between the block model and a text representation of it.

use crate::blocks::Document;
use crate::error::FormatError;
use std::collections::HashMap;

/// A text representation of a block [`Document`], readable and writable.
pub trait Format: Send + Sync {
    /// Name used on the command line and in the registry
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// Extensions without the leading dot, lowercase
    fn file_extensions(&self) -> &[&str];

    fn parse(&self, source: &str) -> Result<Document, FormatError>;

    fn serialize(&self, doc: &Document) -> Result<String, FormatError>;

    /// Serialize with `key=value` options. Formats without options reject every key.
    fn serialize_with_options(
        &self,
        doc: &Document,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        match options.keys().next() {
            None => self.serialize(doc),
            Some(key) => Err(FormatError::NotSupported(format!(
                "Format '{}' does not support parameter '{key}'",
                self.name()
            ))),
        }
    }
}
