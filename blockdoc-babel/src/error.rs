//! Error types for format operations

use thiserror::Error;

/// Errors that can occur during format operations
///
/// Malformed markup and unknown block types are not errors: the transcoder
/// degrades instead. These variants only surface faults of the registry or of
/// the HTML and JSON collaborators.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Input the collaborators could not make sense of
    #[error("Malformed input: {0}")]
    MalformedInput(String),
    /// Collaborator ran out of room while producing output
    #[error("Resource exhausted: {0}")]
    ResourceExhausted(String),
    /// Error during serialization
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// Format does not support the requested operation
    #[error("Operation not supported: {0}")]
    NotSupported(String),
}

impl From<serde_json::Error> for FormatError {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            serde_json::error::Category::Io => FormatError::ResourceExhausted(err.to_string()),
            serde_json::error::Category::Syntax
            | serde_json::error::Category::Data
            | serde_json::error::Category::Eof => FormatError::MalformedInput(err.to_string()),
        }
    }
}
