//! Versioned, checksummed wrapper around a block sequence
//!
//! The envelope is the storage form of a block document:
//!
//! ```json
//! {"version":"0.2","time":1700000000,"checksum":"…","blocks":[…]}
//! ```
//!
//! The checksum is a SHA-256 hex digest of the compact JSON encoding of
//! `blocks`, computed before any envelope field is attached. Readers that only
//! need the blocks ignore the metadata; [`Envelope::verify`] recomputes it.

use crate::blocks::{decode_blocks, Block};
use crate::error::FormatError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};

/// Schema version stamped on every envelope.
pub const VERSION: &str = "0.2";

/// Output layout for encoded envelopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    /// Indented, one field per line
    #[default]
    Pretty,
    /// Single line
    Compact,
}

impl JsonStyle {
    /// Map a `pretty` flag to a style.
    pub fn from_pretty(pretty: bool) -> Self {
        if pretty {
            JsonStyle::Pretty
        } else {
            JsonStyle::Compact
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope {
    pub version: String,
    /// Creation time in seconds since the Unix epoch.
    pub time: i64,
    pub checksum: String,
    pub blocks: Vec<Block>,
}

impl Envelope {
    /// Wrap `blocks`, stamping the current time and their checksum.
    pub fn seal(blocks: Vec<Block>) -> Result<Self, FormatError> {
        Self::seal_at(blocks, chrono::Utc::now().timestamp())
    }

    /// Wrap `blocks` with an explicit timestamp.
    pub fn seal_at(blocks: Vec<Block>, time: i64) -> Result<Self, FormatError> {
        let checksum = checksum(&blocks)?;
        Ok(Self {
            version: VERSION.to_string(),
            time,
            checksum,
            blocks,
        })
    }

    /// Decode an envelope, requiring well-formed JSON.
    ///
    /// Missing metadata decodes as empty values and blocks are decoded
    /// leniently, so only a syntactically broken document is an error.
    pub fn from_json(source: &str) -> Result<Self, FormatError> {
        let value = read_value(source)?;

        Ok(Self {
            version: string_field(&value, "version"),
            time: value.get("time").and_then(Value::as_i64).unwrap_or_default(),
            checksum: string_field(&value, "checksum"),
            blocks: value.get("blocks").map(decode_blocks).unwrap_or_default(),
        })
    }

    /// Encode the envelope in the given style.
    pub fn to_json(&self, style: JsonStyle) -> Result<String, FormatError> {
        let encoded = match style {
            JsonStyle::Pretty => serde_json::to_string_pretty(self),
            JsonStyle::Compact => serde_json::to_string(self),
        };
        encoded.map_err(|e| FormatError::Serialization(format!("envelope encoding failed: {e}")))
    }

    /// Whether the stored checksum matches the blocks.
    ///
    /// Blocks of types this crate does not know are dropped while decoding,
    /// so envelopes carrying them never verify.
    pub fn verify(&self) -> Result<bool, FormatError> {
        Ok(checksum(&self.blocks)? == self.checksum)
    }
}

/// Parse a JSON document of any nesting depth.
///
/// Nested layers and columns map one-to-one onto nested JSON objects, so the
/// parser's default depth limit is lifted and the stack grows on demand.
pub(crate) fn read_value(source: &str) -> Result<Value, serde_json::Error> {
    let mut de = serde_json::Deserializer::from_str(source);
    de.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Ok(value)
}

fn string_field(value: &Value, name: &str) -> String {
    value
        .get(name)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// SHA-256 hex digest of the compact JSON encoding of `blocks`.
pub fn checksum(blocks: &[Block]) -> Result<String, FormatError> {
    let canonical = serde_json::to_vec(blocks)
        .map_err(|e| FormatError::Serialization(format!("block encoding failed: {e}")))?;

    let mut hasher = Sha256::new();
    hasher.update(&canonical);
    Ok(hex::encode(hasher.finalize()))
}
