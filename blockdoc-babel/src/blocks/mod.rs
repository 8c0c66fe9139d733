//! Block document model.
//!
//! The block sequence is the pivot every format converts to and from. Decoding
//! from JSON is lenient: unknown block types, and known types whose payload
//! cannot be decoded, are dropped instead of failing the whole document. Inside
//! a payload, a mistyped field falls back to its default on its own.

mod lenient;
pub mod nodes;

pub use nodes::{
    Block, ColumnData, ContainerData, EmbedData, HeaderData, ImageData, Link, QuoteData,
    TextData, COLUMNS_COUNT,
};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

/// An ordered sequence of blocks.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Decodes a JSON array of blocks, skipping anything that is not a usable block.
///
/// A non-array value decodes to an empty sequence.
pub fn decode_blocks(value: &Value) -> Vec<Block> {
    match value.as_array() {
        Some(items) => items.iter().filter_map(decode_block).collect(),
        None => Vec::new(),
    }
}

/// Decodes a single block, or `None` if its type is unknown or its payload unusable.
pub fn decode_block(value: &Value) -> Option<Block> {
    let Some(kind) = value.get("type").and_then(Value::as_str) else {
        tracing::debug!("skipping block without a type tag");
        return None;
    };

    // Missing or null payloads fall back to field defaults.
    let data = match value.get("data") {
        Some(Value::Null) | None => Value::Object(Map::new()),
        Some(data) => data.clone(),
    };

    let decoded = match kind {
        "paragraph" => payload(data).map(Block::Paragraph),
        "delimiter" => Ok(Block::Delimiter),
        "code" => payload(data).map(Block::Code),
        "header" => payload(data).map(Block::Header),
        "quote" => payload(data).map(Block::Quote),
        "layer" => payload(data).map(Block::Layer),
        "columns" => payload(data).map(Block::Columns),
        "column" => payload(data).map(Block::Column),
        "embed" => payload(data).map(Block::Embed),
        "image" => payload(data).map(Block::Image),
        other => {
            tracing::debug!(block_type = other, "skipping unknown block type");
            return None;
        }
    };

    match decoded {
        Ok(block) => Some(block),
        Err(err) => {
            tracing::debug!(block_type = kind, error = %err, "skipping undecodable block");
            None
        }
    }
}

fn payload<T: DeserializeOwned>(data: Value) -> Result<T, serde_json::Error> {
    serde_json::from_value(data)
}
