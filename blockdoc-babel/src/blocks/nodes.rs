//! Typed block records.
//!
//! Every block is a `type` tag plus a `data` payload. The payload shape is fixed
//! per type, so each variant of [`Block`] carries its own struct and the JSON
//! encoding is derived from it:
//!
//! ```json
//! {"type":"header","data":{"text":"Title","level":2}}
//! {"type":"delimiter"}
//! ```
//!
//! Field declaration order is the JSON field order, which keeps the encoding
//! canonical for checksumming.

use super::lenient;
use serde::{Deserialize, Serialize};

/// Number of grid units a `columns` container is divided into.
pub const COLUMNS_COUNT: u32 = 12;

/// A single unit of content.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum Block {
    Paragraph(TextData),
    Delimiter,
    Code(TextData),
    Header(HeaderData),
    Quote(QuoteData),
    Layer(ContainerData),
    Columns(ContainerData),
    Column(ColumnData),
    Embed(EmbedData),
    Image(ImageData),
}

impl Block {
    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph(TextData { text: text.into() })
    }

    pub fn code(text: impl Into<String>) -> Self {
        Block::Code(TextData { text: text.into() })
    }

    /// Builds a header, clamping `level` into `1..=6`.
    pub fn header(text: impl Into<String>, level: i64) -> Self {
        Block::Header(HeaderData {
            text: text.into(),
            level: clamp_level(level),
        })
    }

    pub fn layer(content: Vec<Block>) -> Self {
        Block::Layer(ContainerData { content })
    }

    pub fn columns(content: Vec<Block>) -> Self {
        Block::Columns(ContainerData { content })
    }

    pub fn column(content: Vec<Block>, size: u32) -> Self {
        Block::Column(ColumnData {
            content,
            size: Some(size),
            total: COLUMNS_COUNT,
        })
    }

    pub fn embed(content: impl Into<String>) -> Self {
        Block::Embed(EmbedData {
            content: content.into(),
        })
    }
}

/// Clamps a heading level into the range HTML can express.
pub fn clamp_level(level: i64) -> u8 {
    // The clamp guarantees the value fits.
    level.clamp(1, 6) as u8
}

/// Payload of `paragraph` and `code` blocks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextData {
    #[serde(default, deserialize_with = "lenient::text")]
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderData {
    #[serde(default, deserialize_with = "lenient::text")]
    pub text: String,
    #[serde(default = "default_level", deserialize_with = "lenient::level")]
    pub level: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteData {
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub content: Vec<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::optional_text"
    )]
    pub cite: Option<String>,
}

/// Payload of `layer` and `columns` blocks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContainerData {
    #[serde(default, deserialize_with = "lenient::blocks")]
    pub content: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnData {
    #[serde(default, deserialize_with = "lenient::blocks")]
    pub content: Vec<Block>,
    /// Absent only in hand-written documents; rendering falls back to the full width.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::size"
    )]
    pub size: Option<u32>,
    #[serde(default = "default_total", deserialize_with = "lenient::total")]
    pub total: u32,
}

impl ColumnData {
    pub fn size_or_default(&self) -> u32 {
        self.size.unwrap_or(COLUMNS_COUNT)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmbedData {
    #[serde(default, deserialize_with = "lenient::text")]
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageData {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::optional_text"
    )]
    pub src: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::optional_text"
    )]
    pub alt: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::optional_text"
    )]
    pub id: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::optional_text"
    )]
    pub caption: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::link"
    )]
    pub link: Option<Link>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Link {
    #[serde(default, deserialize_with = "lenient::text")]
    pub href: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::optional_text"
    )]
    pub target: Option<String>,
}

fn default_level() -> u8 {
    1
}

fn default_total() -> u32 {
    COLUMNS_COUNT
}
