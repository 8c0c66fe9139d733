//! Field-level decoders for hand-written payloads.
//!
//! A mistyped scalar falls back to the field default instead of failing the
//! whole block, so one bad `level` never discards a header and one bad `size`
//! never discards a column with everything inside it.

use super::nodes::{clamp_level, Block, Link, COLUMNS_COUNT};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Child blocks, decoded one by one so a bad child only drops itself.
pub(super) fn blocks<'de, D>(deserializer: D) -> Result<Vec<Block>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(super::decode_blocks(&Value::deserialize(deserializer)?))
}

/// Strings as-is, numbers and booleans in their JSON spelling, anything else empty.
pub(super) fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

pub(super) fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?))
}

/// Keeps the textual entries of a list; a lone scalar counts as a one-entry list.
pub(super) fn text_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items.into_iter().filter_map(scalar_text).collect(),
        other => scalar_text(other).into_iter().collect(),
    })
}

pub(super) fn level<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(integer(&value).map_or(1, clamp_level))
}

/// Column width; anything that is not a non-negative integer is treated as absent.
pub(super) fn size<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(integer(&value).and_then(|n| u32::try_from(n).ok()))
}

pub(super) fn total<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(integer(&value)
        .and_then(|n| u32::try_from(n).ok())
        .unwrap_or(COLUMNS_COUNT))
}

/// Image link; only an object counts, its own fields being lenient.
pub(super) fn link<'de, D>(deserializer: D) -> Result<Option<Link>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => Ok(serde_json::from_value(value).ok()),
        _ => Ok(None),
    }
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Integers, floats (truncated) and numeric strings.
fn integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| truncate(n.as_f64()?)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| truncate(s.parse::<f64>().ok()?))
        }
        _ => None,
    }
}

fn truncate(n: f64) -> Option<i64> {
    // Saturating cast; clamping happens at the call site.
    n.is_finite().then_some(n as i64)
}
