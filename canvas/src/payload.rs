//! Drag-and-drop payload codec.
//!
//! A dragged polygon travels through the platform drag-data channel as
//! `text/plain` JSON: `{"type":"polygon","points":[..],"color":".."}`.
//! Anything without the `polygon` tag is rejected so the drop is ignored.

#[cfg(test)]
#[path = "payload_test.rs"]
mod payload_test;

use serde::{Deserialize, Serialize};

use crate::consts::PAYLOAD_TYPE;
use crate::doc::ObjectId;
use crate::polygon::PolygonDescriptor;

/// MIME type the payload is stored under.
pub const PAYLOAD_MIME: &str = "text/plain";

/// Errors from decoding a drop payload.
#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("payload is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("payload type {0:?} is not a polygon")]
    WrongType(Option<String>),
    #[error("no tray item or placed polygon with id {0}")]
    UnknownSource(ObjectId),
}

#[derive(Serialize, Deserialize)]
struct Wire {
    #[serde(rename = "type")]
    kind: String,
    points: Vec<String>,
    color: String,
}

/// Encode a descriptor as drag data.
///
/// # Errors
///
/// Returns [`PayloadError::Malformed`] if serialization fails.
pub fn encode(descriptor: &PolygonDescriptor) -> Result<String, PayloadError> {
    let wire = Wire {
        kind: PAYLOAD_TYPE.to_owned(),
        points: descriptor.points.clone(),
        color: descriptor.color.clone(),
    };
    Ok(serde_json::to_string(&wire)?)
}

/// Decode drag data into a descriptor.
///
/// # Errors
///
/// Returns [`PayloadError::Malformed`] for invalid JSON or missing fields, and
/// [`PayloadError::WrongType`] when the `type` tag is absent or not `polygon`.
pub fn decode(raw: &str) -> Result<PolygonDescriptor, PayloadError> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    let tag = value.get("type").and_then(serde_json::Value::as_str);
    if tag != Some(PAYLOAD_TYPE) {
        return Err(PayloadError::WrongType(tag.map(str::to_owned)));
    }
    let wire: Wire = serde_json::from_value(value)?;
    Ok(PolygonDescriptor { points: wire.points, color: wire.color })
}
