//! Request body normalization and field extraction.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::notify::render::{is_truthy, render, Rendered};

/// Substituted for a missing target or entity id.
pub const PLACEHOLDER: &str = "-";

/// `datetime.isoformat()`-style UTC timestamp with microseconds, no offset.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Why a body was replaced by an empty mapping.
#[derive(Debug, Error)]
pub enum BodyError {
    #[error("body is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("body is JSON but not an object")]
    NotAnObject,
}

/// Decode a raw body into a JSON object.
///
/// An empty or whitespace-only body decodes to an empty mapping without error.
pub fn decode_body(raw: &[u8]) -> Result<Map<String, Value>, BodyError> {
    if raw.iter().all(u8::is_ascii_whitespace) {
        return Ok(Map::new());
    }
    match serde_json::from_slice(raw)? {
        Value::Object(map) => Ok(map),
        _ => Err(BodyError::NotAnObject),
    }
}

/// Lowercase every top-level key. A later key wins over an earlier one that
/// folds to the same name.
pub fn fold_keys(fields: Map<String, Value>) -> Map<String, Value> {
    fields
        .into_iter()
        .map(|(key, value)| (key.to_lowercase(), value))
        .collect()
}

/// One received notification, ready to be written to the sink.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationRecord {
    pub target: String,
    pub entity_id: String,
    pub occurrence_id: Option<Value>,
    pub title: String,
    pub latitude: Option<Value>,
    pub longitude: Option<Value>,
    pub message: String,
}

impl NotificationRecord {
    /// Build a record from an already case-folded mapping.
    pub fn from_fields(fields: &Map<String, Value>) -> Self {
        let truthy = |key: &str| fields.get(key).filter(|v| is_truthy(v));
        let present = |key: &str| fields.get(key).filter(|v| !v.is_null()).cloned();

        let target = truthy("entityname")
            .or_else(|| truthy("type"))
            .map(render)
            .unwrap_or_else(|| PLACEHOLDER.to_string());

        let entity_id = truthy("entityid")
            .map(render)
            .unwrap_or_else(|| PLACEHOLDER.to_string());

        Self {
            target,
            entity_id,
            occurrence_id: present("occurrenceid"),
            title: fields.get("title").map(render).unwrap_or_default(),
            latitude: present("latitude"),
            longitude: present("longitude"),
            message: fields.get("message").map(render).unwrap_or_default(),
        }
    }

    /// Decode, fold and extract in one step, degrading bad bodies to defaults.
    pub fn from_body(raw: &[u8]) -> Self {
        let fields = decode_body(raw).unwrap_or_default();
        Self::from_fields(&fold_keys(fields))
    }

    /// Format the sink line for this record.
    pub fn log_line(&self, at: DateTime<Utc>) -> String {
        format!(
            "[{}] -> {} (EntId:{}) | Occ:{} | {} @ ({},{}) :: {}",
            at.format(TIMESTAMP_FORMAT),
            self.target,
            self.entity_id,
            Rendered(self.occurrence_id.as_ref()),
            self.title,
            Rendered(self.latitude.as_ref()),
            Rendered(self.longitude.as_ref()),
            self.message,
        )
    }
}

impl Default for NotificationRecord {
    fn default() -> Self {
        Self::from_fields(&Map::new())
    }
}
