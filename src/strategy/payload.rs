//! The data payload carried by every envelope
//!
//! Strategies work with their own typed records and convert them here, so the
//! generic map form only appears at the envelope boundary.

use crate::strategy::{StrategyError, StrategyResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Error message reported for an unregistered source category
pub const UNKNOWN_SOURCE: &str = "Unknown source";

/// Field name used for error reporting inside a payload
const ERROR_FIELD: &str = "error";

/// A mapping from field name to a JSON value
///
/// Serializes as a plain JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataPayload(Map<String, Value>);

impl DataPayload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Converts a typed strategy record into a payload
    ///
    /// Fails with `Malformed` if the record does not serialize to a JSON object.
    pub fn from_record<T: Serialize>(record: &T) -> StrategyResult<Self> {
        match serde_json::to_value(record) {
            Ok(Value::Object(map)) => Ok(Self(map)),
            Ok(other) => Err(StrategyError::Malformed {
                message: format!("record serialized to a non-object value: {}", other),
            }),
            Err(e) => Err(StrategyError::Malformed {
                message: e.to_string(),
            }),
        }
    }

    /// Payload reported when no strategy is registered for a category
    pub fn unknown_source() -> Self {
        let mut payload = Self::new();
        payload.insert(ERROR_FIELD, UNKNOWN_SOURCE);
        payload
    }

    /// Payload reported when a strategy fails
    pub fn failure(class: &str, detail: &str) -> Self {
        let mut payload = Self::new();
        payload.insert(ERROR_FIELD, class);
        payload.insert("detail", detail);
        payload
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns true if this payload reports a failure
    pub fn is_error(&self) -> bool {
        self.0.contains_key(ERROR_FIELD)
    }

    /// Returns the `error` field, if present and a string
    pub fn error_message(&self) -> Option<&str> {
        self.0.get(ERROR_FIELD).and_then(Value::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
