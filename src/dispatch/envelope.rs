//! Result envelope
//!
//! The envelope is the only artifact a run hands back to its caller. It is
//! built once from a finished payload and exposes no way to change it.

use crate::strategy::DataPayload;
use crate::ReconError;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A source-tagged, timestamped payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultEnvelope {
    source: String,
    data: DataPayload,
    timestamp: String,
}

impl ResultEnvelope {
    /// Wraps a payload, stamping it with the current time
    pub fn build(source: impl Into<String>, data: DataPayload) -> Self {
        Self::build_at(source, data, Utc::now())
    }

    /// Wraps a payload, stamping it with the given time
    ///
    /// The timestamp is rendered as RFC 3339 in UTC with second precision.
    pub fn build_at(source: impl Into<String>, data: DataPayload, at: DateTime<Utc>) -> Self {
        Self {
            source: source.into(),
            data,
            timestamp: at.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn data(&self) -> &DataPayload {
        &self.data
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Returns the capture time parsed back from the timestamp
    pub fn captured_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.timestamp)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Encodes the envelope as a single line of compact JSON
    pub fn to_json_line(&self) -> Result<String, ReconError> {
        Ok(serde_json::to_string(self)?)
    }
}
