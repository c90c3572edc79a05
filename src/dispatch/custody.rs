//! Chain-of-custody records
//!
//! A custody entry pins down exactly what one envelope reported: the digest
//! is the SHA-256 of the payload's compact JSON encoding. `serde_json` keeps
//! object keys sorted, so equal payloads always hash the same.

use crate::dispatch::ResultEnvelope;
use crate::strategy::DataPayload;
use crate::ReconError;
use serde::Serialize;
use sha2::{Digest, Sha256};

/// Collection method recorded for every envelope produced by the engine
pub const COLLECTION_METHOD: &str = "automated_collection";

/// Digest record for one envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustodyEntry {
    pub source: String,
    pub timestamp: String,
    pub digest: String,
    pub method: &'static str,
}

impl CustodyEntry {
    /// Records custody for an envelope
    pub fn record(envelope: &ResultEnvelope) -> Result<Self, ReconError> {
        Ok(Self {
            source: envelope.source().to_string(),
            timestamp: envelope.timestamp().to_string(),
            digest: payload_digest(envelope.data())?,
            method: COLLECTION_METHOD,
        })
    }
}

/// Hex-encoded SHA-256 of a payload's compact JSON encoding
pub fn payload_digest(payload: &DataPayload) -> Result<String, ReconError> {
    let encoded = serde_json::to_vec(payload)?;
    let mut hasher = Sha256::new();
    hasher.update(&encoded);
    Ok(hex::encode(hasher.finalize()))
}
