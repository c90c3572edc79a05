//! Retrieval strategies and their registry
//!
//! A strategy turns a target into a [`DataPayload`] for one source category.
//! This module contains:
//! - The [`Strategy`] contract and its failure type
//! - The [`StrategyRegistry`] mapping category names to strategies
//! - The baseline simulated strategies (social platforms, public records, forums)
//! - A configurable network-backed probe strategy

mod forums;
mod payload;
mod probe;
mod records;
mod registry;
mod social;

pub use forums::{ForumsRecord, ForumsStrategy};
pub use payload::{DataPayload, UNKNOWN_SOURCE};
pub use probe::{expand_template, ProbeRecord, ProbeStrategy, TARGET_PLACEHOLDER};
pub use records::{PublicRecordsRecord, PublicRecordsStrategy};
pub use registry::StrategyRegistry;
pub use social::{ActivityLevel, SocialPlatformsRecord, SocialPlatformsStrategy};

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

/// Category key for the social platforms strategy
pub const SOCIAL_PLATFORMS: &str = "social_platforms";

/// Category key for the public records strategy
pub const PUBLIC_RECORDS: &str = "public_records";

/// Category key for the forums strategy
pub const FORUMS: &str = "forums";

/// Categories registered by [`StrategyRegistry::with_defaults`]
pub const BASELINE_CATEGORIES: [&str; 3] = [SOCIAL_PLATFORMS, PUBLIC_RECORDS, FORUMS];

/// Hard failures a strategy may signal
///
/// Ordinary "nothing found" outcomes are payload content, never one of these.
#[derive(Debug, Error)]
pub enum StrategyError {
    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Unreachable {url}: {message}")]
    Unreachable { url: String, message: String },

    #[error("Malformed response: {message}")]
    Malformed { message: String },

    #[error("Unexpected HTTP status {status} from {url}")]
    Upstream { url: String, status: u16 },
}

impl StrategyError {
    /// Human-readable failure class reported in the payload's `error` field
    pub fn failure_class(&self) -> &'static str {
        match self {
            Self::Timeout { .. } => "Network timeout",
            Self::Unreachable { .. } => "Network unreachable",
            Self::Malformed { .. } => "Malformed response",
            Self::Upstream { .. } => "Upstream error",
        }
    }
}

/// Result type for strategy operations
pub type StrategyResult<T> = Result<T, StrategyError>;

/// A retrieval strategy bound to one source category
///
/// Implementations may perform real network I/O through `client` or
/// synthesize data. They must be safe to run concurrently: the engine may
/// invoke several strategies at once for the same target.
#[async_trait]
pub trait Strategy: Send + Sync {
    /// Fetches information about `target`
    ///
    /// # Arguments
    ///
    /// * `client` - The run's shared, timeout-bounded HTTP client
    /// * `target` - The identifying handle being investigated
    ///
    /// # Returns
    ///
    /// * `Ok(DataPayload)` - Data about the target, possibly reporting zero results
    /// * `Err(StrategyError)` - The source could not be queried
    async fn fetch(&self, client: &Client, target: &str) -> StrategyResult<DataPayload>;
}
