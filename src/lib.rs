//! Recon-Dispatch: a target-driven information-gathering dispatcher
//!
//! This crate maps a source category to a retrieval strategy, runs that strategy
//! against a target through a shared bounded-timeout HTTP client, and wraps the
//! result in a timestamped envelope. Every dispatch completes with a payload;
//! failures are folded into an `error` field instead of escaping to the caller.

pub mod config;
pub mod dispatch;
pub mod http;
pub mod strategy;

use thiserror::Error;

/// Main error type for Recon-Dispatch operations
#[derive(Debug, Error)]
pub enum ReconError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Errors raised while resolving and running a strategy
///
/// None of these reach the caller of [`dispatch::Dispatcher::dispatch`]; they are
/// converted into an error payload at the engine boundary.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Unknown source category: {0}")]
    UnknownCategory(String),

    #[error(transparent)]
    Strategy(#[from] strategy::StrategyError),

    #[error("Strategy task failed: {0}")]
    TaskFailed(String),
}

impl DispatchError {
    /// Converts the error into the payload reported in place of strategy data
    pub fn into_payload(self) -> strategy::DataPayload {
        use strategy::DataPayload;

        match self {
            Self::UnknownCategory(_) => DataPayload::unknown_source(),
            Self::Strategy(e) => DataPayload::failure(e.failure_class(), &e.to_string()),
            Self::TaskFailed(message) => DataPayload::failure("Strategy task failed", &message),
        }
    }
}

/// Result type alias for Recon-Dispatch operations
pub type Result<T> = std::result::Result<T, ReconError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use dispatch::{CustodyEntry, Dispatcher, InvestigationPlan, ResultEnvelope, TargetKind};
pub use http::build_http_client;
pub use strategy::{DataPayload, Strategy, StrategyError, StrategyRegistry};
