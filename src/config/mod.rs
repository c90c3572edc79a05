//! Configuration module for Recon-Dispatch
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Every section has defaults, so running without a file
//! is equivalent to an empty one.
//!
//! # Example
//!
//! ```no_run
//! use recon_dispatch::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("recon.toml")).unwrap();
//! println!("Client timeout: {}ms", config.client.timeout_ms);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{ClientConfig, Config, ProbeEntry, DEFAULT_CONNECT_TIMEOUT_MS, DEFAULT_TIMEOUT_MS};

// Re-export parser and validation functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
pub use validation::{validate, validate_client_config};
