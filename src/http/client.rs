//! HTTP client provider
//!
//! One client is built per invocation and shared by every strategy in that
//! run. `reqwest::Client` is reference counted internally, so cloning it into
//! concurrently running strategies is cheap and needs no locking.

use crate::config::{validate_client_config, ClientConfig};
use crate::ReconError;
use reqwest::{redirect::Policy, Client};

/// Maximum redirect hops followed before a request fails
const MAX_REDIRECTS: usize = 10;

/// Builds an HTTP client bounded by the configured timeouts
///
/// No retry policy is applied here; retries, if any, belong to individual
/// strategies.
///
/// # Arguments
///
/// * `config` - The client configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(ReconError)` - The configuration is invalid or the client could not be built
///
/// # Example
///
/// ```no_run
/// use recon_dispatch::config::ClientConfig;
/// use recon_dispatch::http::build_http_client;
/// use std::time::Duration;
///
/// let config = ClientConfig::default().with_timeout(Duration::from_secs(5));
/// let client = build_http_client(&config).unwrap();
/// ```
pub fn build_http_client(config: &ClientConfig) -> Result<Client, ReconError> {
    validate_client_config(config)?;

    let client = Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(config.timeout())
        .connect_timeout(config.connect_timeout())
        .redirect(Policy::limited(MAX_REDIRECTS))
        .gzip(true)
        .brotli(true)
        .build()?;

    tracing::debug!(
        "Built HTTP client (timeout {}ms, connect timeout {}ms)",
        config.timeout_ms,
        config.connect_timeout_ms
    );

    Ok(client)
}
