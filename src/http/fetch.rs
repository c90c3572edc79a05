//! GET helper with failure classification
//!
//! Transport failures are mapped onto the strategy failure classes:
//!
//! | Condition | Error |
//! |-----------|-------|
//! | Request or body read exceeded the client timeout | `Timeout` |
//! | Connection refused, DNS failure, TLS error | `Unreachable` |
//! | Body could not be decoded, redirect limit hit | `Malformed` |
//!
//! HTTP status codes are not errors at this layer; the caller decides what a
//! 404 or a 503 means for its source. Bodies are read up to a size cap and
//! truncated beyond it.

use crate::strategy::{StrategyError, StrategyResult};
use reqwest::Client;

/// Largest response body kept in memory (bytes)
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// A fetched response, fully read
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final URL after redirects
    pub final_url: String,
    /// HTTP status code
    pub status: u16,
    /// Content-Type header value, if present
    pub content_type: Option<String>,
    /// Response body, at most the size cap
    pub body: String,
    /// Whether the body was cut off at the size cap
    pub truncated: bool,
}

impl FetchedPage {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_html(&self) -> bool {
        self.content_type
            .as_deref()
            .map(|ct| ct.contains("text/html"))
            .unwrap_or(false)
    }
}

/// Fetches a URL with GET, keeping at most [`MAX_BODY_BYTES`] of the body
///
/// The client's timeout covers both the request and the body read, so this
/// resolves within the configured bound even against a stalled server.
pub async fn fetch_page(client: &Client, url: &str) -> StrategyResult<FetchedPage> {
    fetch_page_limited(client, url, MAX_BODY_BYTES).await
}

/// Fetches a URL with GET, keeping at most `max_body_bytes` of the body
///
/// Reading stops once the cap is reached; the rest of the response is
/// discarded and `truncated` is set.
pub async fn fetch_page_limited(
    client: &Client,
    url: &str,
    max_body_bytes: usize,
) -> StrategyResult<FetchedPage> {
    tracing::debug!("GET {}", url);

    let mut response = client
        .get(url)
        .send()
        .await
        .map_err(|e| classify_request_error(url, &e))?;

    let status = response.status().as_u16();
    let final_url = response.url().to_string();
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let mut body = Vec::new();
    let mut truncated = false;
    while let Some(chunk) = response
        .chunk()
        .await
        .map_err(|e| classify_request_error(url, &e))?
    {
        let remaining = max_body_bytes - body.len();
        if chunk.len() > remaining {
            body.extend_from_slice(&chunk[..remaining]);
            truncated = true;
            break;
        }
        body.extend_from_slice(&chunk);
    }

    if truncated {
        tracing::debug!("Body of {} truncated at {} bytes", url, max_body_bytes);
    }

    Ok(FetchedPage {
        final_url,
        status,
        content_type,
        body: String::from_utf8_lossy(&body).into_owned(),
        truncated,
    })
}

/// Classifies a reqwest error into a strategy failure
pub fn classify_request_error(url: &str, err: &reqwest::Error) -> StrategyError {
    if err.is_timeout() {
        StrategyError::Timeout {
            url: url.to_string(),
        }
    } else if err.is_connect() {
        StrategyError::Unreachable {
            url: url.to_string(),
            message: err.to_string(),
        }
    } else if err.is_decode() || err.is_body() || err.is_redirect() {
        StrategyError::Malformed {
            message: format!("{}: {}", url, err),
        }
    } else {
        StrategyError::Unreachable {
            url: url.to_string(),
            message: err.to_string(),
        }
    }
}
