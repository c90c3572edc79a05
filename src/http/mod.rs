//! HTTP layer shared by network-backed strategies
//!
//! This module contains:
//! - The client provider, which builds one bounded-timeout client per run
//! - A GET helper that classifies transport failures into strategy errors

mod client;
mod fetch;

pub use client::build_http_client;
pub use fetch::{
    classify_request_error, fetch_page, fetch_page_limited, FetchedPage, MAX_BODY_BYTES,
};
