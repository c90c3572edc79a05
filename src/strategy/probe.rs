//! Web presence probe strategy
//!
//! A probe checks whether a profile page exists for the target on one site,
//! using a URL template such as `https://example.com/users/{target}`.
//!
//! # Response Handling
//!
//! | Condition | Outcome |
//! |-----------|---------|
//! | HTTP 2xx | `found: true`, with the page title when the body is HTML |
//! | HTTP 404 / 410 | `found: false` (no results, not an error) |
//! | Any other status | `Upstream` error |
//! | Timeout / connection failure / unreadable body | classified transport error |

use crate::http::{fetch_page, FetchedPage};
use crate::strategy::{DataPayload, Strategy, StrategyError, StrategyResult};
use async_trait::async_trait;
use reqwest::Client;
use scraper::{Html, Selector};
use serde::Serialize;
use url::form_urlencoded::byte_serialize;

/// Placeholder replaced by the encoded target in a URL template
pub const TARGET_PLACEHOLDER: &str = "{target}";

/// Outcome of probing one site for a target
#[derive(Debug, Clone, Serialize)]
pub struct ProbeRecord {
    pub found: bool,
    pub url: String,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Substitutes a percent-encoded target into a URL template
pub fn expand_template(template: &str, target: &str) -> String {
    // form encoding writes spaces as '+', which is literal in a path
    let encoded = byte_serialize(target.as_bytes())
        .collect::<String>()
        .replace('+', "%20");
    template.replace(TARGET_PLACEHOLDER, &encoded)
}

/// Network-backed strategy that probes a single URL template
#[derive(Debug, Clone)]
pub struct ProbeStrategy {
    url_template: String,
}

impl ProbeStrategy {
    pub fn new(url_template: impl Into<String>) -> Self {
        Self {
            url_template: url_template.into(),
        }
    }

    fn interpret(&self, url: String, page: FetchedPage) -> StrategyResult<ProbeRecord> {
        if page.is_success() {
            let title = if page.is_html() {
                extract_title(&page.body)
            } else {
                None
            };
            return Ok(ProbeRecord {
                found: true,
                url: page.final_url,
                status: page.status,
                title,
            });
        }

        match page.status {
            404 | 410 => Ok(ProbeRecord {
                found: false,
                url,
                status: page.status,
                title: None,
            }),
            status => Err(StrategyError::Upstream { url, status }),
        }
    }
}

#[async_trait]
impl Strategy for ProbeStrategy {
    async fn fetch(&self, client: &Client, target: &str) -> StrategyResult<DataPayload> {
        let url = expand_template(&self.url_template, target);
        let page = fetch_page(client, &url).await?;
        let record = self.interpret(url, page)?;
        DataPayload::from_record(&record)
    }
}

/// Extracts the page title from an HTML body
fn extract_title(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let title_selector = Selector::parse("title").ok()?;

    document
        .select(&title_selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
}
