//! Forums strategy (simulated)

use crate::strategy::{DataPayload, Strategy, StrategyResult};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

/// Forum activity attributed to a target
#[derive(Debug, Clone, Serialize)]
pub struct ForumsRecord {
    pub forums_found: u32,
    pub posts: u32,
    pub topics: Vec<String>,
}

/// Simulated forum search
#[derive(Debug, Clone, Copy, Default)]
pub struct ForumsStrategy;

#[async_trait]
impl Strategy for ForumsStrategy {
    async fn fetch(&self, _client: &Client, _target: &str) -> StrategyResult<DataPayload> {
        let record = ForumsRecord {
            forums_found: 5,
            posts: 47,
            topics: ["tech", "gaming", "crypto"]
                .iter()
                .map(|t| t.to_string())
                .collect(),
        };
        DataPayload::from_record(&record)
    }
}
