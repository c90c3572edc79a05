//! Public records strategy (simulated)

use crate::strategy::{DataPayload, Strategy, StrategyResult};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

/// Matches found in public records
#[derive(Debug, Clone, Serialize)]
pub struct PublicRecordsRecord {
    pub records_found: usize,
    pub locations: Vec<String>,
    pub associated_entities: Vec<String>,
}

/// Simulated public records search
#[derive(Debug, Clone, Copy, Default)]
pub struct PublicRecordsStrategy;

#[async_trait]
impl Strategy for PublicRecordsStrategy {
    async fn fetch(&self, _client: &Client, _target: &str) -> StrategyResult<DataPayload> {
        let record = PublicRecordsRecord {
            records_found: 2,
            locations: vec!["City A".to_string(), "City B".to_string()],
            associated_entities: vec!["Entity 1".to_string(), "Entity 2".to_string()],
        };
        DataPayload::from_record(&record)
    }
}
