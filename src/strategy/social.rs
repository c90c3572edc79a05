//! Social platforms strategy (simulated)

use crate::strategy::{DataPayload, Strategy, StrategyResult};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

/// Qualitative activity classification for discovered profiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    Low,
    Moderate,
    High,
}

/// Profiles discovered across social platforms
#[derive(Debug, Clone, Serialize)]
pub struct SocialPlatformsRecord {
    pub platform: String,
    pub profiles_found: usize,
    pub usernames: Vec<String>,
    pub activity_level: ActivityLevel,
}

impl SocialPlatformsRecord {
    /// Builds the record for a target from its candidate usernames
    pub fn for_target(target: &str) -> Self {
        let usernames = candidate_usernames(target);
        Self {
            platform: "multiple".to_string(),
            profiles_found: usernames.len(),
            usernames,
            activity_level: ActivityLevel::Moderate,
        }
    }
}

/// Derives deterministic username variants from a target
pub fn candidate_usernames(target: &str) -> Vec<String> {
    vec![
        target.to_string(),
        format!("{}123", target),
        format!("{}_official", target),
    ]
}

/// Simulated lookup across social platforms
///
/// No requests are made; the record is derived from the target alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SocialPlatformsStrategy;

#[async_trait]
impl Strategy for SocialPlatformsStrategy {
    async fn fetch(&self, _client: &Client, target: &str) -> StrategyResult<DataPayload> {
        DataPayload::from_record(&SocialPlatformsRecord::for_target(target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_candidate_usernames() {
        assert_eq!(
            candidate_usernames("alice"),
            vec!["alice", "alice123", "alice_official"]
        );
    }

    #[tokio::test]
    async fn test_fetch() {
        let payload = SocialPlatformsStrategy
            .fetch(&Client::new(), "alice")
            .await
            .unwrap();

        assert_eq!(payload.get("platform"), Some(&json!("multiple")));
        assert_eq!(payload.get("profiles_found"), Some(&json!(3)));
        assert_eq!(
            payload.get("usernames"),
            Some(&json!(["alice", "alice123", "alice_official"]))
        );
        assert_eq!(payload.get("activity_level"), Some(&json!("moderate")));
        assert!(!payload.is_error());
    }
}
