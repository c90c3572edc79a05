//! Dispatch engine
//!
//! Resolves a source category against the registry, runs the selected
//! strategy with the shared client, and guarantees a payload comes back no
//! matter what happened along the way.

use crate::config::Config;
use crate::dispatch::ResultEnvelope;
use crate::http::build_http_client;
use crate::strategy::{DataPayload, StrategyRegistry};
use crate::{DispatchError, ReconError};
use reqwest::Client;
use std::sync::Arc;
use tokio::task::JoinSet;

/// Dispatches targets to retrieval strategies
///
/// Cloning is cheap: the registry sits behind an `Arc` and the client is
/// internally reference counted. No state is carried between calls.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    registry: Arc<StrategyRegistry>,
    client: Client,
}

impl Dispatcher {
    /// Creates a dispatcher from a finished registry and a client
    pub fn new(registry: StrategyRegistry, client: Client) -> Self {
        Self {
            registry: Arc::new(registry),
            client,
        }
    }

    /// Builds the client and registry described by a configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Dispatcher)` - Ready to dispatch
    /// * `Err(ReconError)` - The HTTP client could not be constructed
    pub fn from_config(config: &Config) -> Result<Self, ReconError> {
        let client = build_http_client(&config.client)?;
        Ok(Self::new(StrategyRegistry::from_config(config), client))
    }

    pub fn registry(&self) -> &StrategyRegistry {
        &self.registry
    }

    /// Runs the strategy for `category`, surfacing failures as errors
    pub async fn try_dispatch(
        &self,
        target: &str,
        category: &str,
    ) -> Result<DataPayload, DispatchError> {
        let strategy = self.registry.resolve(category)?;

        tracing::debug!("Dispatching '{}' to {}", target, category);
        let payload = strategy.fetch(&self.client, target).await?;

        Ok(payload)
    }

    /// Runs the strategy for `category`, always producing a payload
    ///
    /// An unknown category yields exactly `{"error": "Unknown source"}`; a
    /// failed strategy yields its failure class under `error` and the
    /// message under `detail`.
    pub async fn dispatch(&self, target: &str, category: &str) -> DataPayload {
        match self.try_dispatch(target, category).await {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!("Dispatch to {} failed: {}", category, e);
                e.into_payload()
            }
        }
    }

    /// Dispatches and wraps the payload in an envelope
    pub async fn run(&self, target: &str, category: &str) -> ResultEnvelope {
        let payload = self.dispatch(target, category).await;
        ResultEnvelope::build(category, payload)
    }

    /// Dispatches one target to several categories concurrently
    ///
    /// Each category runs in its own task. All tasks are awaited before any
    /// envelope is built, and envelopes come back in the order the categories
    /// were given regardless of completion order.
    pub async fn run_many<S: AsRef<str>>(
        &self,
        target: &str,
        categories: &[S],
    ) -> Vec<ResultEnvelope> {
        let mut tasks = JoinSet::new();

        for (index, category) in categories.iter().enumerate() {
            let dispatcher = self.clone();
            let target = target.to_string();
            let category = category.as_ref().to_string();

            tasks.spawn(async move { (index, dispatcher.dispatch(&target, &category).await) });
        }

        let mut payloads: Vec<Option<DataPayload>> = vec![None; categories.len()];
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, payload)) => payloads[index] = Some(payload),
                Err(e) => tracing::error!("Strategy task failed: {}", e),
            }
        }

        categories
            .iter()
            .zip(payloads)
            .map(|(category, payload)| {
                let payload = payload.unwrap_or_else(|| {
                    DispatchError::TaskFailed(format!(
                        "task for '{}' panicked or was cancelled",
                        category.as_ref()
                    ))
                    .into_payload()
                });
                ResultEnvelope::build(category.as_ref(), payload)
            })
            .collect()
    }
}
