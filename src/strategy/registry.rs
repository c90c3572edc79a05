//! Strategy registry
//!
//! Maps a source category to the strategy that serves it. The registry is
//! filled through `&mut self` while the engine is being assembled and is
//! then shared behind an `Arc`, after which only lookups are possible.

use crate::config::Config;
use crate::strategy::{
    ForumsStrategy, ProbeStrategy, PublicRecordsStrategy, SocialPlatformsStrategy, Strategy,
    FORUMS, PUBLIC_RECORDS, SOCIAL_PLATFORMS,
};
use crate::DispatchError;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Registry of retrieval strategies keyed by source category
#[derive(Clone, Default)]
pub struct StrategyRegistry {
    strategies: HashMap<String, Arc<dyn Strategy>>,
}

impl StrategyRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the baseline strategies
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(SOCIAL_PLATFORMS, Arc::new(SocialPlatformsStrategy));
        registry.register(PUBLIC_RECORDS, Arc::new(PublicRecordsStrategy));
        registry.register(FORUMS, Arc::new(ForumsStrategy));
        registry
    }

    /// Creates a registry holding the baseline strategies plus configured probes
    pub fn from_config(config: &Config) -> Self {
        let mut registry = Self::with_defaults();
        for probe in &config.probes {
            tracing::debug!("Registering probe '{}' -> {}", probe.name, probe.url_template);
            registry.register(
                probe.name.clone(),
                Arc::new(ProbeStrategy::new(probe.url_template.clone())),
            );
        }
        registry
    }

    /// Registers a strategy under a category
    ///
    /// Registering a category twice replaces the earlier strategy.
    pub fn register(&mut self, category: impl Into<String>, strategy: Arc<dyn Strategy>) {
        let category = category.into();
        if self.strategies.insert(category.clone(), strategy).is_some() {
            tracing::warn!("Strategy for '{}' replaced by a later registration", category);
        }
    }

    /// Looks up the strategy for a category
    ///
    /// Keys are matched exactly and case-sensitively.
    pub fn resolve(&self, category: &str) -> Result<Arc<dyn Strategy>, DispatchError> {
        self.strategies
            .get(category)
            .cloned()
            .ok_or_else(|| DispatchError::UnknownCategory(category.to_string()))
    }

    pub fn contains(&self, category: &str) -> bool {
        self.strategies.contains_key(category)
    }

    /// Returns the registered categories in sorted order
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = self.strategies.keys().map(String::as_str).collect();
        categories.sort_unstable();
        categories
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

impl fmt::Debug for StrategyRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrategyRegistry")
            .field("categories", &self.categories())
            .finish()
    }
}
