//! Target classification and source planning
//!
//! A target's shape decides which sources are worth querying first. The
//! priority lists name sources that may not be registered; only the ones the
//! registry can serve end up in a plan, in priority order.

use crate::strategy::{StrategyRegistry, FORUMS, PUBLIC_RECORDS, SOCIAL_PLATFORMS};
use serde::Serialize;
use std::fmt;

/// The kind of handle a target appears to be
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    Email,
    Phone,
    Name,
    Username,
}

impl TargetKind {
    /// Classifies a target by its shape
    ///
    /// Checked in order: contains `@` -> Email; only ASCII digits -> Phone;
    /// contains a space -> Name; anything else -> Username.
    pub fn classify(target: &str) -> Self {
        if target.contains('@') {
            Self::Email
        } else if !target.is_empty() && target.chars().all(|c| c.is_ascii_digit()) {
            Self::Phone
        } else if target.contains(' ') {
            Self::Name
        } else {
            Self::Username
        }
    }

    /// Sources to query for this kind, most valuable first
    pub fn priority_sources(&self) -> &'static [&'static str] {
        match self {
            Self::Email => &["haveibeenpwned", SOCIAL_PLATFORMS, PUBLIC_RECORDS],
            Self::Phone => &["carrier_db", SOCIAL_PLATFORMS, "reverse_lookup"],
            Self::Name => &[SOCIAL_PLATFORMS, PUBLIC_RECORDS, "news_sources"],
            Self::Username => &[SOCIAL_PLATFORMS, FORUMS, "gaming_platforms"],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Name => "name",
            Self::Username => "username",
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The sources chosen for investigating one target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvestigationPlan {
    target: String,
    kind: TargetKind,
}

impl InvestigationPlan {
    pub fn for_target(target: impl Into<String>) -> Self {
        let target = target.into();
        let kind = TargetKind::classify(&target);
        Self { target, kind }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn kind(&self) -> TargetKind {
        self.kind
    }

    /// Priority sources the registry can serve, in priority order
    pub fn sources(&self, registry: &StrategyRegistry) -> Vec<&'static str> {
        self.kind
            .priority_sources()
            .iter()
            .copied()
            .filter(|source| registry.contains(source))
            .collect()
    }

    /// Priority sources the registry cannot serve
    pub fn unavailable(&self, registry: &StrategyRegistry) -> Vec<&'static str> {
        self.kind
            .priority_sources()
            .iter()
            .copied()
            .filter(|source| !registry.contains(source))
            .collect()
    }
}
