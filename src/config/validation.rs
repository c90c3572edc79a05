use crate::config::types::{ClientConfig, Config, ProbeEntry};
use crate::strategy::{expand_template, BASELINE_CATEGORIES, TARGET_PLACEHOLDER};
use crate::ConfigError;
use std::collections::HashSet;
use url::Url;

/// Largest accepted total request timeout (milliseconds)
const MAX_TIMEOUT_MS: u64 = 300_000;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_client_config(&config.client)?;
    validate_probes(&config.probes)?;
    Ok(())
}

/// Validates HTTP client configuration
///
/// Also used when the timeout is overridden from the command line, since a
/// client that cannot be bounded must never be built.
pub fn validate_client_config(config: &ClientConfig) -> Result<(), ConfigError> {
    if config.timeout_ms == 0 || config.timeout_ms > MAX_TIMEOUT_MS {
        return Err(ConfigError::Validation(format!(
            "timeout_ms must be between 1 and {}, got {}",
            MAX_TIMEOUT_MS, config.timeout_ms
        )));
    }

    if config.connect_timeout_ms == 0 || config.connect_timeout_ms > config.timeout_ms {
        return Err(ConfigError::Validation(format!(
            "connect_timeout_ms must be between 1 and timeout_ms ({}), got {}",
            config.timeout_ms, config.connect_timeout_ms
        )));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates probe entries
fn validate_probes(probes: &[ProbeEntry]) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();

    for probe in probes {
        validate_probe_name(&probe.name)?;

        if BASELINE_CATEGORIES.contains(&probe.name.as_str()) {
            return Err(ConfigError::Validation(format!(
                "Probe '{}' would shadow a built-in source category",
                probe.name
            )));
        }

        if !seen.insert(probe.name.as_str()) {
            return Err(ConfigError::Validation(format!(
                "Probe '{}' is defined more than once",
                probe.name
            )));
        }

        validate_url_template(&probe.url_template)?;
    }

    Ok(())
}

/// Validates a probe name: non-empty, lowercase alphanumeric + underscores only
fn validate_probe_name(name: &str) -> Result<(), ConfigError> {
    if name.is_empty() {
        return Err(ConfigError::Validation(
            "Probe name cannot be empty".to_string(),
        ));
    }

    if !name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
    {
        return Err(ConfigError::Validation(format!(
            "Probe name must contain only lowercase letters, digits and underscores, got '{}'",
            name
        )));
    }

    Ok(())
}

/// Validates a probe URL template
fn validate_url_template(template: &str) -> Result<(), ConfigError> {
    if !template.contains(TARGET_PLACEHOLDER) {
        return Err(ConfigError::Validation(format!(
            "URL template '{}' must contain {}",
            template, TARGET_PLACEHOLDER
        )));
    }

    let url = Url::parse(&expand_template(template, "probe")).map_err(|e| {
        ConfigError::InvalidUrl(format!("Invalid URL template '{}': {}", template, e))
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "URL template '{}' must use http or https",
            template
        )));
    }

    Ok(())
}
