use serde::Deserialize;
use std::time::Duration;

/// Default upper bound on total request duration (milliseconds)
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Default upper bound on connection establishment (milliseconds)
pub const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 10_000;

/// Main configuration structure for Recon-Dispatch
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub client: ClientConfig,

    /// Network-backed probe strategies registered next to the baseline ones
    #[serde(rename = "probe", default)]
    pub probes: Vec<ProbeEntry>,
}

/// HTTP client configuration shared by every strategy in a run
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Upper bound on total request duration (milliseconds)
    #[serde(rename = "timeout-ms")]
    pub timeout_ms: u64,

    /// Upper bound on connection establishment (milliseconds)
    #[serde(rename = "connect-timeout-ms")]
    pub connect_timeout_ms: u64,

    /// User-Agent header sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_TIMEOUT_MS,
            connect_timeout_ms: DEFAULT_CONNECT_TIMEOUT_MS,
            user_agent: format!("recon-dispatch/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Returns a copy with the total timeout replaced
    ///
    /// The connect timeout is clamped so it never exceeds the new total.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self.connect_timeout_ms = self.connect_timeout_ms.min(self.timeout_ms);
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }
}

/// A probe strategy entry
#[derive(Debug, Clone, Deserialize)]
pub struct ProbeEntry {
    /// Source category the probe is registered under (e.g., "code_hosting")
    pub name: String,

    /// URL with a `{target}` placeholder (e.g., "https://example.com/users/{target}")
    #[serde(rename = "url-template")]
    pub url_template: String,
}
