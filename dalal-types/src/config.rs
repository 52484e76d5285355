//! Configuration types shared across the orchestrator and connectors.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::DalalError;

/// Base URL used when no backend location is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Environment variable consulted by [`BackendConfig::from_env`].
const BASE_URL_ENV: &str = "DALAL_API_BASE";

/// Location and transport settings for the dashboard backend.
///
/// Resolve this once at startup and hand it to whichever connector performs
/// fetches; nothing else in the workspace reads the environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Root of the backend, e.g. `http://127.0.0.1:8000`. Endpoint paths are appended to it.
    pub base_url: Url,
    /// Transport-level timeout for a single HTTP request.
    pub timeout: Duration,
    /// User agent sent with every request.
    pub user_agent: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            // The literal is a valid absolute URL.
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base url parses"),
            timeout: Duration::from_secs(10),
            user_agent: concat!("dalal/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl BackendConfig {
    /// Build a config pointing at `base_url` with default transport settings.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `base_url` is not an absolute http(s) URL.
    pub fn new(base_url: &str) -> Result<Self, DalalError> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            ..Self::default()
        })
    }

    /// Resolve the backend location from `DALAL_API_BASE`, falling back to
    /// [`DEFAULT_BASE_URL`] when the variable is unset or blank.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the variable holds something that is not an http(s) URL.
    pub fn from_env() -> Result<Self, DalalError> {
        match std::env::var(BASE_URL_ENV) {
            Ok(v) if !v.trim().is_empty() => Self::new(v.trim()),
            _ => Ok(Self::default()),
        }
    }
}

fn parse_base_url(raw: &str) -> Result<Url, DalalError> {
    let mut url = Url::parse(raw)
        .map_err(|e| DalalError::InvalidArg(format!("backend base url {raw:?}: {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(DalalError::InvalidArg(format!(
            "backend base url {raw:?}: unsupported scheme {}",
            url.scheme()
        )));
    }
    if url.cannot_be_a_base() {
        return Err(DalalError::InvalidArg(format!(
            "backend base url {raw:?}: not a base"
        )));
    }
    // Endpoint paths are appended segment-wise; a trailing slash would leave an empty segment.
    let trimmed = url.path().trim_end_matches('/').to_string();
    url.set_path(&trimmed);
    Ok(url)
}

/// Cadence for periodic refresh tasks (market movers, index snapshot).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollConfig {
    /// Delay between the end of one fetch and the start of the next.
    pub interval: Duration,
    /// Random jitter percentage [0, 100] added to each delay.
    pub jitter_percent: u8,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(60),
            jitter_percent: 0,
        }
    }
}

/// Global configuration for the `Dalal` orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DalalConfig {
    /// Timeout for individual connector requests.
    pub provider_timeout: Duration,
    /// Optional overall deadline for fan-out operations (e.g. the concurrent analysis fetch).
    pub request_timeout: Option<Duration>,
    /// Refresh cadence for polling tasks.
    pub poll: PollConfig,
}

impl Default for DalalConfig {
    fn default() -> Self {
        Self {
            provider_timeout: Duration::from_secs(15),
            request_timeout: None,
            poll: PollConfig::default(),
        }
    }
}
