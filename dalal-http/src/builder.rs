use std::time::Duration;

use dalal_core::{BackendConfig, DalalError};

use crate::HttpConnector;

/// Builder for [`HttpConnector`].
///
/// Starts from [`BackendConfig::default`]. A caller-supplied
/// `reqwest::Client` replaces the one the builder would create, in which case
/// the timeout and user agent configured here are not applied.
#[derive(Debug, Default)]
pub struct HttpConnectorBuilder {
    config: BackendConfig,
    base_url: Option<String>,
    client: Option<reqwest::Client>,
}

impl HttpConnectorBuilder {
    /// Create a builder with default backend settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole backend configuration.
    #[must_use]
    pub fn config(mut self, config: BackendConfig) -> Self {
        self.config = config;
        self.base_url = None;
        self
    }

    /// Point the connector at `base_url`. Validated in [`build`](Self::build).
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Transport timeout for each request.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// User agent sent with every request.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Use an existing client, e.g. one shared with the rest of the application.
    #[must_use]
    pub fn client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Build the connector.
    ///
    /// # Errors
    /// Returns `InvalidArg` for a base URL that is not absolute http(s), or
    /// `Other` if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<HttpConnector, DalalError> {
        let mut config = self.config;
        if let Some(raw) = self.base_url {
            config.base_url = BackendConfig::new(&raw)?.base_url;
        }
        let client = match self.client {
            Some(client) => client,
            None => reqwest::Client::builder()
                .timeout(config.timeout)
                .user_agent(config.user_agent.clone())
                .build()
                .map_err(|e| DalalError::Other(format!("http client: {e}")))?,
        };
        Ok(HttpConnector::from_parts(client, config.base_url))
    }
}
