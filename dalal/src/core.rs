use std::sync::Arc;
use std::time::Duration;

use dalal_core::{Capability, DalalConfig, DalalConnector, DalalError};

use crate::router::util::collapse_errors;

/// Orchestrator that routes dashboard requests across registered connectors.
///
/// Cloning is cheap: connectors are shared behind `Arc`.
#[derive(Clone)]
pub struct Dalal {
    pub(crate) connectors: Vec<Arc<dyn DalalConnector>>,
    pub(crate) cfg: DalalConfig,
}

/// Builder for constructing a `Dalal` orchestrator with custom configuration.
pub struct DalalBuilder {
    connectors: Vec<Arc<dyn DalalConnector>>,
    cfg: DalalConfig,
}

impl Default for DalalBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DalalBuilder {
    /// Create a new builder with default configuration and no connectors.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connectors: vec![],
            cfg: DalalConfig::default(),
        }
    }

    /// Register a connector.
    ///
    /// Connectors are tried in registration order; the first success wins.
    /// Duplicates are not deduplicated.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn DalalConnector>) -> Self {
        self.connectors.push(c);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: DalalConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Set the per-connector request timeout.
    #[must_use]
    pub const fn provider_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.provider_timeout = timeout;
        self
    }

    /// Set an overall deadline for fan-out operations such as [`Dalal::analyse`].
    ///
    /// When exceeded, the operation returns `RequestTimeout`.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.request_timeout = Some(timeout);
        self
    }

    /// Delay between consecutive fetches of a polling task.
    #[must_use]
    pub const fn poll_interval(mut self, interval: Duration) -> Self {
        self.cfg.poll.interval = interval;
        self
    }

    /// Random jitter added to each poll delay, as a percentage of the interval.
    ///
    /// Values above 100 are clamped.
    #[must_use]
    pub fn poll_jitter_percent(mut self, percent: u8) -> Self {
        self.cfg.poll.jitter_percent = percent.min(100);
        self
    }

    /// Build the `Dalal` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connectors have been registered via [`with_connector`](Self::with_connector)
    /// or the poll interval is zero.
    pub fn build(self) -> Result<Dalal, DalalError> {
        if self.connectors.is_empty() {
            return Err(DalalError::InvalidArg(
                "no connectors registered; add at least one via with_connector(...)".to_string(),
            ));
        }
        if self.cfg.poll.interval.is_zero() {
            return Err(DalalError::InvalidArg(
                "poll interval must be greater than zero".to_string(),
            ));
        }
        Ok(Dalal {
            connectors: self.connectors,
            cfg: self.cfg,
        })
    }
}

/// Attribute an untagged error to `connector`; already classified errors pass through.
pub fn tag_err(connector: &str, e: DalalError) -> DalalError {
    match e {
        e @ (DalalError::NotFound { .. }
        | DalalError::ProviderTimeout { .. }
        | DalalError::Connector { .. }
        | DalalError::RequestTimeout { .. }
        | DalalError::AllProvidersTimedOut { .. }
        | DalalError::AllProvidersFailed(_)) => e,
        other => DalalError::Connector {
            connector: connector.to_string(),
            msg: other.to_string(),
        },
    }
}

/// Run `fut` under an optional overall deadline.
///
/// On expiry returns `RequestTimeout` labelled `request`; callers relabel as needed.
pub async fn with_request_deadline<F, T>(deadline: Option<Duration>, fut: F) -> Result<T, DalalError>
where
    F: core::future::Future<Output = T>,
{
    match deadline {
        Some(d) => tokio::time::timeout(d, fut)
            .await
            .map_err(|_| DalalError::request_timeout("request")),
        None => Ok(fut.await),
    }
}

impl Dalal {
    /// Start building a new `Dalal` instance.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use dalal::Dalal;
    /// use dalal_http::HttpConnector;
    ///
    /// let http = HttpConnector::new(&dalal::BackendConfig::from_env()?)?;
    /// let dalal = Dalal::builder()
    ///     .with_connector(Arc::new(http))
    ///     .provider_timeout(std::time::Duration::from_secs(5))
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> DalalBuilder {
        DalalBuilder::new()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &DalalConfig {
        &self.cfg
    }

    /// Registered connectors in routing order.
    #[must_use]
    pub fn connectors(&self) -> &[Arc<dyn DalalConnector>] {
        &self.connectors
    }

    /// Wrap a provider future with a timeout and standardized timeout error mapping.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "dalal::core::provider_call_with_timeout",
            skip(fut, connector_name, capability, timeout),
            fields(
                connector = connector_name,
                capability = %capability,
                timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            ),
        )
    )]
    pub(crate) async fn provider_call_with_timeout<T, Fut>(
        connector_name: &'static str,
        capability: Capability,
        timeout: Duration,
        fut: Fut,
    ) -> Result<T, DalalError>
    where
        Fut: core::future::Future<Output = Result<T, DalalError>>,
    {
        (tokio::time::timeout(timeout, fut).await)
            .unwrap_or_else(|_| Err(DalalError::provider_timeout(connector_name, capability.as_str())))
    }

    /// Walk connectors in registration order and return the first success.
    ///
    /// - `call` returns `None` for a connector lacking the capability; it is skipped.
    /// - Each attempt is bounded by the provider timeout.
    /// - Failures are collected and collapsed: nothing attempted gives `Unsupported`,
    ///   all `NotFound` gives `NotFound(not_found_what)`, all timeouts give
    ///   `AllProvidersTimedOut`, anything else `AllProvidersFailed`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "dalal::core::fetch_single",
            skip(self, capability, not_found_what, call),
            fields(capability = %capability),
        )
    )]
    pub(crate) async fn fetch_single<T, F, Fut>(
        &self,
        capability: Capability,
        not_found_what: String,
        call: F,
    ) -> Result<T, DalalError>
    where
        T: Send,
        F: Fn(Arc<dyn DalalConnector>) -> Option<Fut> + Send,
        Fut: core::future::Future<Output = Result<T, DalalError>> + Send,
    {
        let mut attempted_any = false;
        let mut errors: Vec<DalalError> = Vec::new();

        for c in &self.connectors {
            let Some(fut) = call(Arc::clone(c)) else {
                continue;
            };
            attempted_any = true;
            match Self::provider_call_with_timeout(c.name(), capability, self.cfg.provider_timeout, fut)
                .await
            {
                Ok(v) => return Ok(v),
                Err(e @ (DalalError::NotFound { .. } | DalalError::ProviderTimeout { .. })) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(connector = c.name(), error = %e, "falling back to next connector");
                    errors.push(e);
                }
                Err(e) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(connector = c.name(), error = %e, "falling back to next connector");
                    errors.push(tag_err(c.name(), e));
                }
            }
        }

        Err(collapse_errors(
            capability,
            attempted_any,
            errors,
            Some(not_found_what),
        ))
    }
}
