//! dalal-http
//!
//! Connector that implements `DalalConnector` by calling the dashboard REST
//! backend over HTTP. Every capability maps to one `GET` endpoint under the
//! configured base URL; responses are decoded straight into the wire types of
//! `dalal-types`.
//!
//! Status handling is uniform across endpoints:
//! - `404` becomes `DalalError::NotFound`, carrying the backend's `error` text
//! - any other non-2xx becomes `DalalError::Connector`
//! - a transport timeout becomes `DalalError::ProviderTimeout`
//! - a body that does not decode becomes `DalalError::Data`
#![warn(missing_docs)]

/// Builder for [`HttpConnector`].
pub mod builder;

use async_trait::async_trait;
use dalal_core::connector::{
    ConnectorKey, DalalConnector, DecisionProvider, ForecastProvider, MarketInsightsProvider,
    MarketMoversProvider, MostBoughtProvider, NiftyHistoryProvider, NiftyProvider,
    PortfolioProvider, SentimentProvider, StockProvider, TopStocksProvider,
};
use dalal_core::{
    BackendConfig, Capability, DalalError, Decision, Forecast, MarketInsights, MarketMovers,
    MostBought, NiftyHistoryPoint, NiftySnapshot, Portfolio, Sentiment, StockSnapshot, TopStocks,
};
use reqwest::StatusCode;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

pub use builder::HttpConnectorBuilder;

/// Connector backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpConnector {
    client: reqwest::Client,
    base_url: Url,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl HttpConnector {
    /// Static connector key for logs and error tags.
    pub const KEY: ConnectorKey = ConnectorKey::new("dalal-http");

    /// Build a connector for the backend described by `config`.
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(config: &BackendConfig) -> Result<Self, DalalError> {
        Self::builder().config(config.clone()).build()
    }

    /// Start a builder with default settings.
    #[must_use]
    pub fn builder() -> HttpConnectorBuilder {
        HttpConnectorBuilder::new()
    }

    pub(crate) const fn from_parts(client: reqwest::Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    /// Backend root every endpoint path is appended to.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve `segments` under the base URL, percent-encoding each one.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the base URL cannot carry a path.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, DalalError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| DalalError::InvalidArg(format!("base url {} cannot be a base", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn symbol_segment(symbol: &str) -> Result<&str, DalalError> {
        let s = symbol.trim();
        if s.is_empty() {
            return Err(DalalError::InvalidArg("symbol must not be empty".into()));
        }
        Ok(s)
    }

    fn transport_error(e: &reqwest::Error, cap: Capability) -> DalalError {
        if e.is_timeout() {
            DalalError::provider_timeout(Self::KEY.as_str(), cap.as_str())
        } else {
            DalalError::connector(Self::KEY.as_str(), e.to_string())
        }
    }

    fn status_error(status: StatusCode, body: &str, what: &str) -> DalalError {
        let detail = serde_json::from_str::<ErrorBody>(body)
            .map(|b| b.error)
            .ok()
            .filter(|m| !m.trim().is_empty());
        if status == StatusCode::NOT_FOUND {
            return match detail {
                Some(msg) => DalalError::not_found(format!("{what}: {msg}")),
                None => DalalError::not_found(what.to_string()),
            };
        }
        let msg = detail.map_or_else(
            || format!("HTTP {status} for {what}"),
            |m| format!("HTTP {status} for {what}: {m}"),
        );
        DalalError::connector(Self::KEY.as_str(), msg)
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "dalal_http::get",
            skip(self, cap, segments),
            fields(capability = %cap, path = %segments.join("/")),
            err,
        )
    )]
    async fn get_json<T: DeserializeOwned>(
        &self,
        cap: Capability,
        segments: &[&str],
        what: &str,
    ) -> Result<T, DalalError> {
        let url = self.endpoint(segments)?;
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Self::transport_error(&e, cap))?;
        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| Self::transport_error(&e, cap))?;
        if !status.is_success() {
            return Err(Self::status_error(status, &body, what));
        }
        serde_json::from_str(&body).map_err(|e| DalalError::Data(format!("{what}: {e}")))
    }
}

impl DalalConnector for HttpConnector {
    fn name(&self) -> &'static str {
        Self::KEY.as_str()
    }

    fn vendor(&self) -> &'static str {
        "Dashboard REST backend"
    }

    fn as_nifty_provider(&self) -> Option<&dyn NiftyProvider> {
        Some(self as &dyn NiftyProvider)
    }
    fn as_nifty_history_provider(&self) -> Option<&dyn NiftyHistoryProvider> {
        Some(self as &dyn NiftyHistoryProvider)
    }
    fn as_stock_provider(&self) -> Option<&dyn StockProvider> {
        Some(self as &dyn StockProvider)
    }
    fn as_market_movers_provider(&self) -> Option<&dyn MarketMoversProvider> {
        Some(self as &dyn MarketMoversProvider)
    }
    fn as_most_bought_provider(&self) -> Option<&dyn MostBoughtProvider> {
        Some(self as &dyn MostBoughtProvider)
    }
    fn as_market_insights_provider(&self) -> Option<&dyn MarketInsightsProvider> {
        Some(self as &dyn MarketInsightsProvider)
    }
    fn as_portfolio_provider(&self) -> Option<&dyn PortfolioProvider> {
        Some(self as &dyn PortfolioProvider)
    }
    fn as_top_stocks_provider(&self) -> Option<&dyn TopStocksProvider> {
        Some(self as &dyn TopStocksProvider)
    }
    fn as_forecast_provider(&self) -> Option<&dyn ForecastProvider> {
        Some(self as &dyn ForecastProvider)
    }
    fn as_sentiment_provider(&self) -> Option<&dyn SentimentProvider> {
        Some(self as &dyn SentimentProvider)
    }
    fn as_decision_provider(&self) -> Option<&dyn DecisionProvider> {
        Some(self as &dyn DecisionProvider)
    }
}

#[async_trait]
impl NiftyProvider for HttpConnector {
    async fn nifty(&self) -> Result<NiftySnapshot, DalalError> {
        self.get_json(Capability::Nifty, &["api", "nifty"], "nifty snapshot")
            .await
    }
}

#[async_trait]
impl NiftyHistoryProvider for HttpConnector {
    async fn nifty_history(&self) -> Result<Vec<NiftyHistoryPoint>, DalalError> {
        self.get_json(
            Capability::NiftyHistory,
            &["api", "nifty", "history"],
            "nifty history",
        )
        .await
    }
}

#[async_trait]
impl StockProvider for HttpConnector {
    async fn stock(&self, symbol: &str) -> Result<StockSnapshot, DalalError> {
        let symbol = Self::symbol_segment(symbol)?;
        self.get_json(
            Capability::Stock,
            &["api", "stock", symbol],
            &format!("stock {symbol}"),
        )
        .await
    }
}

#[async_trait]
impl MarketMoversProvider for HttpConnector {
    async fn market_movers(&self) -> Result<MarketMovers, DalalError> {
        self.get_json(
            Capability::MarketMovers,
            &["api", "market-movers"],
            "market movers",
        )
        .await
    }
}

#[async_trait]
impl MostBoughtProvider for HttpConnector {
    async fn most_bought(&self) -> Result<Option<MostBought>, DalalError> {
        let raw: serde_json::Value = self
            .get_json(Capability::MostBought, &["api", "most-bought"], "most bought")
            .await?;
        // An empty session is reported as `{"most_bought": null}`.
        if raw.get("most_bought").is_some_and(serde_json::Value::is_null) {
            return Ok(None);
        }
        serde_json::from_value(raw)
            .map(Some)
            .map_err(|e| DalalError::Data(format!("most bought: {e}")))
    }
}

#[async_trait]
impl MarketInsightsProvider for HttpConnector {
    async fn market_insights(&self) -> Result<MarketInsights, DalalError> {
        self.get_json(
            Capability::MarketInsights,
            &["api", "market-insights"],
            "market insights",
        )
        .await
    }
}

#[async_trait]
impl PortfolioProvider for HttpConnector {
    async fn portfolio(&self) -> Result<Portfolio, DalalError> {
        self.get_json(Capability::Portfolio, &["api", "portfolio"], "portfolio")
            .await
    }
}

#[async_trait]
impl TopStocksProvider for HttpConnector {
    async fn top_stocks(&self) -> Result<TopStocks, DalalError> {
        self.get_json(
            Capability::TopStocks,
            &["api", "dsfm", "top-stocks"],
            "top stocks",
        )
        .await
    }
}

#[async_trait]
impl ForecastProvider for HttpConnector {
    async fn forecast(&self, symbol: &str) -> Result<Forecast, DalalError> {
        let symbol = Self::symbol_segment(symbol)?;
        self.get_json(
            Capability::Forecast,
            &["api", "dsfm", "forecast", symbol],
            &format!("forecast for {symbol}"),
        )
        .await
    }
}

#[async_trait]
impl SentimentProvider for HttpConnector {
    async fn sentiment(&self, symbol: &str) -> Result<Sentiment, DalalError> {
        let symbol = Self::symbol_segment(symbol)?;
        self.get_json(
            Capability::Sentiment,
            &["api", "dsfm", "sentiment", symbol],
            &format!("sentiment for {symbol}"),
        )
        .await
    }
}

#[async_trait]
impl DecisionProvider for HttpConnector {
    async fn decision(&self, symbol: &str) -> Result<Decision, DalalError> {
        let symbol = Self::symbol_segment(symbol)?;
        self.get_json(
            Capability::Decision,
            &["api", "dsfm", "decision", symbol],
            &format!("decision for {symbol}"),
        )
        .await
    }
}
