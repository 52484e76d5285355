use std::time::Duration;

use async_trait::async_trait;
use dalal_core::connector::{
    DalalConnector, DecisionProvider, ForecastProvider, MarketInsightsProvider,
    MarketMoversProvider, MostBoughtProvider, NiftyHistoryProvider, NiftyProvider,
    PortfolioProvider, SentimentProvider, StockProvider, TopStocksProvider,
};
use dalal_core::{
    Capability, DalalError, Decision, Forecast, MarketInsights, MarketMovers, MostBought,
    NiftyHistoryPoint, NiftySnapshot, Portfolio, Sentiment, StockSnapshot, TopStocks,
};

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockConnector, DynamicMockController, MockBehavior};
pub use fixtures::SYMBOLS;

/// Symbol that makes every symbol-keyed call fail with a connector error.
pub const FAIL_SYMBOL: &str = "FAIL";
/// Symbol that makes every symbol-keyed call answer only after [`TIMEOUT_DELAY`].
pub const TIMEOUT_SYMBOL: &str = "TIMEOUT";
/// Latency applied to [`TIMEOUT_SYMBOL`].
pub const TIMEOUT_DELAY: Duration = Duration::from_millis(200);

/// Mock connector for CI-safe demos. Provides deterministic data from static fixtures.
pub struct MockConnector;

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn not_found(what: &str) -> DalalError {
        DalalError::not_found(what.to_string())
    }

    async fn maybe_fail_or_timeout(symbol: &str, capability: Capability) -> Result<(), DalalError> {
        match symbol {
            FAIL_SYMBOL => Err(DalalError::connector(
                "dalal-mock",
                format!("forced failure: {capability}"),
            )),
            TIMEOUT_SYMBOL => {
                // Long enough to trip a short orchestrator timeout in tests.
                tokio::time::sleep(TIMEOUT_DELAY).await;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

impl DalalConnector for MockConnector {
    fn name(&self) -> &'static str {
        "dalal-mock"
    }
    fn vendor(&self) -> &'static str {
        "Mock"
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
impl NiftyProvider for MockConnector {
    async fn nifty(&self) -> Result<NiftySnapshot, DalalError> {
        Ok(fixtures::market::nifty())
    }
}

#[async_trait]
impl NiftyHistoryProvider for MockConnector {
    async fn nifty_history(&self) -> Result<Vec<NiftyHistoryPoint>, DalalError> {
        Ok(fixtures::market::nifty_history())
    }
}

#[async_trait]
impl StockProvider for MockConnector {
    async fn stock(&self, symbol: &str) -> Result<StockSnapshot, DalalError> {
        Self::maybe_fail_or_timeout(symbol, Capability::Stock).await?;
        fixtures::market::stock(symbol).ok_or_else(|| Self::not_found(&format!("stock {symbol}")))
    }
}

#[async_trait]
impl MarketMoversProvider for MockConnector {
    async fn market_movers(&self) -> Result<MarketMovers, DalalError> {
        Ok(fixtures::market::market_movers())
    }
}

#[async_trait]
impl MostBoughtProvider for MockConnector {
    async fn most_bought(&self) -> Result<Option<MostBought>, DalalError> {
        Ok(fixtures::market::most_bought())
    }
}

#[async_trait]
impl MarketInsightsProvider for MockConnector {
    async fn market_insights(&self) -> Result<MarketInsights, DalalError> {
        Ok(fixtures::market::market_insights())
    }
}

#[async_trait]
impl PortfolioProvider for MockConnector {
    async fn portfolio(&self) -> Result<Portfolio, DalalError> {
        Ok(fixtures::portfolio::portfolio())
    }
}

#[async_trait]
impl TopStocksProvider for MockConnector {
    async fn top_stocks(&self) -> Result<TopStocks, DalalError> {
        Ok(fixtures::analytics::top_stocks())
    }
}

#[async_trait]
impl ForecastProvider for MockConnector {
    async fn forecast(&self, symbol: &str) -> Result<Forecast, DalalError> {
        Self::maybe_fail_or_timeout(symbol, Capability::Forecast).await?;
        fixtures::analytics::forecast(symbol)
            .ok_or_else(|| Self::not_found(&format!("forecast for {symbol}")))
    }
}

#[async_trait]
impl SentimentProvider for MockConnector {
    async fn sentiment(&self, symbol: &str) -> Result<Sentiment, DalalError> {
        Self::maybe_fail_or_timeout(symbol, Capability::Sentiment).await?;
        fixtures::analytics::sentiment(symbol)
            .ok_or_else(|| Self::not_found(&format!("sentiment for {symbol}")))
    }
}

#[async_trait]
impl DecisionProvider for MockConnector {
    async fn decision(&self, symbol: &str) -> Result<Decision, DalalError> {
        Self::maybe_fail_or_timeout(symbol, Capability::Decision).await?;
        fixtures::analytics::decision(symbol)
            .ok_or_else(|| Self::not_found(&format!("decision for {symbol}")))
    }
}
