use async_trait::async_trait;

use crate::{
    DalalError, Decision, Forecast, MarketInsights, MarketMovers, MostBought, NiftyHistoryPoint,
    NiftySnapshot, Portfolio, Sentiment, StockSnapshot, TopStocks,
};
pub use dalal_types::ConnectorKey;

/// Focused role trait for connectors that provide the latest index snapshot.
#[async_trait]
pub trait NiftyProvider: Send + Sync {
    /// Fetch the latest NIFTY 50 level and change.
    async fn nifty(&self) -> Result<NiftySnapshot, DalalError>;
}

/// Focused role trait for connectors that provide index history.
#[async_trait]
pub trait NiftyHistoryProvider: Send + Sync {
    /// Fetch the full NIFTY 50 history, oldest first.
    async fn nifty_history(&self) -> Result<Vec<NiftyHistoryPoint>, DalalError>;
}

/// Focused role trait for connectors that provide per-symbol snapshots.
#[async_trait]
pub trait StockProvider: Send + Sync {
    /// Fetch the latest snapshot for `symbol`.
    async fn stock(&self, symbol: &str) -> Result<StockSnapshot, DalalError>;
}

/// Focused role trait for connectors that provide gainers and losers.
#[async_trait]
pub trait MarketMoversProvider: Send + Sync {
    /// Fetch the top gainers and losers for the latest session.
    async fn market_movers(&self) -> Result<MarketMovers, DalalError>;
}

/// Focused role trait for connectors that provide the most bought stock.
#[async_trait]
pub trait MostBoughtProvider: Send + Sync {
    /// Fetch the session's most bought stock; `Ok(None)` when there is none.
    async fn most_bought(&self) -> Result<Option<MostBought>, DalalError>;
}

/// Focused role trait for connectors that provide breadth, sector and momentum insights.
#[async_trait]
pub trait MarketInsightsProvider: Send + Sync {
    /// Fetch market insights for the latest session.
    async fn market_insights(&self) -> Result<MarketInsights, DalalError>;
}

/// Focused role trait for connectors that provide the user's portfolio.
#[async_trait]
pub trait PortfolioProvider: Send + Sync {
    /// Fetch holdings and totals.
    async fn portfolio(&self) -> Result<Portfolio, DalalError>;
}

/// Focused role trait for connectors that provide the risk-adjusted ranking.
#[async_trait]
pub trait TopStocksProvider: Send + Sync {
    /// Fetch the Sharpe-ranked stock list.
    async fn top_stocks(&self) -> Result<TopStocks, DalalError>;
}

/// Focused role trait for connectors that provide price forecasts.
#[async_trait]
pub trait ForecastProvider: Send + Sync {
    /// Fetch the forecast for `symbol`.
    async fn forecast(&self, symbol: &str) -> Result<Forecast, DalalError>;
}

/// Focused role trait for connectors that provide news sentiment.
#[async_trait]
pub trait SentimentProvider: Send + Sync {
    /// Fetch aggregate news sentiment for `symbol`.
    async fn sentiment(&self, symbol: &str) -> Result<Sentiment, DalalError>;
}

/// Focused role trait for connectors that provide trading decisions.
#[async_trait]
pub trait DecisionProvider: Send + Sync {
    /// Fetch the decision payload, with history and forecast series, for `symbol`.
    async fn decision(&self, symbol: &str) -> Result<Decision, DalalError>;
}

/// Primary connector interface: identity plus capability discovery.
///
/// Every `as_*_provider` method defaults to `None`; a connector overrides the
/// ones it can serve and returns `Some(self)`.
pub trait DalalConnector: Send + Sync {
    /// A stable identifier used in error messages and routing (e.g. "dalal-http").
    fn name(&self) -> &'static str;

    /// Canonical connector key constructed from the static name.
    fn key(&self) -> ConnectorKey {
        ConnectorKey::new(self.name())
    }

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// If implemented, returns a trait object for the index snapshot.
    fn as_nifty_provider(&self) -> Option<&dyn NiftyProvider> {
        None
    }
    /// If implemented, returns a trait object for index history.
    fn as_nifty_history_provider(&self) -> Option<&dyn NiftyHistoryProvider> {
        None
    }
    /// If implemented, returns a trait object for stock snapshots.
    fn as_stock_provider(&self) -> Option<&dyn StockProvider> {
        None
    }
    /// If implemented, returns a trait object for gainers and losers.
    fn as_market_movers_provider(&self) -> Option<&dyn MarketMoversProvider> {
        None
    }
    /// If implemented, returns a trait object for the most bought stock.
    fn as_most_bought_provider(&self) -> Option<&dyn MostBoughtProvider> {
        None
    }
    /// If implemented, returns a trait object for market insights.
    fn as_market_insights_provider(&self) -> Option<&dyn MarketInsightsProvider> {
        None
    }
    /// If implemented, returns a trait object for the portfolio.
    fn as_portfolio_provider(&self) -> Option<&dyn PortfolioProvider> {
        None
    }

    /// If implemented, returns a trait object for the risk-adjusted ranking.
    fn as_top_stocks_provider(&self) -> Option<&dyn TopStocksProvider> {
        None
    }
    /// If implemented, returns a trait object for forecasts.
    fn as_forecast_provider(&self) -> Option<&dyn ForecastProvider> {
        None
    }
    /// If implemented, returns a trait object for news sentiment.
    fn as_sentiment_provider(&self) -> Option<&dyn SentimentProvider> {
        None
    }
    /// If implemented, returns a trait object for trading decisions.
    fn as_decision_provider(&self) -> Option<&dyn DecisionProvider> {
        None
    }
}
