use core::fmt;
use serde::{Deserialize, Serialize};

/// High-level capability labels for routing, errors, and telemetry.
///
/// These map one-to-one with backend endpoints and give consistent
/// Display formatting across error messages and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Capability {
    /// Index level snapshot (`/api/nifty`).
    Nifty,
    /// Index level history for charting (`/api/nifty/history`).
    NiftyHistory,
    /// Single symbol snapshot (`/api/stock/<symbol>`).
    Stock,
    /// Top gainers and losers (`/api/market-movers`).
    MarketMovers,
    /// Single best performer of the day (`/api/most-bought`).
    MostBought,
    /// Breadth, sector and momentum insights (`/api/market-insights`).
    MarketInsights,
    /// Holdings and totals (`/api/portfolio`).
    Portfolio,
    /// Risk-adjusted ranking (`/api/dsfm/top-stocks`).
    TopStocks,
    /// Price forecast for a symbol (`/api/dsfm/forecast/<symbol>`).
    Forecast,
    /// News sentiment for a symbol (`/api/dsfm/sentiment/<symbol>`).
    Sentiment,
    /// Combined signal with history and forecast series (`/api/dsfm/decision/<symbol>`).
    Decision,
}

impl Capability {
    /// Stable, kebab-case identifier for logs/errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nifty => "nifty",
            Self::NiftyHistory => "nifty-history",
            Self::Stock => "stock",
            Self::MarketMovers => "market-movers",
            Self::MostBought => "most-bought",
            Self::MarketInsights => "market-insights",
            Self::Portfolio => "portfolio",
            Self::TopStocks => "top-stocks",
            Self::Forecast => "forecast",
            Self::Sentiment => "sentiment",
            Self::Decision => "decision",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
