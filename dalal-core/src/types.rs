//! Re-export of foundational types from `dalal-types`.
// Consolidated re-exports so downstream crates can depend on `dalal-core` only

pub use dalal_types::{Capability, ConnectorKey, DalalError};
pub use dalal_types::{BackendConfig, DEFAULT_BASE_URL, DalalConfig, PollConfig};

pub use dalal_types::{DatedPoint, MergedRow, Series};

pub use dalal_types::{
    Breadth, MarketInsights, MarketMovers, MomentumRow, MostBought, Mover, NiftyHistoryPoint,
    NiftySnapshot, SectorStat, StockSnapshot,
};
pub use dalal_types::{Holding, Portfolio, PortfolioTotals};

pub use dalal_types::{
    Decision, Direction, Forecast, NewsItem, PricePoint, RiskMetric, Sentiment, SentimentLabel,
    Signal, TopStocks,
};
