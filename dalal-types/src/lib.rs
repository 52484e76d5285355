//! Dalal-specific data transfer objects and configuration primitives.
//!
//! Every backend endpoint gets an explicit wire type here; fields the backend
//! may omit are modelled as `Option` or `#[serde(default)]` instead of being
//! assumed at use sites.
#![warn(missing_docs)]

mod analytics;
mod capability;
mod config;
mod connector;
mod error;
mod market;
mod portfolio;
mod series;

pub use analytics::{
    Decision, Direction, Forecast, NewsItem, PricePoint, RiskMetric, Sentiment, SentimentLabel,
    Signal, TopStocks,
};
pub use capability::Capability;
pub use config::{BackendConfig, DEFAULT_BASE_URL, DalalConfig, PollConfig};
pub use connector::ConnectorKey;
pub use error::DalalError;
pub use market::{
    Breadth, MarketInsights, MarketMovers, MomentumRow, MostBought, Mover, NiftyHistoryPoint,
    NiftySnapshot, SectorStat, StockSnapshot,
};
pub use portfolio::{Holding, Portfolio, PortfolioTotals};
pub use series::{DatedPoint, MergedRow, Series};
