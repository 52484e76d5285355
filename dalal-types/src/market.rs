//! Wire types for the market overview endpoints.

use serde::{Deserialize, Serialize};

/// Index level snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NiftySnapshot {
    /// Latest index level.
    pub nifty_value: f64,
    /// Change against the previous session, in percent.
    pub change_pct: f64,
    /// Session date (`DD-MM-YYYY`).
    pub date: String,
}

/// One record of the index history, as the backend serializes its frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NiftyHistoryPoint {
    /// Session timestamp, typically an HTTP-date (`Tue, 02 Jan 2024 00:00:00 GMT`).
    #[serde(rename = "Date")]
    pub date: String,
    /// Index level; null when the session had no prices.
    #[serde(rename = "NIFTY", default)]
    pub nifty: Option<f64>,
}

/// Snapshot of a single symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockSnapshot {
    /// Symbol queried.
    pub symbol: String,
    /// Latest price.
    pub latest_value: f64,
    /// Absolute change against the previous session.
    pub change: f64,
    /// Percent change against the previous session.
    pub change_pct: f64,
    /// Session date (`DD-MM-YYYY`).
    pub date: String,
}

/// A gainer or loser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mover {
    /// Symbol.
    pub symbol: String,
    /// Last traded price.
    pub ltp: f64,
    /// Percent change against the previous session.
    pub pct_change: f64,
}

/// Top gainers and losers for the latest session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketMovers {
    /// Session date; absent when the backend has no data.
    #[serde(default)]
    pub date: Option<String>,
    /// Best performers, strongest first.
    #[serde(default)]
    pub gainers: Vec<Mover>,
    /// Worst performers, weakest first.
    #[serde(default)]
    pub losers: Vec<Mover>,
}

impl MarketMovers {
    /// True when neither list has entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.gainers.is_empty() && self.losers.is_empty()
    }
}

/// The day's strongest performer, used as a "most bought" proxy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MostBought {
    /// Session date.
    #[serde(default)]
    pub date: Option<String>,
    /// Symbol.
    pub symbol: String,
    /// Last traded price.
    pub ltp: f64,
    /// Percent change against the previous session.
    pub pct_change: f64,
}

/// Advancers versus decliners for the latest session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Breadth {
    /// Symbols that closed higher.
    #[serde(default)]
    pub advancers: u32,
    /// Symbols that closed lower.
    #[serde(default)]
    pub decliners: u32,
    /// Symbols that closed flat.
    #[serde(default)]
    pub unchanged: u32,
    /// `advancers / decliners`; null when there were no decliners.
    #[serde(default)]
    pub adv_decl_ratio: Option<f64>,
}

/// Breadth and average move for one sector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorStat {
    /// Sector label (symbol prefix before `_`, or `OTHER`).
    pub sector: String,
    /// Advancing symbols in the sector.
    #[serde(default)]
    pub advancers: u32,
    /// Declining symbols in the sector.
    #[serde(default)]
    pub decliners: u32,
    /// Flat symbols in the sector.
    #[serde(default)]
    pub unchanged: u32,
    /// Mean percent move across the sector.
    pub avg_move: f64,
}

/// Short and medium term momentum for a symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MomentumRow {
    /// Symbol.
    pub symbol: String,
    /// Five-session percent change.
    pub pct_5d: f64,
    /// Twenty-session percent change.
    pub pct_20d: f64,
    /// Weighted momentum score.
    pub momentum_score: f64,
}

/// Market breadth, sector and momentum insights.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketInsights {
    /// Session date.
    #[serde(default)]
    pub date: Option<String>,
    /// Whole-market breadth.
    #[serde(default)]
    pub breadth: Breadth,
    /// Per-sector statistics.
    #[serde(default)]
    pub sectors: Vec<SectorStat>,
    /// Strongest momentum names, best first.
    #[serde(default)]
    pub momentum: Vec<MomentumRow>,
}
