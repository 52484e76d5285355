//! dalal-core
//!
//! Core types, traits, and utilities shared across the dalal workspace.
//!
//! - `types`: wire types re-exported from `dalal-types`.
//! - `connector`: the `DalalConnector` trait and capability provider traits.
//! - `timeseries`: calendar-date parsing and the date-aligned merge behind the forecast chart.
//! - `heatmap`: colour tiers for the movers heatmap.
//! - `selection`: tickets that let late results for a superseded subject be discarded.
//!
//! Async runtime (Tokio)
//! ---------------------
//! `poll::PollHandle` wraps `tokio::task::JoinHandle<()>` and uses
//! `tokio::sync::oneshot::Sender<()>` for cooperative shutdown, so polling
//! must run under a Tokio 1.x runtime. Everything in `timeseries` is
//! synchronous and pure.
#![warn(missing_docs)]

/// Connector capability traits and the primary `DalalConnector` interface.
pub mod connector;
/// Heatmap tiles and colour tiers for market movers.
pub mod heatmap;
/// Handle and drop logic for cancellable polling tasks.
pub mod poll;
/// Subject selection tracking for stale-result discarding.
pub mod selection;
/// Time-series utilities: date parsing, merging, chart assembly.
pub mod timeseries;
pub mod types;

pub use connector::DalalConnector;
pub use heatmap::{HeatTier, HeatmapTile, heatmap_tiles};
pub use poll::PollHandle;
pub use selection::{SelectionTicket, SubjectTracker};
pub use timeseries::chart::{ChartLine, ForecastChart, decision_series, forecast_chart};
pub use timeseries::date::parse_calendar_date;
pub use timeseries::merge::{DroppedPoint, MergeOutcome, merge_series, merge_series_strict};
pub use types::*;
