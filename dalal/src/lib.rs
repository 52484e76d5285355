//! Dalal routes investment-dashboard requests across pluggable data connectors.
//!
//! Overview
//! - Routes each request to connectors that implement the `dalal_core` role traits.
//! - Tries connectors in registration order with a per-provider timeout; the first
//!   success wins and failures are collapsed into one uniform error.
//! - Assembles the forecast chart by merging the decision payload's price series
//!   onto one calendar-date axis.
//! - Runs the per-symbol analysis (decision plus sentiment) concurrently under an
//!   optional request deadline.
//! - Discards results for superseded selections via [`AnalysisSession`].
//! - Refreshes market movers and the index snapshot in cancellable polling tasks.
//!
//! Examples
//! Building an orchestrator:
//! ```rust,ignore
//! use std::sync::Arc;
//! use std::time::Duration;
//! use dalal::Dalal;
//!
//! let http = Arc::new(dalal_http::HttpConnector::new(&dalal::BackendConfig::from_env()?)?);
//! let dalal = Dalal::builder()
//!     .with_connector(http)
//!     .provider_timeout(Duration::from_secs(5))
//!     .request_timeout(Duration::from_secs(20))
//!     .poll_interval(Duration::from_secs(60))
//!     .build()?;
//! ```
//!
//! Fetching the chart for a stock:
//! ```rust,ignore
//! let chart = dalal.forecast_chart("ENERGY_NTPC").await?;
//! for row in &chart.rows {
//!     println!("{} {:?}", row.date, row.get("price_forecast"));
//! }
//! ```
//!
//! Watching market movers:
//! ```rust,ignore
//! let (handle, mut rx) = dalal.watch_market_movers()?;
//! while let Some(movers) = rx.recv().await {
//!     // ... render ...
//! }
//! handle.stop().await;
//! ```
#![warn(missing_docs)]

pub(crate) mod core;
mod router;

pub use crate::core::{Dalal, DalalBuilder};
pub use dalal_core::*;
pub use router::analytics::Analysis;
pub use router::session::AnalysisSession;
pub use router::util::collapse_errors;
