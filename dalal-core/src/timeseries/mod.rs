//! Time-series utilities shared by connectors and orchestrator.
//!
//! Modules include:
//! - `date`: parse upstream date strings into calendar dates
//! - `merge`: outer-join named series into one row per calendar date
//! - `chart`: extract the chart series from a decision payload and merge them
/// Chart series extraction and line metadata.
pub mod chart;
/// Calendar-date parsing for the formats the backend emits.
pub mod date;
/// Date-aligned merge of multiple named series.
pub mod merge;
