//! Series data model consumed and produced by the timeline merger.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::PricePoint;

/// One dated observation from an upstream series.
///
/// `date` is kept as the raw upstream string; the merger parses it into a
/// calendar date. A `None` value means "no contribution", never zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatedPoint {
    /// ISO-8601, HTTP-date or locale date string as sent upstream.
    pub date: String,
    /// Observed value; upstream series call this field `price`.
    #[serde(default, alias = "price")]
    pub value: Option<f64>,
}

impl DatedPoint {
    /// Convenience constructor for a populated point.
    pub fn new(date: impl Into<String>, value: f64) -> Self {
        Self {
            date: date.into(),
            value: Some(value),
        }
    }
}

impl From<&PricePoint> for DatedPoint {
    fn from(p: &PricePoint) -> Self {
        Self {
            date: p.date.clone(),
            value: p.price,
        }
    }
}

/// A named, ordered collection of dated points from one upstream source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    /// Field name this series occupies on every merged row (e.g. `price_history`).
    pub name: String,
    /// Points in upstream order; dates need not be shared with other series.
    #[serde(default)]
    pub points: Vec<DatedPoint>,
}

impl Series {
    /// Build a series from owned points.
    pub fn new(name: impl Into<String>, points: Vec<DatedPoint>) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }

    /// Build a series from backend `{date, price}` records.
    pub fn from_prices(name: impl Into<String>, prices: &[PricePoint]) -> Self {
        Self::new(name, prices.iter().map(DatedPoint::from).collect())
    }

    /// True when the series contributes no points at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// One merged record per distinct calendar date.
///
/// Serializes flat, e.g. `{"date":"2024-01-01","price_forecast":null,"price_history":100.0}`,
/// so a chart surface can key its X axis on `date` and draw one line per field.
/// A series may not be named [`MergedRow::DATE_FIELD`]; the merger refuses it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedRow {
    /// Calendar date of the row, serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    /// One entry per input series name; `None` where that series has no value at `date`.
    #[serde(flatten)]
    pub values: BTreeMap<String, Option<f64>>,
}

impl MergedRow {
    /// Key the row's date serializes under; reserved, so no series can use it.
    pub const DATE_FIELD: &'static str = "date";

    /// Value of series `name` at this row's date, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied().flatten()
    }

    /// Names of the series that have a value on this row.
    pub fn populated(&self) -> impl Iterator<Item = &str> {
        self.values
            .iter()
            .filter(|(_, v)| v.is_some())
            .map(|(k, _)| k.as_str())
    }
}
