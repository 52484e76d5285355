use serde::Serialize;

use crate::timeseries::merge::{DroppedPoint, merge_series};
use crate::{Decision, MergedRow, Series};

/// Field name of the historical price line.
pub const PRICE_HISTORY: &str = "price_history";
/// Field name of the single-model forecast line.
pub const PRICE_FORECAST: &str = "price_forecast";
/// Field name of the ARIMA forecast line.
pub const PRICE_ARIMA: &str = "price_arima";
/// Field name of the SARIMA forecast line.
pub const PRICE_SARIMA: &str = "price_sarima";
/// Field name of the GARCH forecast line.
pub const PRICE_GARCH: &str = "price_garch";

const FALLBACK_COLOR: &str = "#9CA3AF";

/// Display metadata for one line on the forecast chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartLine {
    /// Field name on the merged rows.
    pub key: String,
    /// Legend label.
    pub label: String,
    /// Stroke colour as a CSS hex string.
    pub color: &'static str,
}

impl ChartLine {
    /// Metadata for a series name; unknown names use the name itself and a neutral grey.
    #[must_use]
    pub fn for_key(key: &str) -> Self {
        let (label, color) = match key {
            PRICE_HISTORY => ("History", "#60A5FA"),
            PRICE_ARIMA => ("ARIMA", "#FACC15"),
            PRICE_SARIMA => ("SARIMA", "#FB923C"),
            PRICE_GARCH => ("GARCH", "#34D399"),
            PRICE_FORECAST => ("Forecast", "#FACC15"),
            other => (other, FALLBACK_COLOR),
        };
        Self {
            key: key.to_string(),
            label: label.to_string(),
            color,
        }
    }
}

/// Chart-ready view of a decision: merged rows plus the lines to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastChart {
    /// Symbol the decision was produced for.
    pub symbol: String,
    /// Series names in drawing order.
    pub series_names: Vec<String>,
    /// One row per calendar date, oldest first.
    pub rows: Vec<MergedRow>,
    /// Points whose dates could not be parsed.
    pub dropped: Vec<DroppedPoint>,
}

impl ForecastChart {
    /// Line metadata for every series, in drawing order.
    #[must_use]
    pub fn lines(&self) -> Vec<ChartLine> {
        self.series_names
            .iter()
            .map(|k| ChartLine::for_key(k))
            .collect()
    }

    /// True when there is nothing to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Named series carried by a decision payload, in drawing order.
///
/// A payload with any per-model forecast yields history plus one series per
/// model; a missing model array becomes an empty series so its field still
/// appears on every row. Otherwise the payload yields history plus the single
/// forecast.
#[must_use]
pub fn decision_series(decision: &Decision) -> Vec<Series> {
    let history = Series::from_prices(PRICE_HISTORY, &decision.history);
    if decision.is_extended() {
        let model = |name: &str, prices: Option<&Vec<_>>| {
            prices.map_or_else(|| Series::new(name, Vec::new()), |p| Series::from_prices(name, p))
        };
        vec![
            history,
            model(PRICE_ARIMA, decision.forecast_arima.as_ref()),
            model(PRICE_SARIMA, decision.forecast_sarima.as_ref()),
            model(PRICE_GARCH, decision.forecast_garch.as_ref()),
        ]
    } else {
        vec![
            history,
            Series::from_prices(PRICE_FORECAST, &decision.forecast),
        ]
    }
}

/// Extract the chart series from `decision` and merge them by calendar date.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "dalal::timeseries::forecast_chart",
        skip(decision),
        fields(symbol = %decision.symbol),
    )
)]
#[must_use]
pub fn forecast_chart(decision: &Decision) -> ForecastChart {
    let series = decision_series(decision);
    let outcome = merge_series(&series);
    ForecastChart {
        symbol: decision.symbol.clone(),
        series_names: series.into_iter().map(|s| s.name).collect(),
        rows: outcome.rows,
        dropped: outcome.dropped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Direction, PricePoint, SentimentLabel, Signal};

    fn decision() -> Decision {
        Decision {
            symbol: "ENERGY_NTPC".into(),
            signal: Signal::Hold,
            forecast_direction: Direction::Up,
            sentiment_label: SentimentLabel::Neutral,
            sentiment_score: 0.0,
            forecast: vec![PricePoint::new("2024-01-03", 105.0)],
            forecast_arima: None,
            forecast_sarima: None,
            forecast_garch: None,
            history: vec![
                PricePoint::new("2024-01-01", 100.0),
                PricePoint::new("2024-01-02", 102.0),
            ],
            news: vec![],
        }
    }

    #[test]
    fn basic_payload_draws_history_and_forecast() {
        let chart = forecast_chart(&decision());
        assert_eq!(chart.series_names, vec![PRICE_HISTORY, PRICE_FORECAST]);
        assert_eq!(chart.rows.len(), 3);
        assert_eq!(chart.rows[2].get(PRICE_FORECAST), Some(105.0));
        assert_eq!(chart.rows[2].get(PRICE_HISTORY), None);
    }

    #[test]
    fn extended_payload_keeps_absent_models_as_null_columns() {
        let mut d = decision();
        d.forecast_arima = Some(vec![PricePoint::new("2024-01-03", 104.0)]);
        d.forecast_garch = Some(vec![]);

        let chart = forecast_chart(&d);
        assert_eq!(
            chart.series_names,
            vec![PRICE_HISTORY, PRICE_ARIMA, PRICE_SARIMA, PRICE_GARCH]
        );
        for row in &chart.rows {
            assert!(row.values.contains_key(PRICE_SARIMA));
            assert!(row.values.contains_key(PRICE_GARCH));
            assert!(!row.values.contains_key(PRICE_FORECAST));
        }
        assert_eq!(chart.rows[2].get(PRICE_ARIMA), Some(104.0));
    }

    #[test]
    fn line_metadata_falls_back_for_unknown_keys() {
        let chart = forecast_chart(&decision());
        let lines = chart.lines();
        assert_eq!(lines[0].label, "History");
        assert_eq!(lines[0].color, "#60A5FA");
        assert_eq!(lines[1].label, "Forecast");

        let other = ChartLine::for_key("price_lstm");
        assert_eq!(other.label, "price_lstm");
        assert_eq!(other.color, "#9CA3AF");
    }
}
