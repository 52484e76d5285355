use std::time::Duration;

use dalal::{Dalal, DalalError};
use dalal_mock::{TIMEOUT_SYMBOL, DynamicMockConnector, MockBehavior};

use crate::helpers::{INFY, NTPC, dalal_with, decision, mock};

#[tokio::test]
async fn single_forecast_chart_has_history_then_forecast() {
    let dalal = dalal_with(vec![mock()]);
    let chart = dalal.forecast_chart(INFY).await.unwrap();

    assert_eq!(chart.symbol, INFY);
    assert_eq!(chart.series_names, vec!["price_history", "price_forecast"]);
    assert_eq!(chart.rows.len(), 10);
    assert!(chart.dropped.is_empty());
    assert!(chart.rows.windows(2).all(|w| w[0].date < w[1].date));

    let first = &chart.rows[0];
    assert!(first.get("price_history").is_some());
    assert!(first.get("price_forecast").is_none());
    let last = &chart.rows[9];
    assert!(last.get("price_history").is_none());
    assert!(last.get("price_forecast").is_some());
}

#[tokio::test]
async fn extended_payload_charts_every_model() {
    let dalal = dalal_with(vec![mock()]);
    let chart = dalal.forecast_chart(NTPC).await.unwrap();

    assert_eq!(
        chart.series_names,
        vec!["price_history", "price_arima", "price_sarima", "price_garch"]
    );
    assert_eq!(chart.lines().len(), 4);
    assert_eq!(chart.rows.len(), 10);
    // The GARCH array is present but empty: its field exists and is never populated.
    assert!(chart.rows.iter().all(|r| r.values.contains_key("price_garch")));
    assert!(chart.rows.iter().all(|r| r.get("price_garch").is_none()));
}

#[tokio::test]
async fn unparseable_dates_are_dropped_not_fatal() {
    let (p1, c1) = DynamicMockConnector::new_with_controller("p1");
    c1.set_decision_behavior(
        INFY,
        MockBehavior::Return(decision(
            INFY,
            &[("2024-01-01", 100.0), ("yesterday", 101.0)],
            &[("2024-01-02", 105.0)],
        )),
    )
    .await;

    let dalal = dalal_with(vec![p1]);
    let chart = dalal.forecast_chart(INFY).await.unwrap();
    assert_eq!(chart.rows.len(), 2);
    assert_eq!(chart.dropped.len(), 1);
    assert_eq!(chart.dropped[0].series, "price_history");
}

#[tokio::test]
async fn unknown_symbol_is_not_found() {
    let dalal = dalal_with(vec![mock()]);
    assert_eq!(
        dalal.forecast_chart("NOPE").await.unwrap_err(),
        DalalError::not_found("decision for NOPE")
    );
}

#[tokio::test(start_paused = true)]
async fn slow_connector_times_out() {
    let dalal = Dalal::builder()
        .with_connector(mock())
        .provider_timeout(Duration::from_millis(50))
        .build()
        .unwrap();
    assert_eq!(
        dalal.forecast_chart(TIMEOUT_SYMBOL).await.unwrap_err(),
        DalalError::AllProvidersTimedOut {
            capability: "decision".to_string()
        }
    );
}
