use std::time::Duration;

use chrono::NaiveDate;
use dalal::{Dalal, DalalError};
use dalal_mock::{DynamicMockConnector, MockBehavior};

use crate::helpers::{INFY, dalal_with, decision, sentiment};

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[tokio::test]
async fn analyse_merges_history_and_forecast_by_date() {
    let (p1, c1) = DynamicMockConnector::new_with_controller("p1");
    c1.set_decision_behavior(
        INFY,
        MockBehavior::Return(decision(INFY, &[("2024-01-01", 100.0)], &[("2024-01-02", 105.0)])),
    )
    .await;
    c1.set_sentiment_behavior(INFY, MockBehavior::Return(sentiment(INFY, 0.3)))
        .await;

    let dalal = dalal_with(vec![p1]);
    let a = dalal.analyse(INFY).await.unwrap();

    assert_eq!(a.symbol, INFY);
    assert_eq!(a.news.len(), 1);
    assert!(a.sentiment.is_some());
    assert!(a.sentiment_error.is_none());

    let rows = &a.chart.rows;
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].date, day("2024-01-01"));
    assert_eq!(rows[0].get("price_history"), Some(100.0));
    assert_eq!(rows[0].get("price_forecast"), None);
    assert_eq!(rows[1].date, day("2024-01-02"));
    assert_eq!(rows[1].get("price_history"), None);
    assert_eq!(rows[1].get("price_forecast"), Some(105.0));
}

#[tokio::test(start_paused = true)]
async fn decision_and_sentiment_are_fetched_concurrently() {
    let (p1, c1) = DynamicMockConnector::new_with_controller("p1");
    c1.set_decision_behavior(
        INFY,
        MockBehavior::ReturnAfter(Duration::from_secs(1), decision(INFY, &[], &[])),
    )
    .await;
    c1.set_sentiment_behavior(
        INFY,
        MockBehavior::ReturnAfter(Duration::from_secs(1), sentiment(INFY, 0.0)),
    )
    .await;

    let dalal = Dalal::builder()
        .with_connector(p1)
        .provider_timeout(Duration::from_secs(5))
        .build()
        .unwrap();

    let started = tokio::time::Instant::now();
    dalal.analyse(INFY).await.unwrap();
    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_secs(1));
    assert!(elapsed < Duration::from_millis(1_500), "{elapsed:?}");
}

#[tokio::test]
async fn sentiment_failure_leaves_news_empty() {
    let (p1, c1) = DynamicMockConnector::new_with_controller("p1");
    c1.set_decision_behavior(
        INFY,
        MockBehavior::Return(decision(INFY, &[("2024-01-01", 100.0)], &[])),
    )
    .await;
    c1.set_sentiment_behavior(INFY, MockBehavior::Fail(DalalError::Other("down".into())))
        .await;

    let dalal = dalal_with(vec![p1]);
    let a = dalal.analyse(INFY).await.unwrap();

    assert!(a.news.is_empty());
    assert!(a.sentiment.is_none());
    assert!(matches!(
        a.sentiment_error,
        Some(DalalError::AllProvidersFailed(_))
    ));
    assert_eq!(a.chart.rows.len(), 1);
}

#[tokio::test]
async fn decision_failure_fails_the_analysis() {
    let (p1, c1) = DynamicMockConnector::new_with_controller("p1");
    c1.set_decision_behavior(INFY, MockBehavior::Fail(DalalError::not_found("x")))
        .await;
    c1.set_sentiment_behavior(INFY, MockBehavior::Return(sentiment(INFY, 0.3)))
        .await;

    let dalal = dalal_with(vec![p1]);
    let err = dalal.analyse(INFY).await.unwrap_err();
    assert_eq!(err, DalalError::not_found("decision for IT_INFY"));
}

#[tokio::test(start_paused = true)]
async fn request_deadline_bounds_the_fan_out() {
    let (p1, c1) = DynamicMockConnector::new_with_controller("p1");
    c1.set_decision_behavior(INFY, MockBehavior::Hang).await;
    c1.set_sentiment_behavior(INFY, MockBehavior::Return(sentiment(INFY, 0.3)))
        .await;

    let dalal = Dalal::builder()
        .with_connector(p1)
        .provider_timeout(Duration::from_secs(30))
        .request_timeout(Duration::from_millis(100))
        .build()
        .unwrap();

    let err = dalal.analyse(INFY).await.unwrap_err();
    assert_eq!(err, DalalError::request_timeout("analysis"));
}

#[tokio::test]
async fn analyse_rejects_blank_symbol() {
    let (p1, _c1) = DynamicMockConnector::new_with_controller("p1");
    let dalal = dalal_with(vec![p1]);
    assert!(matches!(
        dalal.analyse("").await,
        Err(DalalError::InvalidArg(_))
    ));
}
