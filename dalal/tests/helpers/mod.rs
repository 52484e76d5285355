// Shared fixtures for router tests.
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use dalal::{
    Dalal, DalalConnector, Decision, Direction, NewsItem, PricePoint, Sentiment, SentimentLabel,
    Signal,
};
use dalal_mock::MockConnector;

pub const INFY: &str = "IT_INFY";
pub const NTPC: &str = "ENERGY_NTPC";

/// Connector that advertises no capabilities at all.
pub struct BareConnector;

impl DalalConnector for BareConnector {
    fn name(&self) -> &'static str {
        "bare"
    }
}

pub fn bare() -> Arc<dyn DalalConnector> {
    Arc::new(BareConnector)
}

pub fn mock() -> Arc<dyn DalalConnector> {
    Arc::new(MockConnector::new())
}

/// Orchestrator over `connectors` with a short provider timeout.
pub fn dalal_with(connectors: Vec<Arc<dyn DalalConnector>>) -> Dalal {
    connectors
        .into_iter()
        .fold(Dalal::builder(), dalal::DalalBuilder::with_connector)
        .provider_timeout(Duration::from_millis(50))
        .poll_interval(Duration::from_secs(10))
        .build()
        .unwrap()
}

pub fn points(raw: &[(&str, f64)]) -> Vec<PricePoint> {
    raw.iter().map(|(d, p)| PricePoint::new(*d, *p)).collect()
}

/// Single-forecast decision with the given series.
pub fn decision(symbol: &str, history: &[(&str, f64)], forecast: &[(&str, f64)]) -> Decision {
    Decision {
        symbol: symbol.to_string(),
        signal: Signal::Hold,
        forecast_direction: Direction::Up,
        sentiment_label: SentimentLabel::Neutral,
        sentiment_score: 0.0,
        forecast: points(forecast),
        forecast_arima: None,
        forecast_sarima: None,
        forecast_garch: None,
        history: points(history),
        news: vec![],
    }
}

pub fn sentiment(symbol: &str, score: f64) -> Sentiment {
    Sentiment {
        symbol: symbol.to_string(),
        score,
        label: SentimentLabel::from_score(score),
        news: vec![NewsItem {
            title: format!("{symbol} in focus"),
            description: None,
            published_date: None,
            sentiment_score: score,
        }],
    }
}
