//! Wire types for the sentiment-driven stock analytics endpoints.

use serde::{Deserialize, Serialize};

/// `{date, price}` record used by history and forecast arrays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Date string as sent by the backend (`YYYY-MM-DD` for these endpoints).
    pub date: String,
    /// Price at `date`; absent or null means no observation.
    #[serde(default)]
    pub price: Option<f64>,
}

impl PricePoint {
    /// Convenience constructor for a populated point.
    pub fn new(date: impl Into<String>, price: f64) -> Self {
        Self {
            date: date.into(),
            price: Some(price),
        }
    }
}

/// Annualized return, volatility and Sharpe ratio for one symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskMetric {
    /// Backend symbol (e.g. `ENERGY_NTPC`).
    pub symbol: String,
    /// Annualized return in percent.
    pub annual_return: f64,
    /// Annualized volatility in percent.
    pub volatility: f64,
    /// Return over volatility.
    pub sharpe: f64,
}

/// Risk-adjusted ranking, best Sharpe first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopStocks {
    /// First ten entries of the ranking.
    #[serde(default)]
    pub top_10: Vec<RiskMetric>,
    /// First five entries of the ranking.
    #[serde(default)]
    pub top_5: Vec<RiskMetric>,
    /// Full ranking.
    #[serde(default)]
    pub all_ranked: Vec<RiskMetric>,
}

/// Direction implied by the last forecast point relative to the last actual price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    /// Forecast ends above the last actual price.
    Up,
    /// Forecast ends at or below the last actual price.
    Down,
}

/// Forecast for one symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    /// Symbol the forecast was produced for.
    pub symbol: String,
    /// Last observed price.
    pub last_actual: f64,
    /// Forecast points, one per future calendar day.
    #[serde(default)]
    pub future: Vec<PricePoint>,
    /// Overall direction of the forecast.
    pub direction: Direction,
}

/// Coarse sentiment classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SentimentLabel {
    /// Score above `0.1`.
    Positive,
    /// Score below `-0.1`.
    Negative,
    /// Anything in between.
    #[default]
    Neutral,
}

impl SentimentLabel {
    /// Polarity beyond which a score stops being neutral.
    pub const THRESHOLD: f64 = 0.1;

    /// Classify a polarity score in `[-1, 1]`.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score > Self::THRESHOLD {
            Self::Positive
        } else if score < -Self::THRESHOLD {
            Self::Negative
        } else {
            Self::Neutral
        }
    }
}

/// One news article with its polarity score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    /// Headline.
    #[serde(default)]
    pub title: String,
    /// Article summary, when the news source provides one.
    #[serde(default)]
    pub description: Option<String>,
    /// Publication timestamp string as given by the news source.
    #[serde(default)]
    pub published_date: Option<String>,
    /// Polarity of title and description.
    #[serde(default)]
    pub sentiment_score: f64,
}

impl NewsItem {
    /// Tone of this article, using the same thresholds as the aggregate label.
    #[must_use]
    pub fn tone(&self) -> SentimentLabel {
        SentimentLabel::from_score(self.sentiment_score)
    }

    /// Date part of `published_date` (its first ten characters).
    #[must_use]
    pub fn published_on(&self) -> Option<&str> {
        let raw = self.published_date.as_deref()?;
        Some(raw.get(..10).unwrap_or(raw))
    }
}

/// Aggregate news sentiment for a symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    /// Symbol queried.
    pub symbol: String,
    /// Mean polarity across articles.
    #[serde(default)]
    pub score: f64,
    /// Classification of `score`.
    #[serde(default)]
    pub label: SentimentLabel,
    /// Articles behind the score.
    #[serde(default)]
    pub news: Vec<NewsItem>,
}

/// Final trading signal combining forecast direction and sentiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Signal {
    /// Upward forecast with positive sentiment.
    Buy,
    /// Upward forecast with negative sentiment.
    Wait,
    /// Downward forecast with negative sentiment.
    Avoid,
    /// Everything else.
    Hold,
}

/// Decision payload: signal plus the history and forecast series behind it.
///
/// The basic payload carries `forecast`; the extended one adds per-model
/// arrays. Absent per-model arrays stay `None` so callers can tell the two apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    /// Symbol analysed.
    pub symbol: String,
    /// Final signal.
    pub signal: Signal,
    /// Direction of the forecast.
    pub forecast_direction: Direction,
    /// Sentiment classification.
    pub sentiment_label: SentimentLabel,
    /// Sentiment score.
    #[serde(default)]
    pub sentiment_score: f64,
    /// Primary forecast series.
    #[serde(default)]
    pub forecast: Vec<PricePoint>,
    /// ARIMA forecast, extended payload only.
    #[serde(default)]
    pub forecast_arima: Option<Vec<PricePoint>>,
    /// SARIMA forecast, extended payload only.
    #[serde(default)]
    pub forecast_sarima: Option<Vec<PricePoint>>,
    /// GARCH forecast, extended payload only.
    #[serde(default)]
    pub forecast_garch: Option<Vec<PricePoint>>,
    /// Historical prices.
    #[serde(default)]
    pub history: Vec<PricePoint>,
    /// News articles, when the backend attaches them.
    #[serde(default)]
    pub news: Vec<NewsItem>,
}

impl Decision {
    /// True when any per-model forecast array is present (even if empty).
    #[must_use]
    pub const fn is_extended(&self) -> bool {
        self.forecast_arima.is_some()
            || self.forecast_sarima.is_some()
            || self.forecast_garch.is_some()
    }
}
