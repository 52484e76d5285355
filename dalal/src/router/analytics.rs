use crate::Dalal;
use crate::core::with_request_deadline;
use crate::router::macros::dalal_router_method;
use crate::router::util::normalize_symbol;
use dalal_core::{
    Capability, DalalError, Decision, Forecast, ForecastChart, NewsItem, Sentiment, TopStocks,
    forecast_chart,
};

/// Everything the stock detail view shows for one symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// Symbol the analysis was requested for.
    pub symbol: String,
    /// Trading decision, including the raw price series.
    pub decision: Decision,
    /// News sentiment, when the sentiment fetch succeeded.
    pub sentiment: Option<Sentiment>,
    /// Why the sentiment fetch failed, if it did.
    pub sentiment_error: Option<DalalError>,
    /// Articles behind the sentiment score; empty when sentiment is unavailable.
    pub news: Vec<NewsItem>,
    /// Date-aligned chart built from the decision's series.
    pub chart: ForecastChart,
}

impl Dalal {
    dalal_router_method! {
        /// Fetch the Sharpe-ranked stock list.
        method: top_stocks() -> TopStocks,
        accessor: as_top_stocks_provider,
        capability: Capability::TopStocks,
        not_found: "top stocks",
        call: top_stocks
    }

    dalal_router_method! {
        /// Fetch the price forecast for a symbol.
        method: forecast(symbol) -> Forecast,
        accessor: as_forecast_provider,
        capability: Capability::Forecast,
        not_found: "forecast",
        call: forecast
    }

    dalal_router_method! {
        /// Fetch aggregate news sentiment for a symbol.
        method: sentiment(symbol) -> Sentiment,
        accessor: as_sentiment_provider,
        capability: Capability::Sentiment,
        not_found: "sentiment",
        call: sentiment
    }

    dalal_router_method! {
        /// Fetch the trading decision for a symbol, with its history and forecast series.
        method: decision(symbol) -> Decision,
        accessor: as_decision_provider,
        capability: Capability::Decision,
        not_found: "decision",
        call: decision
    }

    /// Fetch the decision for `symbol` and merge its series into a chart.
    ///
    /// Points with unreadable dates are dropped and reported on the chart;
    /// they never fail the call.
    ///
    /// # Errors
    /// Propagates any error from [`Dalal::decision`].
    #[cfg_attr(feature = "tracing", tracing::instrument(target = "dalal::router", skip(self)))]
    pub async fn forecast_chart(&self, symbol: &str) -> Result<ForecastChart, DalalError> {
        let decision = self.decision(symbol).await?;
        Ok(forecast_chart(&decision))
    }

    /// Fetch decision and sentiment for `symbol` concurrently and assemble the analysis.
    ///
    /// Behavior:
    /// - Both fetches start together; neither waits on the other.
    /// - The chart is merged only after both have resolved.
    /// - Sentiment is best-effort: on failure `news` is empty and the error is kept
    ///   in `sentiment_error`.
    /// - The configured request timeout bounds the whole fan-out.
    ///
    /// # Errors
    /// Returns `InvalidArg` for a blank symbol, `RequestTimeout` when the request
    /// deadline elapses, or the decision error when no connector produced one.
    #[cfg_attr(feature = "tracing", tracing::instrument(target = "dalal::router", skip(self)))]
    pub async fn analyse(&self, symbol: &str) -> Result<Analysis, DalalError> {
        let symbol = normalize_symbol(symbol)?;
        let (decision, sentiment) = with_request_deadline(self.cfg.request_timeout, async {
            futures::join!(self.decision(&symbol), self.sentiment(&symbol))
        })
        .await
        .map_err(|_| DalalError::request_timeout("analysis"))?;

        let decision = decision?;
        let (sentiment, sentiment_error) = match sentiment {
            Ok(s) => (Some(s), None),
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(target: "dalal::router", symbol = %symbol, error = %e, "sentiment unavailable");
                (None, Some(e))
            }
        };
        let news = sentiment
            .as_ref()
            .map(|s| s.news.clone())
            .unwrap_or_default();
        let chart = forecast_chart(&decision);

        Ok(Analysis {
            symbol,
            decision,
            sentiment,
            sentiment_error,
            news,
            chart,
        })
    }
}
