use chrono::{Days, NaiveDate};
use dalal_core::{
    Decision, Direction, Forecast, NewsItem, PricePoint, RiskMetric, Sentiment, SentimentLabel,
    Signal, TopStocks,
};

use super::SESSION;

const HORIZON: u64 = 5;

// (symbol, closes ending at SESSION, daily forecast drift, sentiment score)
type Profile = (&'static str, [f64; 5], f64, f64);

const PROFILES: [Profile; 4] = [
    ("ENERGY_NTPC", [301.2, 303.8, 304.5, 306.1, 309.4], 1.1, 0.18),
    ("IT_INFY", [1_560.0, 1_552.3, 1_548.7, 1_541.0, 1_522.6], -4.2, -0.21),
    ("AUTO_TATAMOTORS", [730.1, 735.6, 741.0, 742.3, 781.5], 2.4, -0.15),
    ("FMCG_ITC", [466.0, 467.2, 468.0, 468.3, 468.3], -0.3, 0.04),
];

fn profile(symbol: &str) -> Option<&'static Profile> {
    PROFILES.iter().find(|p| p.0 == symbol)
}

fn session() -> NaiveDate {
    NaiveDate::parse_from_str(SESSION, "%Y-%m-%d").expect("fixture session date")
}

fn history(closes: &[f64; 5]) -> Vec<PricePoint> {
    let start = session() - Days::new(closes.len() as u64 - 1);
    closes
        .iter()
        .enumerate()
        .map(|(i, px)| PricePoint::new(fmt(start + Days::new(i as u64)), *px))
        .collect()
}

fn projection(last: f64, drift: f64) -> Vec<PricePoint> {
    (1..=HORIZON)
        .map(|i| {
            let px = (drift.mul_add(i as f64, last) * 100.0).round() / 100.0;
            PricePoint::new(fmt(session() + Days::new(i)), px)
        })
        .collect()
}

fn fmt(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

fn direction(last: f64, future: &[PricePoint]) -> Direction {
    match future.last().and_then(|p| p.price) {
        Some(end) if end > last => Direction::Up,
        _ => Direction::Down,
    }
}

fn signal(direction: Direction, label: SentimentLabel) -> Signal {
    match (direction, label) {
        (Direction::Up, SentimentLabel::Positive) => Signal::Buy,
        (Direction::Up, SentimentLabel::Negative) => Signal::Wait,
        (Direction::Down, SentimentLabel::Negative) => Signal::Avoid,
        _ => Signal::Hold,
    }
}

pub fn top_stocks() -> TopStocks {
    let mut ranked = vec![
        metric("ENERGY_NTPC", 38.4, 21.7),
        metric("AUTO_TATAMOTORS", 52.9, 33.5),
        metric("FMCG_ITC", 12.1, 14.9),
        metric("IT_INFY", 6.3, 22.8),
        metric("BANK_HDFCBANK", 4.9, 18.4),
        metric("IT_WIPRO", -3.2, 24.1),
    ];
    ranked.sort_by(|a, b| b.sharpe.total_cmp(&a.sharpe));
    TopStocks {
        top_10: ranked.iter().take(10).cloned().collect(),
        top_5: ranked.iter().take(5).cloned().collect(),
        all_ranked: ranked,
    }
}

fn metric(symbol: &str, annual_return: f64, volatility: f64) -> RiskMetric {
    RiskMetric {
        symbol: symbol.to_string(),
        annual_return,
        volatility,
        sharpe: (annual_return / volatility * 100.0).round() / 100.0,
    }
}

pub fn forecast(symbol: &str) -> Option<Forecast> {
    let (sym, closes, drift, _) = profile(symbol)?;
    let last = closes[closes.len() - 1];
    let future = projection(last, *drift);
    Some(Forecast {
        symbol: (*sym).to_string(),
        last_actual: last,
        direction: direction(last, &future),
        future,
    })
}

fn news(symbol: &str, score: f64) -> Vec<NewsItem> {
    let company = symbol.split_once('_').map_or(symbol, |(_, c)| c);
    vec![
        NewsItem {
            title: format!("{company} shares in focus after quarterly update"),
            description: Some(format!("Analysts weigh in on {company}'s outlook.")),
            published_date: Some(format!("{SESSION}T06:30:00Z")),
            sentiment_score: score,
        },
        NewsItem {
            title: format!("Brokerages revise targets on {company}"),
            description: None,
            published_date: Some(format!("{SESSION}T04:10:00Z")),
            sentiment_score: score / 2.0,
        },
    ]
}

pub fn sentiment(symbol: &str) -> Option<Sentiment> {
    let (sym, _, _, score) = profile(symbol)?;
    let news = news(sym, *score);
    let mean = news.iter().map(|n| n.sentiment_score).sum::<f64>() / news.len() as f64;
    Some(Sentiment {
        symbol: (*sym).to_string(),
        score: mean,
        label: SentimentLabel::from_score(mean),
        news,
    })
}

/// Decision for `symbol`. `ENERGY_NTPC` and `AUTO_TATAMOTORS` carry the
/// per-model payload; the others carry a single forecast.
pub fn decision(symbol: &str) -> Option<Decision> {
    let f = forecast(symbol)?;
    let s = sentiment(symbol)?;
    let (_, closes, drift, _) = profile(symbol)?;
    let extended = matches!(symbol, "ENERGY_NTPC" | "AUTO_TATAMOTORS");
    let (arima, sarima, garch) = if extended {
        (
            Some(f.future.clone()),
            Some(projection(f.last_actual, drift * 0.8)),
            Some(Vec::new()),
        )
    } else {
        (None, None, None)
    };
    Some(Decision {
        symbol: f.symbol,
        signal: signal(f.direction, s.label),
        forecast_direction: f.direction,
        sentiment_label: s.label,
        sentiment_score: s.score,
        forecast: f.future,
        forecast_arima: arima,
        forecast_sarima: sarima,
        forecast_garch: garch,
        history: history(closes),
        news: s.news,
    })
}
