use dalal::{DalalError, HeatTier};
use dalal_mock::{FAIL_SYMBOL, SYMBOLS};

use crate::helpers::{INFY, dalal_with, mock};

#[tokio::test]
async fn market_overview_routes_to_mock() {
    let dalal = dalal_with(vec![mock()]);

    let nifty = dalal.nifty().await.unwrap();
    assert!(nifty.nifty_value > 0.0);

    let history = dalal.nifty_history().await.unwrap();
    assert!(!history.is_empty());

    let insights = dalal.market_insights().await.unwrap();
    let b = &insights.breadth;
    assert_eq!(
        (b.advancers + b.decliners + b.unchanged) as usize,
        SYMBOLS.len()
    );

    assert!(dalal.most_bought().await.unwrap().is_some());
}

#[tokio::test]
async fn stock_snapshot_by_symbol() {
    let dalal = dalal_with(vec![mock()]);
    for symbol in SYMBOLS {
        assert_eq!(dalal.stock(symbol).await.unwrap().symbol, symbol);
    }
    assert_eq!(
        dalal.stock("NOPE").await.unwrap_err(),
        DalalError::not_found("stock for NOPE")
    );
}

#[tokio::test]
async fn forced_failure_is_aggregated() {
    let dalal = dalal_with(vec![mock()]);
    match dalal.stock(FAIL_SYMBOL).await.unwrap_err() {
        DalalError::AllProvidersFailed(errors) => {
            assert_eq!(errors.len(), 1);
            assert!(matches!(errors[0], DalalError::Connector { .. }));
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn heatmap_covers_gainers_then_losers() {
    let dalal = dalal_with(vec![mock()]);
    let movers = dalal.market_movers().await.unwrap();
    let tiles = dalal.heatmap().await.unwrap();

    assert_eq!(tiles.len(), movers.gainers.len() + movers.losers.len());
    for (tile, mover) in tiles.iter().zip(movers.gainers.iter().chain(&movers.losers)) {
        assert_eq!(tile.symbol, mover.symbol);
        assert_eq!(tile.tier, HeatTier::from_pct(mover.pct_change));
    }
}

#[tokio::test]
async fn portfolio_and_rankings() {
    let dalal = dalal_with(vec![mock()]);

    let portfolio = dalal.portfolio().await.unwrap();
    assert!(!portfolio.holdings.is_empty());

    let top = dalal.top_stocks().await.unwrap();
    assert!(!top.top_10.is_empty());

    let forecast = dalal.forecast(INFY).await.unwrap();
    assert_eq!(forecast.symbol, INFY);
    assert_eq!(forecast.future.len(), 5);

    let sentiment = dalal.sentiment(INFY).await.unwrap();
    assert_eq!(sentiment.news.len(), 2);
}
