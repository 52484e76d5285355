use std::time::Duration;

use dalal::{Capability, DalalError, MarketMovers, Mover, NiftySnapshot};
use dalal_mock::{DynamicMockConnector, MockBehavior};
use tokio::sync::mpsc::error::TryRecvError;

use crate::helpers::{bare, dalal_with};

fn movers() -> MarketMovers {
    MarketMovers {
        date: Some("05-01-2024".into()),
        gainers: vec![Mover {
            symbol: "AUTO_TATAMOTORS".into(),
            ltp: 781.5,
            pct_change: 5.28,
        }],
        losers: vec![],
    }
}

#[tokio::test(start_paused = true)]
async fn first_fetch_is_immediate_then_every_interval() {
    let (p1, c1) = DynamicMockConnector::new_with_controller("p1");
    c1.set_movers_behavior(MockBehavior::Return(movers())).await;
    let dalal = dalal_with(vec![p1]);

    let started = tokio::time::Instant::now();
    let (handle, mut rx) = dalal.watch_market_movers().unwrap();

    assert_eq!(rx.recv().await.unwrap(), movers());
    assert!(started.elapsed() < Duration::from_secs(1));

    assert_eq!(rx.recv().await.unwrap(), movers());
    assert!(started.elapsed() >= Duration::from_secs(10));

    handle.stop().await;
    while rx.recv().await.is_some() {}
    assert!(c1.calls(Capability::MarketMovers).await >= 2);
}

#[tokio::test(start_paused = true)]
async fn failed_fetches_are_skipped_and_polling_continues() {
    let (p1, c1) = DynamicMockConnector::new_with_controller("p1");
    c1.set_nifty_behavior(MockBehavior::Fail(DalalError::Other("503".into())))
        .await;
    let dalal = dalal_with(vec![p1]);

    let (handle, mut rx) = dalal.watch_nifty().unwrap();
    tokio::time::sleep(Duration::from_secs(25)).await;
    assert_eq!(rx.try_recv().unwrap_err(), TryRecvError::Empty);
    assert!(c1.calls(Capability::Nifty).await >= 2);

    let snapshot = NiftySnapshot {
        nifty_value: 21_710.8,
        change_pct: 0.24,
        date: "05-01-2024".into(),
    };
    c1.set_nifty_behavior(MockBehavior::Return(snapshot.clone()))
        .await;
    assert_eq!(rx.recv().await.unwrap(), snapshot);

    handle.stop().await;
}

#[tokio::test(start_paused = true)]
async fn dropping_the_handle_ends_the_task() {
    let (p1, c1) = DynamicMockConnector::new_with_controller("p1");
    c1.set_movers_behavior(MockBehavior::Return(movers())).await;
    let dalal = dalal_with(vec![p1]);

    let (handle, mut rx) = dalal.watch_market_movers().unwrap();
    assert!(rx.recv().await.is_some());
    drop(handle);

    // The sender lives in the task; the channel closes once the task is gone.
    while rx.recv().await.is_some() {}
    let calls = c1.calls(Capability::MarketMovers).await;
    tokio::time::sleep(Duration::from_secs(60)).await;
    assert_eq!(c1.calls(Capability::MarketMovers).await, calls);
}

#[tokio::test(start_paused = true)]
async fn dropping_the_receiver_ends_the_task() {
    let (p1, c1) = DynamicMockConnector::new_with_controller("p1");
    c1.set_movers_behavior(MockBehavior::Return(movers())).await;
    let dalal = dalal_with(vec![p1]);

    let (handle, rx) = dalal.watch_market_movers().unwrap();
    drop(rx);

    for _ in 0..10 {
        if handle.is_finished() {
            break;
        }
        tokio::time::sleep(Duration::from_secs(1)).await;
    }
    assert!(handle.is_finished());
}

#[tokio::test]
async fn watch_requires_a_capable_connector() {
    let dalal = dalal_with(vec![bare()]);
    assert!(matches!(
        dalal.watch_market_movers(),
        Err(DalalError::Unsupported { .. })
    ));
    assert!(matches!(
        dalal.watch_nifty(),
        Err(DalalError::Unsupported { .. })
    ));
}
