use std::time::Duration;

use dalal::{AnalysisSession, Capability, DalalError};
use dalal_mock::{DynamicMockConnector, DynamicMockController, MockBehavior};

use crate::helpers::{dalal_with, decision, sentiment};

const SLOW: &str = "AUTO_TATAMOTORS";
const FAST: &str = "IT_INFY";

async fn session_with(
    slow: MockBehavior<dalal::Decision>,
) -> (AnalysisSession, DynamicMockController) {
    let (p1, c1) = DynamicMockConnector::new_with_controller("p1");
    c1.set_decision_behavior(SLOW, slow).await;
    c1.set_decision_behavior(
        FAST,
        MockBehavior::Return(decision(FAST, &[("2024-01-05", 1_522.6)], &[])),
    )
    .await;
    for symbol in [SLOW, FAST] {
        c1.set_sentiment_behavior(symbol, MockBehavior::Return(sentiment(symbol, 0.2)))
            .await;
    }
    let dalal = dalal::Dalal::builder()
        .with_connector(p1)
        .provider_timeout(Duration::from_secs(30))
        .build()
        .unwrap();
    (AnalysisSession::new(dalal), c1)
}

#[tokio::test(start_paused = true)]
async fn late_success_for_superseded_selection_is_discarded() {
    let (session, controller) = session_with(MockBehavior::ReturnAfter(
        Duration::from_secs(2),
        decision(SLOW, &[("2024-01-05", 781.5)], &[]),
    ))
    .await;

    let slow_ticket = session.select(SLOW);
    let slow = tokio::spawn({
        let session = session.clone();
        async move { session.run(&slow_ticket).await }
    });
    // Let the slow fetch get in flight before the user switches.
    tokio::time::sleep(Duration::from_millis(100)).await;

    let fast = session.select_and_run(FAST).await.unwrap().unwrap();
    assert_eq!(fast.symbol, FAST);

    let late = slow.await.unwrap().unwrap();
    assert!(late.is_none());
    assert_eq!(controller.calls(Capability::Decision).await, 2);
    assert_eq!(session.latest().unwrap().symbol, FAST);
}

#[tokio::test(start_paused = true)]
async fn late_failure_for_superseded_selection_is_discarded() {
    let (session, _controller) = session_with(MockBehavior::FailAfter(
        Duration::from_secs(1),
        DalalError::Other("backend down".into()),
    ))
    .await;

    let slow_ticket = session.select(SLOW);
    let slow = tokio::spawn({
        let session = session.clone();
        async move { session.run(&slow_ticket).await }
    });
    tokio::time::sleep(Duration::from_millis(100)).await;
    session.select_and_run(FAST).await.unwrap();

    assert_eq!(slow.await.unwrap(), Ok(None));
    assert_eq!(session.latest().unwrap().symbol, FAST);
}

#[tokio::test]
async fn failure_for_current_selection_is_reported() {
    let (session, _controller) =
        session_with(MockBehavior::Fail(DalalError::not_found("x"))).await;

    let err = session.select_and_run(SLOW).await.unwrap_err();
    assert_eq!(err, DalalError::not_found("decision for AUTO_TATAMOTORS"));
    assert!(session.latest().is_none());
}

#[tokio::test]
async fn stale_ticket_does_not_fetch() {
    let (session, controller) =
        session_with(MockBehavior::Return(decision(SLOW, &[], &[]))).await;

    let first = session.select(SLOW);
    let _second = session.select(FAST);

    assert_eq!(session.run(&first).await, Ok(None));
    assert_eq!(controller.calls(Capability::Decision).await, 0);
}

#[tokio::test]
async fn latest_tracks_only_the_current_selection() {
    let (session, _controller) =
        session_with(MockBehavior::Return(decision(SLOW, &[], &[]))).await;

    session.select_and_run(FAST).await.unwrap();
    assert_eq!(session.latest().unwrap().symbol, FAST);

    let _pending = session.select(SLOW);
    assert!(session.latest().is_none());

    session.clear();
    assert!(session.latest().is_none());
}

#[test]
fn session_works_with_any_connector_set() {
    let session = AnalysisSession::new(dalal_with(vec![crate::helpers::mock()]));
    let t = session.select(FAST);
    assert!(session.is_current(&t));
    session.clear();
    assert!(!session.is_current(&t));
}
