use std::time::Duration;

use dalal::{Capability, Dalal, DalalError};
use dalal_mock::{DynamicMockConnector, MockBehavior};

use crate::helpers::{INFY, bare, dalal_with, decision};

#[tokio::test]
async fn first_registered_success_wins() {
    let (p1, c1) = DynamicMockConnector::new_with_controller("p1");
    let (p2, c2) = DynamicMockConnector::new_with_controller("p2");
    c1.set_decision_behavior(INFY, MockBehavior::Return(decision("from-p1", &[], &[])))
        .await;
    c2.set_decision_behavior(INFY, MockBehavior::Return(decision("from-p2", &[], &[])))
        .await;

    let dalal = dalal_with(vec![p1, p2]);
    let d = dalal.decision(INFY).await.unwrap();

    assert_eq!(d.symbol, "from-p1");
    assert_eq!(c2.calls(Capability::Decision).await, 0);
}

#[tokio::test]
async fn falls_back_after_not_found() {
    let (p1, c1) = DynamicMockConnector::new_with_controller("p1");
    let (p2, c2) = DynamicMockConnector::new_with_controller("p2");
    c1.set_decision_behavior(
        INFY,
        MockBehavior::Fail(DalalError::not_found("decision for IT_INFY")),
    )
    .await;
    c2.set_decision_behavior(INFY, MockBehavior::Return(decision("from-p2", &[], &[])))
        .await;

    let dalal = dalal_with(vec![p1, p2]);
    let d = dalal.decision(INFY).await.unwrap();

    assert_eq!(d.symbol, "from-p2");
    assert_eq!(c1.calls(Capability::Decision).await, 1);
}

#[tokio::test(start_paused = true)]
async fn falls_back_after_provider_timeout() {
    let (p1, c1) = DynamicMockConnector::new_with_controller("p1");
    let (p2, c2) = DynamicMockConnector::new_with_controller("p2");
    c1.set_decision_behavior(INFY, MockBehavior::Hang).await;
    c2.set_decision_behavior(INFY, MockBehavior::Return(decision("from-p2", &[], &[])))
        .await;

    let dalal = dalal_with(vec![p1, p2]);
    let d = dalal.decision(INFY).await.unwrap();
    assert_eq!(d.symbol, "from-p2");
}

#[tokio::test]
async fn all_not_found_collapses_to_not_found_with_symbol() {
    let (p1, c1) = DynamicMockConnector::new_with_controller("p1");
    let (p2, c2) = DynamicMockConnector::new_with_controller("p2");
    for c in [&c1, &c2] {
        c.set_decision_behavior(INFY, MockBehavior::Fail(DalalError::not_found("x")))
            .await;
    }

    let dalal = dalal_with(vec![p1, p2]);
    let err = dalal.decision(INFY).await.unwrap_err();
    assert_eq!(err, DalalError::not_found("decision for IT_INFY"));
}

#[tokio::test(start_paused = true)]
async fn all_timeouts_collapse_to_all_providers_timed_out() {
    let (p1, c1) = DynamicMockConnector::new_with_controller("p1");
    let (p2, c2) = DynamicMockConnector::new_with_controller("p2");
    c1.set_decision_behavior(INFY, MockBehavior::Hang).await;
    c2.set_decision_behavior(
        INFY,
        MockBehavior::ReturnAfter(Duration::from_secs(5), decision(INFY, &[], &[])),
    )
    .await;

    let dalal = dalal_with(vec![p1, p2]);
    let err = dalal.decision(INFY).await.unwrap_err();
    assert_eq!(
        err,
        DalalError::AllProvidersTimedOut {
            capability: "decision".to_string()
        }
    );
}

#[tokio::test]
async fn mixed_failures_are_tagged_and_aggregated() {
    let (p1, c1) = DynamicMockConnector::new_with_controller("p1");
    let (p2, c2) = DynamicMockConnector::new_with_controller("p2");
    c1.set_decision_behavior(INFY, MockBehavior::Fail(DalalError::Other("boom".into())))
        .await;
    c2.set_decision_behavior(INFY, MockBehavior::Fail(DalalError::not_found("x")))
        .await;

    let dalal = dalal_with(vec![p1, p2]);
    match dalal.decision(INFY).await.unwrap_err() {
        DalalError::AllProvidersFailed(errors) => {
            assert_eq!(errors.len(), 2);
            assert!(matches!(
                &errors[0],
                DalalError::Connector { connector, .. } if connector == "p1"
            ));
            assert_eq!(errors[1], DalalError::not_found("x"));
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn connectors_without_the_capability_are_skipped() {
    let (p1, c1) = DynamicMockConnector::new_with_controller("p1");
    c1.set_decision_behavior(INFY, MockBehavior::Return(decision(INFY, &[], &[])))
        .await;

    let dalal = dalal_with(vec![bare(), p1]);
    assert_eq!(dalal.decision(INFY).await.unwrap().symbol, INFY);
}

#[tokio::test]
async fn no_capable_connector_is_unsupported() {
    let dalal = dalal_with(vec![bare()]);
    assert_eq!(
        dalal.portfolio().await.unwrap_err(),
        DalalError::unsupported("portfolio")
    );
    assert_eq!(
        dalal.decision(INFY).await.unwrap_err(),
        DalalError::unsupported("decision")
    );
}

#[tokio::test]
async fn blank_symbol_is_rejected_before_any_call() {
    let (p1, c1) = DynamicMockConnector::new_with_controller("p1");
    let dalal = dalal_with(vec![p1]);

    let err = dalal.decision("   ").await.unwrap_err();
    assert!(matches!(err, DalalError::InvalidArg(_)));
    assert_eq!(c1.calls(Capability::Decision).await, 0);
}

#[tokio::test]
async fn symbol_is_trimmed_before_routing() {
    let (p1, c1) = DynamicMockConnector::new_with_controller("p1");
    c1.set_decision_behavior(INFY, MockBehavior::Return(decision(INFY, &[], &[])))
        .await;

    let dalal = dalal_with(vec![p1]);
    assert_eq!(dalal.decision("  IT_INFY ").await.unwrap().symbol, INFY);
}

#[test]
fn builder_rejects_empty_connector_list() {
    assert!(matches!(
        Dalal::builder().build(),
        Err(DalalError::InvalidArg(_))
    ));
}

#[test]
fn builder_clamps_jitter_and_rejects_zero_interval() {
    let d = tokio_test::assert_ok!(
        Dalal::builder()
            .with_connector(bare())
            .poll_jitter_percent(250)
            .build()
    );
    assert_eq!(d.config().poll.jitter_percent, 100);

    let err = Dalal::builder()
        .with_connector(bare())
        .poll_interval(Duration::ZERO)
        .build();
    assert!(matches!(err, Err(DalalError::InvalidArg(_))));
}
