use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use dalal_core::connector::{
    DalalConnector, DecisionProvider, MarketMoversProvider, NiftyProvider, SentimentProvider,
};
use dalal_core::{Capability, DalalError, Decision, MarketMovers, NiftySnapshot, Sentiment};

/// Instruction for how a method should behave for a given input.
#[derive(Clone, Debug)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Return the provided value after sleeping.
    ReturnAfter(Duration, T),
    /// Fail immediately with the provided error.
    Fail(DalalError),
    /// Fail with the provided error after sleeping.
    FailAfter(Duration, DalalError),
    /// Hang indefinitely (simulate a timeout).
    Hang,
}

impl<T> MockBehavior<T> {
    async fn play(self) -> Result<T, DalalError> {
        match self {
            Self::Return(v) => Ok(v),
            Self::ReturnAfter(d, v) => {
                tokio::time::sleep(d).await;
                Ok(v)
            }
            Self::Fail(e) => Err(e),
            Self::FailAfter(d, e) => {
                tokio::time::sleep(d).await;
                Err(e)
            }
            Self::Hang => {
                std::future::pending::<()>().await;
                unreachable!()
            }
        }
    }
}

#[derive(Default)]
struct InternalState {
    decision_rules: HashMap<String, MockBehavior<Decision>>,
    sentiment_rules: HashMap<String, MockBehavior<Sentiment>>,
    movers: Option<MockBehavior<MarketMovers>>,
    nifty: Option<MockBehavior<NiftySnapshot>>,
    calls: HashMap<Capability, usize>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for `decision` calls for a specific symbol.
    pub async fn set_decision_behavior(&self, symbol: &str, behavior: MockBehavior<Decision>) {
        let mut guard = self.state.lock().await;
        guard.decision_rules.insert(symbol.to_string(), behavior);
    }

    /// Set the behavior for `sentiment` calls for a specific symbol.
    pub async fn set_sentiment_behavior(&self, symbol: &str, behavior: MockBehavior<Sentiment>) {
        let mut guard = self.state.lock().await;
        guard.sentiment_rules.insert(symbol.to_string(), behavior);
    }

    /// Set the behavior for `market_movers` calls.
    pub async fn set_movers_behavior(&self, behavior: MockBehavior<MarketMovers>) {
        self.state.lock().await.movers = Some(behavior);
    }

    /// Set the behavior for `nifty` calls.
    pub async fn set_nifty_behavior(&self, behavior: MockBehavior<NiftySnapshot>) {
        self.state.lock().await.nifty = Some(behavior);
    }

    /// Number of calls received for `capability` so far.
    pub async fn calls(&self, capability: Capability) -> usize {
        let guard = self.state.lock().await;
        guard.calls.get(&capability).copied().unwrap_or(0)
    }

    /// Clear all configured behaviors and call counts.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        *guard = InternalState::default();
    }
}

/// A connector that defers all behavior to an external controller.
///
/// Capabilities without a configured behavior answer `Unsupported`.
pub struct DynamicMockConnector {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockConnector {
    /// Create a new dynamic mock connector and its controller.
    #[must_use]
    pub fn new_with_controller(
        name: &'static str,
    ) -> (Arc<dyn DalalConnector>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { name, state });
        (me as Arc<dyn DalalConnector>, controller)
    }

    // Counts the call and snapshots the behavior without holding the lock across awaits.
    async fn take<T: Clone>(
        &self,
        capability: Capability,
        pick: impl FnOnce(&InternalState) -> Option<MockBehavior<T>>,
    ) -> Result<T, DalalError> {
        let behavior = {
            let mut guard = self.state.lock().await;
            *guard.calls.entry(capability).or_default() += 1;
            pick(&guard)
        };
        match behavior {
            Some(b) => b.play().await,
            None => Err(DalalError::unsupported(capability.as_str())),
        }
    }
}

impl DalalConnector for DynamicMockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "DynamicMock"
    }

    fn as_nifty_provider(&self) -> Option<&dyn NiftyProvider> {
        Some(self as &dyn NiftyProvider)
    }
    fn as_market_movers_provider(&self) -> Option<&dyn MarketMoversProvider> {
        Some(self as &dyn MarketMoversProvider)
    }
    fn as_sentiment_provider(&self) -> Option<&dyn SentimentProvider> {
        Some(self as &dyn SentimentProvider)
    }
    fn as_decision_provider(&self) -> Option<&dyn DecisionProvider> {
        Some(self as &dyn DecisionProvider)
    }
}

#[async_trait]
impl NiftyProvider for DynamicMockConnector {
    async fn nifty(&self) -> Result<NiftySnapshot, DalalError> {
        self.take(Capability::Nifty, |s| s.nifty.clone()).await
    }
}

#[async_trait]
impl MarketMoversProvider for DynamicMockConnector {
    async fn market_movers(&self) -> Result<MarketMovers, DalalError> {
        self.take(Capability::MarketMovers, |s| s.movers.clone())
            .await
    }
}

#[async_trait]
impl SentimentProvider for DynamicMockConnector {
    async fn sentiment(&self, symbol: &str) -> Result<Sentiment, DalalError> {
        self.take(Capability::Sentiment, |s| {
            s.sentiment_rules.get(symbol).cloned()
        })
        .await
    }
}

#[async_trait]
impl DecisionProvider for DynamicMockConnector {
    async fn decision(&self, symbol: &str) -> Result<Decision, DalalError> {
        self.take(Capability::Decision, |s| s.decision_rules.get(symbol).cloned())
            .await
    }
}
