use std::time::Duration;

use dalal_core::{Capability, DalalError, MarketMovers, NiftySnapshot, PollHandle};
use rand::Rng;
use tokio::sync::{mpsc, oneshot};

use crate::Dalal;

/// Buffered updates per polling task before the task waits on the consumer.
const POLL_CHANNEL_CAPACITY: usize = 16;

impl Dalal {
    /// Refresh market movers on the configured poll interval.
    ///
    /// Behavior:
    /// - The first fetch runs immediately, later ones after `poll_interval`
    ///   plus jitter.
    /// - Successful fetches are sent on the returned channel; failures are
    ///   logged and skipped, and polling continues.
    /// - The task ends when the [`PollHandle`] is stopped or dropped, or when the
    ///   receiver is dropped.
    ///
    /// Must be called from within a Tokio runtime.
    ///
    /// # Errors
    /// Returns `Unsupported` if no registered connector provides market movers.
    pub fn watch_market_movers(
        &self,
    ) -> Result<(PollHandle, mpsc::Receiver<MarketMovers>), DalalError> {
        if !self
            .connectors
            .iter()
            .any(|c| c.as_market_movers_provider().is_some())
        {
            return Err(DalalError::unsupported(Capability::MarketMovers.as_str()));
        }
        Ok(self.spawn_poll(Capability::MarketMovers, |d| async move {
            d.market_movers().await
        }))
    }

    /// Refresh the NIFTY 50 snapshot on the configured poll interval.
    ///
    /// Same lifecycle as [`Dalal::watch_market_movers`].
    ///
    /// # Errors
    /// Returns `Unsupported` if no registered connector provides the index snapshot.
    pub fn watch_nifty(&self) -> Result<(PollHandle, mpsc::Receiver<NiftySnapshot>), DalalError> {
        if !self
            .connectors
            .iter()
            .any(|c| c.as_nifty_provider().is_some())
        {
            return Err(DalalError::unsupported(Capability::Nifty.as_str()));
        }
        Ok(self.spawn_poll(Capability::Nifty, |d| async move { d.nifty().await }))
    }

    fn spawn_poll<T, F, Fut>(
        &self,
        capability: Capability,
        fetch: F,
    ) -> (PollHandle, mpsc::Receiver<T>)
    where
        T: Send + 'static,
        F: Fn(Self) -> Fut + Send + 'static,
        Fut: core::future::Future<Output = Result<T, DalalError>> + Send + 'static,
    {
        let (tx, rx) = mpsc::channel::<T>(POLL_CHANNEL_CAPACITY);
        let (stop_tx, mut stop_rx) = oneshot::channel::<()>();
        let dalal = self.clone();
        let base_ms = u64::try_from(self.cfg.poll.interval.as_millis()).unwrap_or(u64::MAX);
        let jitter_percent = u32::from(self.cfg.poll.jitter_percent.min(100));

        let join = tokio::spawn(async move {
            loop {
                let res = tokio::select! {
                    biased;
                    _ = &mut stop_rx => break,
                    () = tx.closed() => break,
                    res = fetch(dalal.clone()) => res,
                };
                match res {
                    Ok(update) => {
                        tokio::select! {
                            biased;
                            _ = &mut stop_rx => break,
                            sent = tx.send(update) => {
                                if sent.is_err() {
                                    break;
                                }
                            }
                        }
                    }
                    Err(_e) => {
                        #[cfg(feature = "tracing")]
                        log_poll_failure(capability, &_e);
                    }
                }

                let wait = Duration::from_millis(jitter_wait(base_ms, jitter_percent));
                tokio::select! {
                    biased;
                    _ = &mut stop_rx => break,
                    () = tx.closed() => break,
                    () = tokio::time::sleep(wait) => {}
                }
            }
        });

        #[cfg(not(feature = "tracing"))]
        let _ = capability;

        (PollHandle::new(join, stop_tx), rx)
    }
}

/// Not-found and unsupported outcomes are expected between backend refreshes.
#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
fn is_benign_failure(e: &DalalError) -> bool {
    !e.is_actionable()
}

#[cfg(feature = "tracing")]
fn log_poll_failure(capability: Capability, e: &DalalError) {
    if is_benign_failure(e) {
        tracing::debug!(
            target: "dalal::poll",
            capability = %capability,
            error = %e,
            "poll fetch returned nothing; retrying on next tick"
        );
    } else {
        tracing::warn!(
            target: "dalal::poll",
            capability = %capability,
            error = %e,
            "poll fetch failed; retrying on next tick"
        );
    }
}

fn jitter_wait(base_ms: u64, jitter_percent: u32) -> u64 {
    let jitter_range = if jitter_percent == 0 {
        1
    } else {
        std::cmp::max(1, (base_ms.saturating_mul(u64::from(jitter_percent))) / 100)
    };
    let mut rng = rand::rng();
    base_ms.saturating_add(rng.random_range(0..jitter_range))
}
