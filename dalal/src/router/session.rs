use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use dalal_core::{DalalError, SelectionTicket, SubjectTracker};

use crate::Dalal;
use crate::router::analytics::Analysis;

/// Per-view analysis state that ignores results for superseded selections.
///
/// Call [`select`](Self::select) whenever the user picks a stock, then
/// [`run`](Self::run) with the returned ticket. If another selection happens
/// while the fetch is in flight, the late outcome is discarded and the newer
/// selection's state is left untouched.
///
/// ```rust,ignore
/// let session = AnalysisSession::new(dalal);
/// let ticket = session.select("IT_INFY");
/// if let Some(analysis) = session.run(&ticket).await? {
///     render(&analysis.chart);
/// }
/// ```
#[derive(Clone)]
pub struct AnalysisSession {
    dalal: Dalal,
    tracker: SubjectTracker,
    latest: Arc<Mutex<Option<(SelectionTicket, Analysis)>>>,
}

impl AnalysisSession {
    /// Wrap an orchestrator with a fresh selection tracker.
    #[must_use]
    pub fn new(dalal: Dalal) -> Self {
        Self {
            dalal,
            tracker: SubjectTracker::new(),
            latest: Arc::new(Mutex::new(None)),
        }
    }

    fn lock_latest(&self) -> MutexGuard<'_, Option<(SelectionTicket, Analysis)>> {
        self.latest.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Select `symbol`, superseding any analysis still in flight.
    pub fn select(&self, symbol: impl Into<String>) -> SelectionTicket {
        self.tracker.select(symbol)
    }

    /// Drop the current selection; in-flight and stored results become stale.
    pub fn clear(&self) {
        self.tracker.clear();
    }

    /// `true` while `ticket` belongs to the latest selection.
    #[must_use]
    pub fn is_current(&self, ticket: &SelectionTicket) -> bool {
        self.tracker.is_current(ticket)
    }

    /// Run the analysis for `ticket` and store it if the ticket is still current.
    ///
    /// Returns `Ok(None)` when the ticket was superseded before the fetch
    /// finished, whether the fetch succeeded or failed.
    ///
    /// # Errors
    /// Returns the analysis error only while `ticket` is still current.
    pub async fn run(&self, ticket: &SelectionTicket) -> Result<Option<Analysis>, DalalError> {
        if !self.tracker.is_current(ticket) {
            return Ok(None);
        }
        let outcome = self.dalal.analyse(ticket.subject()).await;

        // Check and store under one lock so a stale result cannot land after a newer one.
        let mut latest = self.lock_latest();
        if !self.tracker.is_current(ticket) {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                target: "dalal::session",
                symbol = ticket.subject(),
                generation = ticket.generation(),
                "discarding analysis for superseded selection"
            );
            return Ok(None);
        }
        let analysis = outcome?;
        *latest = Some((ticket.clone(), analysis.clone()));
        Ok(Some(analysis))
    }

    /// Convenience for [`select`](Self::select) followed by [`run`](Self::run).
    ///
    /// # Errors
    /// Same as [`run`](Self::run).
    pub async fn select_and_run(
        &self,
        symbol: impl Into<String>,
    ) -> Result<Option<Analysis>, DalalError> {
        let ticket = self.select(symbol);
        self.run(&ticket).await
    }

    /// Latest stored analysis, if it belongs to the current selection.
    #[must_use]
    pub fn latest(&self) -> Option<Analysis> {
        let latest = self.lock_latest();
        latest
            .as_ref()
            .filter(|(ticket, _)| self.tracker.is_current(ticket))
            .map(|(_, analysis)| analysis.clone())
    }
}
