use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Token for one selection of a subject.
///
/// A ticket stays valid only until the next selection on the tracker that
/// issued it. Work started under an older ticket must not overwrite state
/// belonging to a newer one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SelectionTicket {
    generation: u64,
    subject: String,
}

impl SelectionTicket {
    /// Monotonic selection counter at the time the ticket was issued.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Subject selected by this ticket.
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }
}

#[derive(Debug, Default)]
struct State {
    generation: u64,
    current: Option<String>,
}

/// Tracks the currently selected subject and hands out tickets.
///
/// Cloning the tracker shares its state.
#[derive(Debug, Clone, Default)]
pub struct SubjectTracker {
    state: Arc<Mutex<State>>,
}

impl SubjectTracker {
    /// Create a tracker with nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        // State is two plain fields; a panic mid-update cannot leave it torn.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Select `subject`, superseding every ticket issued before.
    pub fn select(&self, subject: impl Into<String>) -> SelectionTicket {
        let subject = subject.into();
        let mut state = self.lock();
        state.generation += 1;
        state.current = Some(subject.clone());
        SelectionTicket {
            generation: state.generation,
            subject,
        }
    }

    /// `true` if `ticket` belongs to the latest selection and nothing has cleared it since.
    #[must_use]
    pub fn is_current(&self, ticket: &SelectionTicket) -> bool {
        let state = self.lock();
        state.generation == ticket.generation && state.current.is_some()
    }

    /// Subject of the latest selection, if any.
    #[must_use]
    pub fn current(&self) -> Option<String> {
        self.lock().current.clone()
    }

    /// Drop the current selection; every outstanding ticket becomes stale.
    pub fn clear(&self) {
        let mut state = self.lock();
        state.generation += 1;
        state.current = None;
    }
}
