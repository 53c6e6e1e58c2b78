//! Cancellation and deadline controls for a single search.

use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Instant,
};

/// Shared flag that asks a running search to stop expanding nodes.
#[derive(Clone, Debug, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    /// Creates a flag in the running state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation. Every clone observes the request.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Reports whether cancellation was requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Bounds on how long a search may keep expanding nodes.
///
/// Once exhausted, nodes below the root are scored statically instead of
/// expanded. The root is always expanded so a legal action is still returned.
#[derive(Clone, Debug, Default)]
pub struct SearchLimits {
    deadline: Option<Instant>,
    cancel: Option<CancelFlag>,
}

impl SearchLimits {
    /// Limits that never expire; the search runs to its configured depth.
    #[must_use]
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Stops expanding once `deadline` has passed.
    #[must_use]
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Stops expanding once `flag` is cancelled.
    #[must_use]
    pub fn with_cancel(mut self, flag: CancelFlag) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub(crate) fn is_exhausted(&self) -> bool {
        if self.cancel.as_ref().is_some_and(CancelFlag::is_cancelled) {
            return true;
        }
        self.deadline
            .is_some_and(|deadline| Instant::now() >= deadline)
    }
}
