//! Cooperative cancellation for running games.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// A thread-safe stop flag shared between the caller and every game of a matchup.
#[derive(Clone, Debug, Default)]
pub struct StopFlag(Arc<AtomicBool>);

impl StopFlag {
    /// Create a new stop flag (initially not stopped).
    #[must_use]
    pub fn new() -> Self {
        StopFlag(Arc::new(AtomicBool::new(false)))
    }

    /// Create a stop flag that is already set.
    #[must_use]
    pub fn stopped() -> Self {
        StopFlag(Arc::new(AtomicBool::new(true)))
    }

    #[inline]
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }
}

/// Cancellation signal for one game: the shared stop flag plus an optional deadline.
///
/// Games poll it between plies, so a cancelled game always ends on a complete position.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    stop: StopFlag,
    deadline: Option<Instant>,
}

impl CancelToken {
    #[must_use]
    pub fn new(stop: StopFlag, deadline: Option<Instant>) -> Self {
        CancelToken { stop, deadline }
    }

    /// A token that never fires
    #[must_use]
    pub fn never() -> Self {
        CancelToken::default()
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.stop.is_stopped() || self.deadline.is_some_and(|d| Instant::now() >= d)
    }
}
