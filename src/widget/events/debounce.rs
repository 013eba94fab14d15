//! # Debouncer
//!
//! Collapses a burst of input events into one firing that happens once the
//! input has been quiet for the configured delay. Only one deadline is ever
//! live; every trigger pushes it back.

use std::time::Duration;
use tokio::time::{sleep_until, Instant};

/// Default quiet period before a search is issued
pub const DEFAULT_DEBOUNCE_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Restart the quiet period
    pub fn trigger(&mut self) {
        self.deadline = Some(Instant::now() + self.delay);
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Drop the pending deadline, if any
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Resolve once the pending deadline elapses
    ///
    /// Never resolves while nothing is pending. Dropping the future before it
    /// resolves keeps the deadline, so it is safe to use inside `select!`.
    pub async fn fired(&mut self) {
        match self.deadline {
            Some(deadline) => {
                sleep_until(deadline).await;
                self.deadline = None;
            }
            None => std::future::pending().await,
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_DELAY)
    }
}
