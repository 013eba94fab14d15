//! # Notifier
//!
//! Surfaces transient error notices to the user. The controller only knows
//! the [`Notifier`] trait; hosts decide how a notice is shown and when it
//! goes away.

use crate::widget::models::NoticeKind;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::Instant;

/// Default auto-dismiss delay of a notice
pub const DEFAULT_NOTICE_DELAY: Duration = Duration::from_millis(2500);

impl NoticeKind {
    /// Human-readable message of the notice
    pub fn message(&self) -> String {
        match self {
            NoticeKind::TooManyMatches => {
                "Too many matches found. Please enter a more specific query!".to_string()
            }
            NoticeKind::NotFound => "No country found with that name.".to_string(),
            NoticeKind::Failure(detail) => format!("An error occurred: {detail}"),
        }
    }
}

/// A transient error notice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    /// How long the notice stays visible
    pub delay: Duration,
}

impl Notice {
    pub fn new(kind: &NoticeKind, delay: Duration) -> Self {
        Self {
            text: kind.message(),
            delay,
        }
    }
}

/// Show-notice capability
pub trait Notifier {
    fn error(&mut self, notice: Notice);

    /// When a showing notice is due to disappear, for hosts that must redraw then
    fn dismiss_due(&self, _now: Instant) -> Option<Instant> {
        None
    }
}

/// Notice currently on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveNotice {
    pub notice: Notice,
    pub expires_at: Instant,
}

/// Single-slot notice board shared between the notifier side and the view
///
/// A new notice replaces the one showing. Notices past their delay are
/// dropped the next time the board is read.
#[derive(Debug, Clone, Default)]
pub struct NoticeBoard {
    slot: Arc<Mutex<Option<ActiveNotice>>>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// The notice still showing at `now`, if any
    pub fn current(&self, now: Instant) -> Option<Notice> {
        let mut slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
        match slot.as_ref() {
            Some(active) if active.expires_at > now => Some(active.notice.clone()),
            Some(_) => {
                *slot = None;
                None
            }
            None => None,
        }
    }

    /// When the showing notice must be dismissed
    pub fn expires_at(&self) -> Option<Instant> {
        self.slot
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .as_ref()
            .map(|active| active.expires_at)
    }
}

impl Notifier for NoticeBoard {
    fn error(&mut self, notice: Notice) {
        tracing::debug!("Showing notice for {:?}: {}", notice.delay, notice.text);
        let expires_at = Instant::now() + notice.delay;
        *self.slot.lock().unwrap_or_else(|e| e.into_inner()) =
            Some(ActiveNotice { notice, expires_at });
    }

    fn dismiss_due(&self, now: Instant) -> Option<Instant> {
        self.expires_at().filter(|expires_at| *expires_at > now)
    }
}

/// Notifier that records every notice for verification in tests
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    notices: Arc<Mutex<Vec<Notice>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    pub fn texts(&self) -> Vec<String> {
        self.notices().into_iter().map(|n| n.text).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn error(&mut self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}
