//! # Mock I/O Implementations for Testing
//!
//! Scripted input events and an in-memory page whose writes can be
//! inspected after the controller has run.

use super::{EventStream, Page};
use crate::widget::events::InputEvent;
use anyhow::Result;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::{sleep_until, Instant};

/// Mock event stream for testing
///
/// Each event is delivered after its gap has elapsed since the previous one.
/// Once drained the stream reports itself exhausted.
#[derive(Debug, Default)]
pub struct MockEventStream {
    events: VecDeque<(Duration, InputEvent)>,
    next_due: Option<Instant>,
}

impl MockEventStream {
    /// Create a stream delivering all events back to back
    pub fn new(events: Vec<InputEvent>) -> Self {
        Self {
            events: events.into_iter().map(|e| (Duration::ZERO, e)).collect(),
            next_due: None,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Add an event delivered right after the previous one
    pub fn push_event(&mut self, event: InputEvent) {
        self.events.push_back((Duration::ZERO, event));
    }

    /// Add an event delivered `gap` after the previous one
    pub fn push_event_after(&mut self, gap: Duration, event: InputEvent) {
        self.events.push_back((gap, event));
    }

    /// Type `text` one character at a time, `gap` apart
    pub fn type_text(&mut self, text: &str, gap: Duration) {
        for ch in text.chars() {
            self.push_event_after(gap, InputEvent::Insert(ch));
        }
    }
}

impl EventStream for MockEventStream {
    async fn next_event(&mut self) -> Result<Option<InputEvent>> {
        let Some(gap) = self.events.front().map(|(gap, _)| *gap) else {
            return std::future::pending().await;
        };

        let due = *self.next_due.get_or_insert_with(|| Instant::now() + gap);
        sleep_until(due).await;

        self.next_due = None;
        Ok(self.events.pop_front().map(|(_, event)| event))
    }

    fn is_exhausted(&self) -> bool {
        self.events.is_empty()
    }
}

/// Recorded page write for verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageCommand {
    SetSearchValue(String),
    SetCountryList(String),
    SetCountryInfo(String),
    Flush,
}

/// Snapshot of the page elements
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageContents {
    pub search_value: String,
    pub country_list: String,
    pub country_info: String,
}

#[derive(Debug, Default)]
struct MockPageState {
    contents: PageContents,
    commands: Vec<PageCommand>,
}

/// In-memory page
///
/// Clones share state, so a test can keep one handle while the controller
/// owns another.
#[derive(Debug, Clone, Default)]
pub struct MockPage {
    state: Arc<Mutex<MockPageState>>,
}

impl MockPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> PageContents {
        self.state.lock().unwrap().contents.clone()
    }

    /// Recorded writes, oldest first
    pub fn commands(&self) -> Vec<PageCommand> {
        self.state.lock().unwrap().commands.clone()
    }

    pub fn clear_commands(&self) {
        self.state.lock().unwrap().commands.clear();
    }

    fn record(&self, command: PageCommand) {
        let mut state = self.state.lock().unwrap();
        match &command {
            PageCommand::SetSearchValue(value) => state.contents.search_value = value.clone(),
            PageCommand::SetCountryList(markup) => state.contents.country_list = markup.clone(),
            PageCommand::SetCountryInfo(markup) => state.contents.country_info = markup.clone(),
            PageCommand::Flush => {}
        }
        state.commands.push(command);
    }
}

impl Page for MockPage {
    fn search_value(&self) -> String {
        self.state.lock().unwrap().contents.search_value.clone()
    }

    fn set_search_value(&mut self, value: String) {
        self.record(PageCommand::SetSearchValue(value));
    }

    fn set_country_list(&mut self, markup: String) {
        self.record(PageCommand::SetCountryList(markup));
    }

    fn set_country_info(&mut self, markup: String) {
        self.record(PageCommand::SetCountryInfo(markup));
    }

    fn flush(&mut self) -> Result<()> {
        self.record(PageCommand::Flush);
        Ok(())
    }
}
