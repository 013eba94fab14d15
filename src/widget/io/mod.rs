//! # I/O Abstraction Layer
//!
//! Trait boundaries between the widget and its host:
//!
//! - **Page**: handle to the three host elements (search input, list
//!   container, detail container), built once at startup and handed to the
//!   controller.
//! - **EventStream**: source of search box input events.
//!
//! ```text
//! Production:  AppController ──▶ TerminalEventStream ──▶ crossterm EventStream
//!                            ──▶ TerminalPage        ──▶ crossterm::queue!()
//!
//! Testing:     AppController ──▶ MockEventStream     ──▶ VecDeque<InputEvent>
//!                            ──▶ MockPage            ──▶ Vec<PageCommand>
//! ```

use crate::widget::events::InputEvent;
use anyhow::Result;
use std::future::Future;

pub mod mock;
pub mod terminal;

pub use mock::{MockEventStream, MockPage, PageCommand, PageContents};
pub use terminal::{RawModeGuard, TerminalEventStream, TerminalPage};

/// Handle to the host page elements the widget reads and writes
pub trait Page {
    /// Current value of the search input
    fn search_value(&self) -> String;

    /// Replace the search input value (host-side editing)
    fn set_search_value(&mut self, value: String);

    /// Replace the markup of the list container
    fn set_country_list(&mut self, markup: String);

    /// Replace the markup of the detail container
    fn set_country_info(&mut self, markup: String);

    /// Empty both result containers
    fn clear_results(&mut self) {
        self.set_country_list(String::new());
        self.set_country_info(String::new());
    }

    /// Push pending changes to the screen
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Input event stream abstraction
pub trait EventStream {
    /// Wait for the next input event
    ///
    /// `Ok(None)` means the input source is closed.
    fn next_event(&mut self) -> impl Future<Output = Result<Option<InputEvent>>>;

    /// Whether no more events will ever arrive
    ///
    /// Terminal sources are never exhausted; scripted test sources are once
    /// their queue is drained.
    fn is_exhausted(&self) -> bool {
        false
    }
}
