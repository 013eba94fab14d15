//! # Search Controller
//!
//! Drives one search cycle: the debounced input change reads the search box,
//! issues a fetch for a non-empty query, and applies the outcome to the page
//! through the classifier, the renderers and the notifier.
//!
//! Every issued search (and every clear) takes the next sequence number. With
//! `discard_stale` on, an outcome is only applied when its sequence number is
//! still the latest, so a slow response cannot overwrite a newer result.

use crate::widget::io::Page;
use crate::widget::models::{Country, DisplayState, NoticeKind, SearchQuery};
use crate::widget::notifier::{Notice, Notifier};
use crate::widget::services::{CountrySource, FetchError};
use crate::widget::view_models::{classify, Classification};
use crate::widget::views::{render_country_info, render_country_list};
use std::time::Duration;

/// Where the controller is in its search cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchState {
    #[default]
    Idle,
    AwaitingDebounce,
    FetchInFlight,
    Settled,
}

/// A search the controller wants issued
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub sequence: u64,
    pub query: SearchQuery,
}

/// Tunables of the search cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchSettings {
    pub notice_delay: Duration,
    pub discard_stale: bool,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            notice_delay: crate::widget::notifier::DEFAULT_NOTICE_DELAY,
            discard_stale: true,
        }
    }
}

pub struct SearchController<P: Page, N: Notifier> {
    page: P,
    notifier: N,
    settings: SearchSettings,
    state: SearchState,
    display: DisplayState,
    latest_sequence: u64,
}

impl<P: Page, N: Notifier> SearchController<P, N> {
    pub fn new(page: P, notifier: N, settings: SearchSettings) -> Self {
        Self {
            page,
            notifier,
            settings,
            state: SearchState::Idle,
            display: DisplayState::Empty,
            latest_sequence: 0,
        }
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut P {
        &mut self.page
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// The search box changed; a debounce period starts over
    pub fn input_changed(&mut self) {
        self.state = SearchState::AwaitingDebounce;
    }

    /// The debounce period elapsed
    ///
    /// An empty or whitespace-only value clears both containers and settles
    /// without a fetch. Otherwise a ticket for exactly one fetch is returned.
    pub fn debounce_fired(&mut self) -> Option<SearchTicket> {
        self.latest_sequence += 1;
        let raw = self.page.search_value();

        match SearchQuery::parse(&raw) {
            None => {
                tracing::debug!("Empty query, clearing results");
                self.page.clear_results();
                self.display = DisplayState::Empty;
                self.state = SearchState::Settled;
                None
            }
            Some(query) => {
                tracing::debug!("Issuing search #{} for '{query}'", self.latest_sequence);
                self.state = SearchState::FetchInFlight;
                Some(SearchTicket {
                    sequence: self.latest_sequence,
                    query,
                })
            }
        }
    }

    /// Apply the outcome of search `sequence`
    ///
    /// Returns `false` when the outcome was discarded as stale.
    pub fn settle(&mut self, sequence: u64, outcome: Result<Vec<Country>, FetchError>) -> bool {
        if self.settings.discard_stale && sequence != self.latest_sequence {
            tracing::debug!(
                "Discarding stale response #{sequence}, latest is #{}",
                self.latest_sequence
            );
            return false;
        }

        self.page.clear_results();
        match outcome {
            Ok(countries) => self.show_countries(&countries),
            Err(error) => self.show_error(&error),
        }

        if self.state == SearchState::FetchInFlight {
            self.state = SearchState::Settled;
        }
        true
    }

    /// Run a whole cycle against `source` for the current search value
    pub async fn search<S: CountrySource>(&mut self, source: &S) -> bool {
        match self.debounce_fired() {
            Some(SearchTicket { sequence, query }) => {
                let outcome = source.search(query).await;
                self.settle(sequence, outcome)
            }
            None => true,
        }
    }

    fn show_countries(&mut self, countries: &[Country]) {
        match classify(countries.len()) {
            Classification::Nothing => {
                tracing::debug!("Search returned no records");
                self.display = DisplayState::Empty;
            }
            Classification::Detail => {
                let country = &countries[0];
                self.page.set_country_info(render_country_info(country));
                self.display = DisplayState::Detail(country.name.clone());
            }
            Classification::List => {
                self.page.set_country_list(render_country_list(countries));
                self.display =
                    DisplayState::List(countries.iter().map(|c| c.name.clone()).collect());
            }
            Classification::TooMany => {
                tracing::debug!("Search returned {} records, too many to list", countries.len());
                self.notify(NoticeKind::TooManyMatches);
            }
        }
    }

    fn show_error(&mut self, error: &FetchError) {
        let kind = if error.is_not_found() {
            NoticeKind::NotFound
        } else {
            tracing::warn!("Country search failed: {error}");
            NoticeKind::Failure(error.to_string())
        };
        self.notify(kind);
    }

    fn notify(&mut self, kind: NoticeKind) {
        self.notifier
            .error(Notice::new(&kind, self.settings.notice_delay));
        self.display = DisplayState::Notice(kind);
    }
}
