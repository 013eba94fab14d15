//! # Application Controller
//!
//! Owns the event loop: input events edit the search box and restart the
//! debouncer, a debounce firing issues a search, and finished searches are
//! handed back to the [`SearchController`]. Everything runs on one task;
//! outstanding searches are polled from a `FuturesUnordered`, so several may
//! be in flight at once without any locking.

use crate::config::WidgetProfile;
use crate::widget::controllers::search_controller::{
    SearchController, SearchSettings, SearchTicket,
};
use crate::widget::events::{Debouncer, InputEvent};
use crate::widget::io::{EventStream, Page};
use crate::widget::models::Country;
use crate::widget::notifier::Notifier;
use crate::widget::services::{CountrySource, FetchError};
use anyhow::Result;
use futures::future::LocalBoxFuture;
use futures::stream::FuturesUnordered;
use futures::{FutureExt, StreamExt};
use tokio::time::{sleep_until, Instant};

type PendingSearch<'a> = LocalBoxFuture<'a, (u64, Result<Vec<Country>, FetchError>)>;

pub struct AppController<ES, P, N, S>
where
    ES: EventStream,
    P: Page,
    N: Notifier,
    S: CountrySource,
{
    event_stream: ES,
    search: SearchController<P, N>,
    source: S,
    debouncer: Debouncer,
    should_quit: bool,
}

impl<ES, P, N, S> AppController<ES, P, N, S>
where
    ES: EventStream,
    P: Page,
    N: Notifier,
    S: CountrySource,
{
    /// Create a controller with injected I/O, notifier and country source
    pub fn with_io(
        profile: &WidgetProfile,
        event_stream: ES,
        page: P,
        notifier: N,
        source: S,
    ) -> Self {
        let settings = SearchSettings {
            notice_delay: profile.notice_delay,
            discard_stale: profile.discard_stale,
        };

        Self {
            event_stream,
            search: SearchController::new(page, notifier, settings),
            source,
            debouncer: Debouncer::new(profile.debounce),
            should_quit: false,
        }
    }

    pub fn search(&self) -> &SearchController<P, N> {
        &self.search
    }

    /// Run until the user quits or, for scripted input, until every event
    /// has been handled and no search is pending
    pub async fn run(&mut self) -> Result<()> {
        let Self {
            event_stream,
            search,
            source,
            debouncer,
            should_quit,
        } = self;
        let source = &*source;
        let mut in_flight: FuturesUnordered<PendingSearch<'_>> = FuturesUnordered::new();

        search.page_mut().flush()?;

        while !*should_quit {
            let input_open = !event_stream.is_exhausted();
            if !input_open && !debouncer.is_pending() && in_flight.is_empty() {
                tracing::debug!("Input exhausted and no search pending");
                break;
            }
            let dismissal = search.notifier().dismiss_due(Instant::now());
            let dismiss_at = dismissal.unwrap_or_else(Instant::now);

            tokio::select! {
                event = event_stream.next_event(), if input_open => {
                    match event? {
                        Some(InputEvent::Quit) | None => {
                            tracing::info!("Quit requested");
                            debouncer.cancel();
                            *should_quit = true;
                        }
                        Some(edit) => {
                            let mut value = search.page().search_value();
                            if edit.apply_to(&mut value) {
                                search.page_mut().set_search_value(value);
                                search.input_changed();
                                debouncer.trigger();
                            }
                        }
                    }
                }
                () = debouncer.fired(), if debouncer.is_pending() => {
                    if let Some(SearchTicket { sequence, query }) = search.debounce_fired() {
                        in_flight.push(
                            async move { (sequence, source.search(query).await) }.boxed_local(),
                        );
                    }
                }
                Some((sequence, outcome)) = in_flight.next(), if !in_flight.is_empty() => {
                    search.settle(sequence, outcome);
                }
                () = sleep_until(dismiss_at), if dismissal.is_some() => {
                    tracing::trace!("Notice dismissed");
                }
            }

            search.page_mut().flush()?;
        }

        Ok(())
    }
}
