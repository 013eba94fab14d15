//! Common test utilities for the integration tests
//!
//! Country fixtures, a scripted country source and a helper that runs the
//! real `AppController` against in-memory I/O.

use countryline::config::WidgetProfile;
use countryline::io::{MockEventStream, MockPage};
use countryline::notifier::RecordingNotifier;
use countryline::{AppController, Country, CountrySource, FetchError, SearchQuery};
use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

pub fn poland() -> Country {
    Country::new(
        "Poland",
        "Warsaw",
        37_950_802,
        "https://flagcdn.com/pl.svg",
        &["Polish"],
    )
}

pub fn united() -> Vec<Country> {
    vec![
        Country::new(
            "United States of America",
            "Washington, D.C.",
            329_484_123,
            "https://flagcdn.com/us.svg",
            &["English"],
        ),
        Country::new(
            "United Kingdom of Great Britain and Northern Ireland",
            "London",
            67_215_293,
            "https://flagcdn.com/gb.svg",
            &["English"],
        ),
        Country::new(
            "United Arab Emirates",
            "Abu Dhabi",
            9_890_400,
            "https://flagcdn.com/ae.svg",
            &["Arabic"],
        ),
    ]
}

pub fn many(count: usize) -> Vec<Country> {
    (0..count)
        .map(|i| Country::new(format!("Country {i}"), "", 0, "", &[]))
        .collect()
}

#[derive(Clone)]
struct Answer {
    delay: Duration,
    outcome: Result<Vec<Country>, FetchError>,
}

/// Country source answering from a table, optionally after a delay
///
/// Unknown queries answer with no records. Every call is logged.
#[derive(Clone, Default)]
pub struct ScriptedSource {
    answers: HashMap<String, Answer>,
    calls: Rc<RefCell<Vec<String>>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(self, query: &str, outcome: Result<Vec<Country>, FetchError>) -> Self {
        self.answer_after(query, Duration::ZERO, outcome)
    }

    pub fn answer_after(
        mut self,
        query: &str,
        delay: Duration,
        outcome: Result<Vec<Country>, FetchError>,
    ) -> Self {
        self.answers
            .insert(query.to_string(), Answer { delay, outcome });
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl CountrySource for ScriptedSource {
    fn search(
        &self,
        query: SearchQuery,
    ) -> impl Future<Output = Result<Vec<Country>, FetchError>> {
        self.calls.borrow_mut().push(query.to_string());
        let answer = self.answers.get(query.as_str()).cloned().unwrap_or(Answer {
            delay: Duration::ZERO,
            outcome: Ok(Vec::new()),
        });

        async move {
            if !answer.delay.is_zero() {
                tokio::time::sleep(answer.delay).await;
            }
            answer.outcome
        }
    }
}

/// What a scripted run left behind
pub struct RunResult {
    pub page: MockPage,
    pub notifier: RecordingNotifier,
}

/// Run the application controller over scripted input until it goes idle
pub async fn run_script(
    profile: &WidgetProfile,
    events: MockEventStream,
    source: ScriptedSource,
) -> RunResult {
    let page = MockPage::new();
    let notifier = RecordingNotifier::new();

    let mut app = AppController::with_io(profile, events, page.clone(), notifier.clone(), source);
    app.run().await.expect("application run failed");

    RunResult { page, notifier }
}
