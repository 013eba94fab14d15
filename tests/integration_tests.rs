//! # Integration Tests
//!
//! Drive the real `AppController` with scripted keystrokes, an in-memory
//! page and a scripted country source. Time is paused, so debounce delays
//! and slow responses play out instantly and deterministically.

mod common;

use common::{many, poland, run_script, united, ScriptedSource};
use countryline::config::WidgetProfile;
use countryline::io::MockEventStream;
use countryline::{FetchError, InputEvent, Page};
use std::time::Duration;

const KEYSTROKE: Duration = Duration::from_millis(80);

fn typing(text: &str) -> MockEventStream {
    let mut events = MockEventStream::empty();
    events.type_text(text, KEYSTROKE);
    events
}

#[tokio::test(start_paused = true)]
async fn single_match_shows_detail_panel() {
    let source = ScriptedSource::new().answer("Poland", Ok(vec![poland()]));

    let result = run_script(&WidgetProfile::default(), typing("Poland"), source.clone()).await;

    assert_eq!(source.calls(), vec!["Poland"]);
    let contents = result.page.contents();
    assert!(contents.country_info.contains("<h2>Poland</h2>"));
    assert!(contents.country_info.contains("<p><b>Capital:</b> Warsaw</p>"));
    assert!(contents.country_info.contains("<p><b>Population:</b> 37,950,802</p>"));
    assert!(contents.country_info.contains("<ul><li>Polish</li></ul>"));
    assert!(contents
        .country_info
        .contains("<img src=\"https://flagcdn.com/pl.svg\" alt=\"Flag of Poland\" width=\"200\">"));
    assert_eq!(contents.country_list, "");
    assert!(result.notifier.notices().is_empty());
}

#[tokio::test(start_paused = true)]
async fn several_matches_show_name_list_in_api_order() {
    let source = ScriptedSource::new().answer("United", Ok(united()));

    let result = run_script(&WidgetProfile::default(), typing("United"), source).await;

    let contents = result.page.contents();
    assert_eq!(
        contents.country_list,
        "<li>United States of America</li>\
         <li>United Kingdom of Great Britain and Northern Ireland</li>\
         <li>United Arab Emirates</li>"
    );
    assert_eq!(contents.country_info, "");
    assert!(result.notifier.notices().is_empty());
}

#[tokio::test(start_paused = true)]
async fn broad_query_asks_for_more_specific_input() {
    let source = ScriptedSource::new().answer("a", Ok(many(50)));

    let result = run_script(&WidgetProfile::default(), typing("a"), source).await;

    assert_eq!(
        result.notifier.texts(),
        vec!["Too many matches found. Please enter a more specific query!"]
    );
    assert_eq!(result.page.contents().country_list, "");
    assert_eq!(result.page.contents().country_info, "");
}

#[tokio::test(start_paused = true)]
async fn list_boundaries_follow_record_count() {
    for (count, listed) in [(2, true), (10, true), (11, false)] {
        let source = ScriptedSource::new().answer("c", Ok(many(count)));

        let result = run_script(&WidgetProfile::default(), typing("c"), source).await;

        let list = result.page.contents().country_list;
        assert_eq!(list.matches("<li>").count(), if listed { count } else { 0 });
        assert_eq!(result.notifier.notices().is_empty(), listed, "count {count}");
    }
}

#[tokio::test(start_paused = true)]
async fn unknown_country_shows_not_found_notice() {
    let source =
        ScriptedSource::new().answer("xyzxyz", Err(FetchError::RequestFailed { status: 404 }));

    let result = run_script(&WidgetProfile::default(), typing("xyzxyz"), source).await;

    assert_eq!(result.notifier.texts(), vec!["No country found with that name."]);
    assert_eq!(result.notifier.notices()[0].delay, Duration::from_millis(2500));
    assert_eq!(result.page.contents().country_list, "");
    assert_eq!(result.page.contents().country_info, "");
}

#[tokio::test(start_paused = true)]
async fn server_failure_surfaces_status() {
    let source =
        ScriptedSource::new().answer("Peru", Err(FetchError::RequestFailed { status: 503 }));

    let result = run_script(&WidgetProfile::default(), typing("Peru"), source).await;

    assert_eq!(result.notifier.texts(), vec!["An error occurred: 503"]);
}

#[tokio::test(start_paused = true)]
async fn whitespace_input_clears_previous_result_without_fetching() {
    let source = ScriptedSource::new().answer("Poland", Ok(vec![poland()]));
    let mut events = typing("Poland");
    events.push_event_after(Duration::from_secs(1), InputEvent::Replace("   ".to_string()));

    let result = run_script(&WidgetProfile::default(), events, source.clone()).await;

    assert_eq!(source.calls(), vec!["Poland"]);
    assert_eq!(result.page.contents().country_list, "");
    assert_eq!(result.page.contents().country_info, "");
    assert!(result.notifier.notices().is_empty());
}

#[tokio::test(start_paused = true)]
async fn rapid_keystrokes_collapse_into_one_search() {
    let source = ScriptedSource::new().answer("United", Ok(united()));

    run_script(&WidgetProfile::default(), typing("United"), source.clone()).await;

    assert_eq!(source.calls(), vec!["United"]);
}

#[tokio::test(start_paused = true)]
async fn backspace_edits_are_debounced_too() {
    let source = ScriptedSource::new().answer("Poland", Ok(vec![poland()]));
    let mut events = typing("Polx");
    events.push_event_after(KEYSTROKE, InputEvent::Backspace);
    events.type_text("and", KEYSTROKE);

    let result = run_script(&WidgetProfile::default(), events, source.clone()).await;

    assert_eq!(source.calls(), vec!["Poland"]);
    assert_eq!(result.page.search_value(), "Poland");
}

#[tokio::test(start_paused = true)]
async fn same_query_twice_renders_identically() {
    let source = ScriptedSource::new().answer("Poland", Ok(vec![poland()]));
    let profile = WidgetProfile::default();

    let first = run_script(&profile, typing("Poland"), source.clone()).await;
    let second = run_script(&profile, typing("Poland"), source.clone()).await;

    assert_eq!(first.page.contents(), second.page.contents());
    assert_eq!(source.calls(), vec!["Poland", "Poland"]);
}

/// "Pol" is slow to answer; by the time it does, "Poland" has already been shown
fn racing_searches() -> (MockEventStream, ScriptedSource) {
    let source = ScriptedSource::new()
        .answer_after("Pol", Duration::from_secs(3), Ok(many(2)))
        .answer("Poland", Ok(vec![poland()]));

    let mut events = typing("Pol");
    events.push_event_after(Duration::from_millis(700), InputEvent::Insert('a'));
    events.type_text("nd", KEYSTROKE);

    (events, source)
}

#[tokio::test(start_paused = true)]
async fn stale_response_is_discarded() {
    let (events, source) = racing_searches();

    let result = run_script(&WidgetProfile::default(), events, source.clone()).await;

    assert_eq!(source.calls(), vec!["Pol", "Poland"]);
    assert!(result.page.contents().country_info.contains("<h2>Poland</h2>"));
    assert_eq!(result.page.contents().country_list, "");
}

#[tokio::test(start_paused = true)]
async fn stale_response_wins_when_guard_is_disabled() {
    let (events, source) = racing_searches();
    let profile = WidgetProfile {
        discard_stale: false,
        ..WidgetProfile::default()
    };

    let result = run_script(&profile, events, source).await;

    assert_eq!(result.page.contents().country_info, "");
    assert_eq!(
        result.page.contents().country_list,
        "<li>Country 0</li><li>Country 1</li>"
    );
}

#[tokio::test(start_paused = true)]
async fn custom_debounce_delay_is_honored() {
    let source = ScriptedSource::new();
    let profile = WidgetProfile {
        debounce: Duration::from_millis(1500),
        ..WidgetProfile::default()
    };
    let mut events = MockEventStream::empty();
    events.push_event(InputEvent::Insert('P'));
    events.push_event_after(Duration::from_millis(1200), InputEvent::Insert('e'));

    run_script(&profile, events, source.clone()).await;

    assert_eq!(source.calls(), vec!["Pe"]);
}

#[tokio::test]
async fn country_service_end_to_end_against_mock_api() {
    use countryline::io::MockPage;
    use countryline::notifier::RecordingNotifier;
    use countryline::{AppController, CountryService};
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/name/Poland"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "name": "Poland",
            "capital": "Warsaw",
            "population": 37950802,
            "flags": {"svg": "https://flagcdn.com/pl.svg"},
            "languages": [{"name": "Polish"}]
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let profile = WidgetProfile {
        base_url: format!("{}/v2", server.uri()),
        debounce: Duration::from_millis(20),
        ..WidgetProfile::default()
    };
    let source = CountryService::new(&profile.base_url, profile.timeout).unwrap();
    let page = MockPage::new();
    let notifier = RecordingNotifier::new();
    let events = MockEventStream::new(vec![InputEvent::Replace("Poland".to_string())]);

    let mut app = AppController::with_io(&profile, events, page.clone(), notifier.clone(), source);
    app.run().await.unwrap();

    assert!(page.contents().country_info.contains("<h2>Poland</h2>"));
    assert!(notifier.notices().is_empty());
}
