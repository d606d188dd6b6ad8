use super::*;
use crate::app::data_view::stop_places_view;
use crate::core::{MapView, StopPlace, TransportMode};
use std::sync::{Arc, Mutex};
use std::time::Duration;

type Calls = Arc<Mutex<Vec<(String, Vec<String>)>>>;

fn catalog() -> Vec<StopPlace> {
    vec![
        StopPlace::new("A", "Central Station", TransportMode::Train).at(10.75, 59.91),
        StopPlace::new("B", "Centralbadet", TransportMode::Bus),
        StopPlace::new("C", "Nationaltheatret", TransportMode::Metro),
    ]
}

fn hits_for(query: &str, filters: &[String]) -> Vec<SearchResultItem<StopPlace>> {
    let view = stop_places_view();
    LocalSearch::new(view.search_items(&catalog()))
        .find(query, filters)
        .expect("Regex sollte bauen")
}

fn recording_search(calls: Calls) -> SharedSearchFunction<StopPlace> {
    Arc::new(FnSearch(move |query: String, filters: Vec<String>| {
        let calls = calls.clone();
        async move {
            calls
                .lock()
                .expect("Lock")
                .push((query.clone(), filters.clone()));
            Ok::<_, anyhow::Error>(hits_for(&query, &filters))
        }
    }))
}

fn failing_search() -> SharedSearchFunction<StopPlace> {
    Arc::new(FnSearch(|_query: String, _filters: Vec<String>| async move {
        Err::<Vec<SearchResultItem<StopPlace>>, _>(anyhow::anyhow!("Netzwerkfehler"))
    }))
}

/// "slow" antwortet nach 1s, alles andere nach 10ms.
fn racing_search() -> SharedSearchFunction<StopPlace> {
    Arc::new(FnSearch(|query: String, filters: Vec<String>| async move {
        let delay = if query == "slow" { 1000 } else { 10 };
        tokio::time::sleep(Duration::from_millis(delay)).await;
        let mut hits = hits_for("", &filters);
        hits.truncate(if query == "slow" { 3 } else { 1 });
        Ok::<_, anyhow::Error>(hits)
    }))
}

fn session_with(function: SharedSearchFunction<StopPlace>) -> SearchSession<StopPlace> {
    let mut session = SearchSession::new(SearchRegistry::new(), Duration::from_millis(300));
    session.register(SearchContext::Data, Some(function));
    session
}

#[tokio::test(start_paused = true)]
async fn test_debounce_replaces_pending_timer() {
    let calls = Calls::default();
    let mut session = session_with(recording_search(calls.clone()));

    session.on_query_input("cen");
    tokio::time::sleep(Duration::from_millis(100)).await;
    session.on_query_input("central");
    assert!(session.has_pending_timer());

    assert!(session.next_outcome().await);

    let recorded = calls.lock().expect("Lock").clone();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].0, "central");
    assert_eq!(session.results().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_debounce_waits_full_delay() {
    let calls = Calls::default();
    let mut session = session_with(recording_search(calls.clone()));
    let start = tokio::time::Instant::now();

    session.on_query_input("national");
    tokio::time::sleep(Duration::from_millis(299)).await;
    assert_eq!(session.apply_ready(), 0);
    assert!(calls.lock().expect("Lock").is_empty());

    assert!(session.next_outcome().await);
    assert!(start.elapsed() >= Duration::from_millis(300));
    assert_eq!(session.results()[0].id, "C");
}

#[tokio::test(start_paused = true)]
async fn test_submit_bypasses_debounce() {
    let calls = Calls::default();
    let mut session = session_with(recording_search(calls.clone()));
    let start = tokio::time::Instant::now();

    session.on_query_input("central");
    session.submit_search();
    assert!(!session.has_pending_timer());
    assert!(session.next_outcome().await);

    assert!(start.elapsed() < Duration::from_millis(300));
    assert_eq!(calls.lock().expect("Lock").len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_failing_search_yields_empty_results() {
    let mut session = session_with(failing_search());
    session.on_query_input("central");
    session.submit_search();

    assert!(session.next_outcome().await);
    assert!(session.results().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_stale_response_is_discarded() {
    let mut session = session_with(racing_search());

    session.on_query_input("slow");
    session.submit_search();
    session.on_query_input("fast");
    session.submit_search();

    assert!(session.next_outcome().await);
    assert_eq!(session.results().len(), 1);

    // Ältere Anfrage kommt später an und darf nicht überschreiben
    assert!(!session.next_outcome().await);
    assert_eq!(session.results().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_clear_discards_in_flight_response() {
    let mut session = session_with(racing_search());
    session.on_query_input("fast");
    session.submit_search();
    session.clear();

    assert!(!session.next_outcome().await);
    assert!(session.results().is_empty());
    assert_eq!(session.query(), "");
}

#[tokio::test(start_paused = true)]
async fn test_empty_query_clears_results_without_search() {
    let calls = Calls::default();
    let mut session = session_with(recording_search(calls.clone()));
    session.on_query_input("central");
    session.submit_search();
    assert!(session.next_outcome().await);

    session.on_query_input("  ");
    assert!(session.results().is_empty());
    assert!(!session.has_pending_timer());
    assert_eq!(calls.lock().expect("Lock").len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_toggle_filter_searches_again_with_filters() {
    let calls = Calls::default();
    let mut session = session_with(recording_search(calls.clone()));
    session.on_query_input("central");
    session.submit_search();
    assert!(session.next_outcome().await);
    assert_eq!(session.results().len(), 2);

    assert!(session.toggle_filter("bus"));
    assert!(session.next_outcome().await);

    assert_eq!(session.results().len(), 1);
    assert_eq!(session.results()[0].id, "B");
    let recorded = calls.lock().expect("Lock").clone();
    assert_eq!(recorded[1].1, vec!["bus".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn test_context_switch_uses_other_function_and_filters() {
    let calls = Calls::default();
    let mut session = session_with(failing_search());
    session.register(SearchContext::Map, Some(recording_search(calls.clone())));
    session.toggle_filter("train");

    session.set_active_context(SearchContext::Map);
    assert!(session.active_filters().is_empty());
    assert!(session.filters(SearchContext::Data).contains("train"));

    session.on_query_input("central");
    session.submit_search();
    assert!(session.next_outcome().await);
    assert_eq!(session.results().len(), 2);
    assert_eq!(calls.lock().expect("Lock").len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_missing_function_yields_no_results() {
    let mut session: SearchSession<StopPlace> =
        SearchSession::new(SearchRegistry::new(), Duration::from_millis(300));
    session.on_query_input("central");
    assert!(!session.has_pending_timer());
    session.submit_search();
    tokio::time::sleep(Duration::from_millis(500)).await;
    assert_eq!(session.apply_ready(), 0);
    assert!(session.results().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_deregistered_context_discards_in_flight_response() {
    let mut session = session_with(racing_search());
    session.on_query_input("slow");
    session.submit_search();

    session.register(SearchContext::Data, None);
    session.on_query_input("other");
    tokio::time::sleep(Duration::from_secs(2)).await;

    assert_eq!(session.apply_ready(), 0);
    assert!(session.results().is_empty());
    assert_eq!(session.query(), "other");
}

#[tokio::test(start_paused = true)]
async fn test_teardown_stops_timer() {
    let calls = Calls::default();
    let mut session = session_with(recording_search(calls.clone()));
    session.on_query_input("central");
    session.teardown();
    tokio::time::sleep(Duration::from_millis(1000)).await;

    assert_eq!(session.apply_ready(), 0);
    assert!(calls.lock().expect("Lock").is_empty());
}

#[test]
fn test_registry_register_replace_and_deregister() {
    let mut registry: SearchRegistry<StopPlace> = SearchRegistry::new();
    assert!(!registry.is_registered(SearchContext::Data));

    registry.register(SearchContext::Data, Some(failing_search()));
    registry.register(SearchContext::Data, Some(racing_search()));
    assert!(registry.is_registered(SearchContext::Data));
    assert!(!registry.is_registered(SearchContext::Map));

    registry.register(SearchContext::Data, None);
    assert!(registry.get(SearchContext::Data).is_none());
}

#[test]
fn test_local_search_case_insensitive_with_filters_and_limit() {
    let view = stop_places_view();
    let search = LocalSearch::new(view.search_items(&catalog()));

    let hits = search.find("CENTRAL", &[]).expect("Suche");
    assert_eq!(hits.len(), 2);

    let hits = search.find("central", &["train".to_string()]).expect("Suche");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].original_data.id, "A");

    // Regex-Sonderzeichen werden wörtlich gesucht
    assert!(search.find("c.ntral", &[]).expect("Suche").is_empty());

    let limited = LocalSearch::new(view.search_items(&catalog())).with_limit(1);
    assert_eq!(limited.find("", &[]).expect("Suche").len(), 1);
}

#[test]
fn test_fly_to_result_requires_coordinates() {
    let hits = hits_for("central", &[]);
    let mut view = MapView::default();

    let with = hits.iter().find(|h| h.id == "A").expect("Treffer A");
    let without = hits.iter().find(|h| h.id == "B").expect("Treffer B");

    assert!(!fly_to_result(without, &mut view, 15.0, Duration::from_millis(1200)));
    assert!(view.last_animation.is_none());

    assert!(fly_to_result(with, &mut view, 15.0, Duration::from_millis(1200)));
    assert_eq!(view.center, glam::DVec2::new(10.75, 59.91));
}
