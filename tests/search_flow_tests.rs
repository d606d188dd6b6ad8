use carpool_planner::{AppController, AppIntent, AppState, SearchContext};
use carpool_planner::{StopPlace, TransportMode};
use glam::DVec2;
use std::time::Duration;

fn catalog() -> Vec<StopPlace> {
    vec![
        StopPlace::new("NSR:1", "Oslo S", TransportMode::Train).at(10.7522, 59.9111),
        StopPlace::new("NSR:2", "Bergen stasjon", TransportMode::Train).at(5.3327, 60.3904),
        StopPlace::new("NSR:3", "Oslo bussterminal", TransportMode::Bus),
        StopPlace::new("NSR:4", "Trondheim S", TransportMode::Train),
    ]
}

fn loaded_state() -> AppState {
    let mut state = AppState::new();
    state.stop_places.load(catalog(), None);
    state
}

fn names(state: &AppState) -> Vec<String> {
    state
        .stop_places
        .visible()
        .data_for_table
        .iter()
        .map(|s| s.name.clone())
        .collect()
}

#[tokio::test(start_paused = true)]
async fn test_live_search_applies_after_debounce() {
    let mut controller = AppController::new();
    let mut state = loaded_state();

    controller
        .handle_intent(
            &mut state,
            AppIntent::SearchQueryChanged {
                query: "oslo".to_string(),
            },
        )
        .expect("SearchQueryChanged sollte funktionieren");

    tokio::time::sleep(Duration::from_millis(250)).await;
    assert_eq!(controller.poll_search(&mut state), 0);
    assert_eq!(state.stop_places.visible().current_total_for_table, 4);

    assert!(controller.await_search(&mut state).await);
    // Suchtreffer sind nach Name sortiert (ohne Groß/Klein)
    assert_eq!(names(&state), vec!["Oslo bussterminal", "Oslo S"]);
}

#[tokio::test(start_paused = true)]
async fn test_submit_resets_page_and_selection_wins() {
    let mut controller = AppController::new();
    let mut state = loaded_state();
    controller
        .handle_intent(&mut state, AppIntent::RowsPerPageChanged { rows: 10 })
        .expect("RowsPerPageChanged sollte funktionieren");

    controller
        .handle_intent(
            &mut state,
            AppIntent::SearchQueryChanged {
                query: " S".to_string(),
            },
        )
        .expect("SearchQueryChanged sollte funktionieren");
    controller
        .handle_intent(&mut state, AppIntent::SearchSubmitted)
        .expect("SearchSubmitted sollte funktionieren");
    assert!(controller.await_search(&mut state).await);
    assert_eq!(state.stop_places.table.page, 0);
    assert_eq!(state.stop_places.visible().current_total_for_table, 4);

    let chosen = state.stop_places.search.results()[1].name.clone();
    controller
        .handle_intent(&mut state, AppIntent::SearchResultSelected { index: 1 })
        .expect("SearchResultSelected sollte funktionieren");
    assert_eq!(names(&state), vec![chosen]);
    assert_eq!(state.stop_places.visible().current_total_for_table, 1);

    controller
        .handle_intent(&mut state, AppIntent::SearchSelectionCleared)
        .expect("SearchSelectionCleared sollte funktionieren");
    assert_eq!(state.stop_places.visible().current_total_for_table, 4);
}

#[tokio::test(start_paused = true)]
async fn test_filter_toggle_with_query_searches_again() {
    let mut controller = AppController::new();
    let mut state = loaded_state();

    controller
        .handle_intent(
            &mut state,
            AppIntent::SearchQueryChanged {
                query: "oslo".to_string(),
            },
        )
        .expect("SearchQueryChanged sollte funktionieren");
    controller
        .handle_intent(&mut state, AppIntent::SearchSubmitted)
        .expect("SearchSubmitted sollte funktionieren");
    assert!(controller.await_search(&mut state).await);

    controller
        .handle_intent(
            &mut state,
            AppIntent::FilterToggled {
                key: "bus".to_string(),
            },
        )
        .expect("FilterToggled sollte funktionieren");
    assert!(controller.await_search(&mut state).await);

    assert_eq!(names(&state), vec!["Oslo bussterminal"]);
}

#[tokio::test(start_paused = true)]
async fn test_search_cleared_restores_collection() {
    let mut controller = AppController::new();
    let mut state = loaded_state();

    controller
        .handle_intent(
            &mut state,
            AppIntent::SearchQueryChanged {
                query: "bergen".to_string(),
            },
        )
        .expect("SearchQueryChanged sollte funktionieren");
    controller
        .handle_intent(&mut state, AppIntent::SearchSubmitted)
        .expect("SearchSubmitted sollte funktionieren");
    assert!(controller.await_search(&mut state).await);
    assert_eq!(names(&state), vec!["Bergen stasjon"]);

    controller
        .handle_intent(&mut state, AppIntent::SearchCleared)
        .expect("SearchCleared sollte funktionieren");

    assert_eq!(state.stop_places.search.query(), "");
    assert_eq!(state.stop_places.visible().current_total_for_table, 4);
    // Collection-Zweig behält die Reihenfolge des Katalogs
    assert_eq!(names(&state)[0], "Oslo S");
}

#[tokio::test(start_paused = true)]
async fn test_map_context_result_flies_camera() {
    let mut controller = AppController::new();
    let mut state = loaded_state();

    controller
        .handle_intent(
            &mut state,
            AppIntent::SearchContextChanged {
                context: SearchContext::Map,
            },
        )
        .expect("SearchContextChanged sollte funktionieren");
    controller
        .handle_intent(
            &mut state,
            AppIntent::SearchQueryChanged {
                query: "bergen".to_string(),
            },
        )
        .expect("SearchQueryChanged sollte funktionieren");
    controller
        .handle_intent(&mut state, AppIntent::SearchSubmitted)
        .expect("SearchSubmitted sollte funktionieren");
    assert!(controller.await_search(&mut state).await);

    // Karten-Kontext: Tabelle zeigt weiter den Katalog
    assert_eq!(state.stop_places.visible().current_total_for_table, 4);

    controller
        .handle_intent(&mut state, AppIntent::SearchResultSelected { index: 0 })
        .expect("SearchResultSelected sollte funktionieren");

    assert_eq!(state.camera.center, DVec2::new(5.3327, 60.3904));
    assert_eq!(state.camera.zoom, state.options.fly_to_zoom);
    assert_eq!(
        state.camera.last_animation,
        Some(state.options.fly_to_duration())
    );
}

#[tokio::test(start_paused = true)]
async fn test_selecting_missing_result_is_ignored() {
    let mut controller = AppController::new();
    let mut state = loaded_state();

    controller
        .handle_intent(&mut state, AppIntent::SearchResultSelected { index: 5 })
        .expect("SearchResultSelected sollte robust sein");

    assert!(state.stop_places.search.selected_item().is_none());
    assert_eq!(state.stop_places.visible().current_total_for_table, 4);
}
