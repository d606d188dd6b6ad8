use carpool_planner::{AppCommand, AppController, AppIntent, AppState};
use carpool_planner::{EditMode, Feature, PlannerOptions, Trip, TripStatus, TripStopSlot};
use carpool_planner::{StopPlace, TransportMode, TripStopsPayload};
use glam::DVec2;

fn draw_square(controller: &mut AppController, state: &mut AppState, x: f64) {
    controller
        .handle_intent(state, AppIntent::DrawStopRequested)
        .expect("DrawStopRequested sollte funktionieren");
    for pos in [
        DVec2::new(x, 0.0),
        DVec2::new(x + 1.0, 0.0),
        DVec2::new(x + 1.0, 1.0),
        DVec2::new(x, 1.0),
    ] {
        controller
            .handle_intent(state, AppIntent::MapClicked { pos })
            .expect("MapClicked sollte funktionieren");
    }
    controller
        .handle_intent(state, AppIntent::FinishDrawingRequested)
        .expect("FinishDrawingRequested sollte funktionieren");
}

fn square(id: &str, x: f64) -> Feature {
    Feature::polygon(
        id,
        vec![
            DVec2::new(x, 0.0),
            DVec2::new(x + 1.0, 0.0),
            DVec2::new(x + 1.0, 1.0),
            DVec2::new(x, 0.0),
        ],
    )
}

fn twelve_stops() -> Vec<StopPlace> {
    (0..12)
        .map(|i| {
            let mode = if i % 3 == 0 {
                TransportMode::Train
            } else {
                TransportMode::Bus
            };
            StopPlace::new(&format!("S{i:02}"), &format!("Stopp {i:02}"), mode)
        })
        .collect()
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    assert!(!state.should_exit);

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");

    match last {
        AppCommand::RequestExit => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_two_drawings_fill_both_slots() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    draw_square(&mut controller, &mut state, 0.0);
    assert_eq!(state.trip_editor.map().mode(), EditMode::Editing);
    assert!(state.trip_editor.slot(TripStopSlot::Departure).is_some());
    assert!(state.trip_editor.slot(TripStopSlot::Arrival).is_none());

    draw_square(&mut controller, &mut state, 5.0);
    assert_eq!(state.feature_count(), 2);
    assert!(state.trip_editor.to_payload().is_complete());
    assert_eq!(state.trip_editor.map().tools_created(), 1);

    // Beide Slots belegt: weiteres Zeichnen wird nicht gemappt
    let before = state.command_log.len();
    controller
        .handle_intent(&mut state, AppIntent::DrawStopRequested)
        .expect("DrawStopRequested sollte robust sein");
    assert_eq!(state.command_log.len(), before);
    assert_ne!(state.trip_editor.map().mode(), EditMode::Drawing);
}

#[test]
fn test_cancel_drawing_keeps_slots_empty() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::DrawStopRequested)
        .expect("DrawStopRequested sollte funktionieren");
    controller
        .handle_intent(
            &mut state,
            AppIntent::MapClicked {
                pos: DVec2::new(0.0, 0.0),
            },
        )
        .expect("MapClicked sollte funktionieren");
    controller
        .handle_intent(&mut state, AppIntent::CancelDrawingRequested)
        .expect("CancelDrawingRequested sollte funktionieren");

    assert_eq!(state.feature_count(), 0);
    assert!(state.trip_editor.slot(TripStopSlot::Departure).is_none());
}

#[test]
fn test_click_selects_polygon_and_delete_clears_slot() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    draw_square(&mut controller, &mut state, 0.0);
    draw_square(&mut controller, &mut state, 5.0);

    controller
        .handle_intent(
            &mut state,
            AppIntent::MapClicked {
                pos: DVec2::new(0.5, 0.5),
            },
        )
        .expect("MapClicked sollte funktionieren");
    let departure_id = state
        .trip_editor
        .slot(TripStopSlot::Departure)
        .map(|f| f.id.clone())
        .expect("Abfahrt erwartet");
    assert_eq!(
        state.trip_editor.map().current_feature().map(|f| f.id.clone()),
        Some(departure_id)
    );

    controller
        .handle_intent(&mut state, AppIntent::DeleteSelectedStopRequested)
        .expect("DeleteSelectedStopRequested sollte funktionieren");

    assert_eq!(state.feature_count(), 1);
    assert!(state.trip_editor.slot(TripStopSlot::Departure).is_none());
    assert!(state.trip_editor.slot(TripStopSlot::Arrival).is_some());
    assert_eq!(state.trip_editor.map().mode(), EditMode::Viewing);
}

#[test]
fn test_vertex_drag_updates_slot_geometry() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    draw_square(&mut controller, &mut state, 0.0);
    let id = state
        .trip_editor
        .slot(TripStopSlot::Departure)
        .map(|f| f.id.clone())
        .expect("Abfahrt erwartet");

    controller
        .handle_intent(
            &mut state,
            AppIntent::VertexDragged {
                feature_id: id,
                index: 2,
                pos: DVec2::new(3.0, 3.0),
            },
        )
        .expect("VertexDragged sollte funktionieren");

    let ring = state
        .trip_editor
        .slot(TripStopSlot::Departure)
        .and_then(|f| f.outer_ring().map(<[DVec2]>::to_vec))
        .expect("Ring erwartet");
    assert_eq!(ring[2], DVec2::new(3.0, 3.0));
}

#[test]
fn test_edit_trip_loads_both_stops_and_zooms() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let trip = Trip {
        id: "T7".to_string(),
        name: "Morgens".to_string(),
        status: TripStatus::Published,
        departure_time: "2026-10-20T07:00:00Z".to_string(),
        seats: 2,
        stops: TripStopsPayload {
            departure_stop: Some(square("dep", 0.0)),
            arrival_stop: Some(square("arr", 10.0)),
        },
    };

    controller
        .handle_intent(&mut state, AppIntent::EditTripRequested { trip })
        .expect("EditTripRequested sollte funktionieren");
    assert_eq!(state.feature_count(), 2);
    assert_eq!(state.trip_editor.map().mode(), EditMode::Viewing);

    controller
        .handle_intent(
            &mut state,
            AppIntent::ZoomToStopRequested {
                slot: TripStopSlot::Arrival,
            },
        )
        .expect("ZoomToStopRequested sollte funktionieren");
    assert_eq!(state.camera.center, DVec2::new(10.5, 0.5));

    controller
        .handle_intent(
            &mut state,
            AppIntent::RemoveStopRequested {
                slot: TripStopSlot::Arrival,
            },
        )
        .expect("RemoveStopRequested sollte funktionieren");
    assert_eq!(state.feature_count(), 1);
    assert!(state.trip_editor.can_draw());
}

#[test]
fn test_loading_second_trip_into_same_editor_fails() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_command(
            &mut state,
            AppCommand::LoadTripStops {
                departure: square("a", 0.0),
                arrival: square("b", 5.0),
            },
        )
        .expect("Erstes Laden sollte funktionieren");

    let result = controller.handle_command(
        &mut state,
        AppCommand::LoadTripStops {
            departure: square("c", 0.0),
            arrival: square("d", 5.0),
        },
    );
    assert!(result.is_err(), "Zweites Laden muss fehlschlagen");
    assert_eq!(state.feature_count(), 2);
}

#[test]
fn test_paging_sorting_and_rows_per_page() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.stop_places.load(twelve_stops(), None);

    controller
        .handle_intent(&mut state, AppIntent::PageChanged { page: 1 })
        .expect("PageChanged sollte funktionieren");
    let slice = state.stop_places.visible();
    assert_eq!(slice.data_for_table.len(), 2);
    assert_eq!(slice.current_total_for_table, 12);

    // Seite hinter dem Ende fällt auf die erste Seite zurück
    controller
        .handle_intent(&mut state, AppIntent::PageChanged { page: 9 })
        .expect("PageChanged sollte robust sein");
    assert_eq!(state.stop_places.table.page, 0);

    controller
        .handle_intent(
            &mut state,
            AppIntent::SortColumnClicked {
                column: "name".to_string(),
            },
        )
        .expect("SortColumnClicked sollte funktionieren");
    assert_eq!(
        state.stop_places.table.order,
        carpool_planner::app::data_view::SortOrder::Desc
    );

    controller
        .handle_intent(&mut state, AppIntent::RowsPerPageChanged { rows: 25 })
        .expect("RowsPerPageChanged sollte funktionieren");
    assert_eq!(state.stop_places.visible().data_for_table.len(), 12);
}

#[test]
fn test_filter_without_query_narrows_table() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.stop_places.load(twelve_stops(), Some(500));
    assert_eq!(state.stop_places.visible().current_total_for_table, 500);

    controller
        .handle_intent(
            &mut state,
            AppIntent::FilterToggled {
                key: "train".to_string(),
            },
        )
        .expect("FilterToggled sollte funktionieren");

    let slice = state.stop_places.visible();
    assert_eq!(slice.current_total_for_table, 4);
    assert!(slice
        .data_for_table
        .iter()
        .all(|s| s.transport_mode == TransportMode::Train));
}

#[test]
fn test_camera_intents_pan_zoom_and_resize() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let start = state.camera.center;

    controller
        .handle_intent(
            &mut state,
            AppIntent::CameraPan {
                delta: DVec2::new(0.5, -0.25),
            },
        )
        .expect("CameraPan sollte funktionieren");
    controller
        .handle_intent(&mut state, AppIntent::CameraZoom { steps: 100.0 })
        .expect("CameraZoom sollte funktionieren");
    controller
        .handle_intent(
            &mut state,
            AppIntent::ViewportResized {
                size: [800.0, 600.0],
            },
        )
        .expect("ViewportResized sollte funktionieren");

    assert_eq!(state.camera.center, start + DVec2::new(0.5, -0.25));
    assert_eq!(state.camera.zoom, carpool_planner::MapView::ZOOM_MAX);
    assert_eq!(state.camera.viewport_size, [800.0, 600.0]);
}

#[test]
fn test_options_changed_sanitizes_and_persists() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let path = std::env::temp_dir().join(format!(
        "carpool_planner_controller_{}.toml",
        std::process::id()
    ));
    state.options_path = path.clone();

    let options = PlannerOptions {
        rows_per_page: 0,
        search_debounce_ms: 150,
        ..PlannerOptions::default()
    };
    controller
        .handle_intent(&mut state, AppIntent::OptionsChanged { options })
        .expect("OptionsChanged sollte funktionieren");

    assert_eq!(state.options.rows_per_page, 10);
    let reloaded = PlannerOptions::load_from_file(&path);
    assert_eq!(reloaded, state.options);
    assert_eq!(reloaded.search_debounce_ms, 150);

    controller
        .handle_intent(&mut state, AppIntent::ResetOptionsRequested)
        .expect("ResetOptionsRequested sollte funktionieren");
    assert_eq!(PlannerOptions::load_from_file(&path), PlannerOptions::default());

    let _ = std::fs::remove_file(&path);
}
