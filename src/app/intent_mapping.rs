//! Mapping von UI-Intents auf mutierende App-Commands.

use super::map_edit::EditMode;
use super::search::SearchContext;
use super::{AppCommand, AppIntent, AppState};


/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::DrawStopRequested => {
            if state.trip_editor.can_draw() {
                vec![AppCommand::StartDrawingStop]
            } else {
                log::debug!("Beide Halte-Slots belegt, Zeichnen nicht möglich");
                vec![]
            }
        }
        AppIntent::MapClicked { pos } => match state.trip_editor.map().mode() {
            EditMode::Drawing => vec![AppCommand::DrawToolClick { pos }],
            _ => vec![AppCommand::SelectFeatureAt { pos }],
        },
        AppIntent::FinishDrawingRequested => vec![AppCommand::FinishDrawing],
        AppIntent::CancelDrawingRequested => vec![AppCommand::CancelDrawing],
        AppIntent::VertexDragged {
            feature_id,
            index,
            pos,
        } => vec![AppCommand::MoveVertex {
            feature_id,
            index,
            pos,
        }],
        AppIntent::DeleteSelectedStopRequested => vec![AppCommand::DeleteSelectedFeatures],
        AppIntent::RemoveStopRequested { slot } => vec![AppCommand::RemoveStop { slot }],
        AppIntent::ZoomToStopRequested { slot } => vec![AppCommand::ZoomToStop { slot }],
        AppIntent::EditTripRequested { trip } => {
            match (trip.stops.departure_stop, trip.stops.arrival_stop) {
                (Some(departure), Some(arrival)) => {
                    vec![AppCommand::LoadTripStops { departure, arrival }]
                }
                _ => {
                    log::warn!("Fahrt '{}' ohne vollständige Haltebereiche", trip.id);
                    vec![]
                }
            }
        }

        AppIntent::SearchQueryChanged { query } => vec![AppCommand::SetSearchQuery { query }],
        AppIntent::SearchSubmitted => vec![AppCommand::SubmitSearch, AppCommand::ResetPage],
        AppIntent::SearchCleared => vec![AppCommand::ClearSearch, AppCommand::ResetPage],
        AppIntent::SearchResultSelected { index } => {
            match state.stop_places.search.active_context() {
                SearchContext::Map => vec![AppCommand::FlyToSearchResult { index }],
                SearchContext::Data => vec![
                    AppCommand::SelectSearchResult { index },
                    AppCommand::ResetPage,
                ],
            }
        }
        AppIntent::SearchSelectionCleared => {
            vec![AppCommand::ClearSearchSelection, AppCommand::ResetPage]
        }
        AppIntent::SearchContextChanged { context } => vec![
            AppCommand::SetSearchContext { context },
            AppCommand::ResetPage,
        ],
        AppIntent::FilterToggled { key } => {
            vec![AppCommand::ToggleFilter { key }, AppCommand::ResetPage]
        }
        AppIntent::FiltersCleared => vec![AppCommand::ClearFilters, AppCommand::ResetPage],

        AppIntent::SortColumnClicked { column } => {
            if state.stop_places.view.is_sortable(&column) {
                vec![AppCommand::SortBy { column }]
            } else {
                vec![]
            }
        }
        AppIntent::PageChanged { page } => vec![AppCommand::SetPage { page }],
        AppIntent::RowsPerPageChanged { rows } => {
            if state.options.rows_per_page_choices.contains(&rows) {
                vec![AppCommand::SetRowsPerPage { rows }]
            } else {
                log::debug!("Seitengröße {} nicht auswählbar", rows);
                vec![]
            }
        }

        AppIntent::CameraPan { delta } => vec![AppCommand::PanCamera { delta }],
        AppIntent::CameraZoom { steps } => vec![AppCommand::ZoomCamera { steps }],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],

        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
