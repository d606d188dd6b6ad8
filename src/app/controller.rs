//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Handler auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Haltebereiche ===
            AppCommand::StartDrawingStop => handlers::stops::start_drawing(state),
            AppCommand::DrawToolClick { pos } => handlers::stops::draw_click(state, pos),
            AppCommand::SelectFeatureAt { pos } => handlers::stops::select_at(state, pos),
            AppCommand::FinishDrawing => handlers::stops::finish_drawing(state),
            AppCommand::CancelDrawing => handlers::stops::cancel_drawing(state),
            AppCommand::MoveVertex {
                feature_id,
                index,
                pos,
            } => handlers::stops::move_vertex(state, &feature_id, index, pos),
            AppCommand::DeleteSelectedFeatures => handlers::stops::delete_selected(state),
            AppCommand::RemoveStop { slot } => handlers::stops::remove_stop(state, slot),
            AppCommand::ZoomToStop { slot } => handlers::stops::zoom_to_stop(state, slot),
            AppCommand::LoadTripStops { departure, arrival } => {
                handlers::stops::load_trip_stops(state, departure, arrival)?
            }

            // === Suche ===
            AppCommand::SetSearchQuery { query } => handlers::search::set_query(state, &query),
            AppCommand::SubmitSearch => handlers::search::submit(state),
            AppCommand::ClearSearch => handlers::search::clear(state),
            AppCommand::SelectSearchResult { index } => {
                handlers::search::select_result(state, index)
            }
            AppCommand::FlyToSearchResult { index } => handlers::search::fly_to(state, index),
            AppCommand::ClearSearchSelection => handlers::search::clear_selection(state),
            AppCommand::SetSearchContext { context } => {
                handlers::search::set_context(state, context)
            }
            AppCommand::ToggleFilter { key } => handlers::search::toggle_filter(state, &key),
            AppCommand::ClearFilters => handlers::search::clear_filters(state),

            // === Tabelle ===
            AppCommand::SortBy { column } => handlers::table::sort_by(state, &column),
            AppCommand::SetPage { page } => handlers::table::set_page(state, page),
            AppCommand::ResetPage => handlers::table::reset_page(state),
            AppCommand::SetRowsPerPage { rows } => handlers::table::set_rows_per_page(state, rows),

            // === Kamera ===
            AppCommand::PanCamera { delta } => handlers::view::pan(state, delta),
            AppCommand::ZoomCamera { steps } => handlers::view::zoom(state, steps),
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),

            // === Optionen & Anwendung ===
            AppCommand::ApplyOptions { options } => {
                handlers::options::apply_options(state, options)?
            }
            AppCommand::ResetOptions => handlers::options::reset_options(state)?,
            AppCommand::RequestExit => handlers::options::request_exit(state),
        }

        Ok(())
    }

    /// Übernimmt eingetroffene Suchergebnisse (pro Frame aufrufen).
    /// Gibt die Anzahl übernommener Antworten zurück.
    pub fn poll_search(&mut self, state: &mut AppState) -> usize {
        let applied = state.stop_places.search.apply_ready();
        if applied > 0 {
            Self::clamp_table_page(state);
        }
        applied
    }

    /// Wartet auf die nächste Such-Antwort. `true` wenn sie übernommen wurde.
    pub async fn await_search(&mut self, state: &mut AppState) -> bool {
        let applied = state.stop_places.search.next_outcome().await;
        if applied {
            Self::clamp_table_page(state);
        }
        applied
    }

    fn clamp_table_page(state: &mut AppState) {
        let total = state.stop_places.visible().current_total_for_table;
        state.stop_places.table.clamp_page(total);
    }
}
