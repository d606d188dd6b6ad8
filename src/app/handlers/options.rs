//! Handler für Optionen und Anwendungssteuerung.

use crate::app::AppState;
use crate::shared::PlannerOptions;

/// Übernimmt neue Optionen und persistiert sie.
pub fn apply_options(state: &mut AppState, options: PlannerOptions) -> anyhow::Result<()> {
    state.options = options.sanitized();
    state
        .stop_places
        .search
        .set_debounce(state.options.search_debounce());
    state.options.save_to_file(&state.options_path)
}

/// Setzt Optionen auf Standardwerte zurück und persistiert sie.
pub fn reset_options(state: &mut AppState) -> anyhow::Result<()> {
    apply_options(state, PlannerOptions::default())
}

/// Fordert das Beenden der Anwendung an.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}
