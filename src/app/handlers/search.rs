//! Handler für Suche und Filter der Haltestellen-Ansicht.
//!
//! Begriffe und Filter lösen Such-Tasks aus; diese Handler müssen daher
//! innerhalb einer Tokio-Runtime laufen.

use crate::app::search::{fly_to_result, SearchContext};
use crate::app::AppState;

/// Übernimmt eine Tastatureingabe (Debounce).
pub fn set_query(state: &mut AppState, query: &str) {
    state.stop_places.search.on_query_input(query);
}

/// Sucht sofort mit dem aktuellen Begriff.
pub fn submit(state: &mut AppState) {
    state.stop_places.search.submit_search();
}

/// Leert Begriff, Treffer und Auswahl.
pub fn clear(state: &mut AppState) {
    state.stop_places.search.clear();
}

/// Übernimmt einen Treffer als Tabellen-Auswahl.
pub fn select_result(state: &mut AppState, index: usize) {
    let search = &mut state.stop_places.search;
    match search.results().get(index).cloned() {
        Some(item) => {
            log::debug!("Treffer '{}' ausgewählt", item.name);
            search.select_item(item);
        }
        None => log::warn!("Treffer #{} existiert nicht", index),
    }
}

/// Fliegt die Kamera zu einem Treffer.
pub fn fly_to(state: &mut AppState, index: usize) {
    let Some(item) = state.stop_places.search.results().get(index) else {
        log::warn!("Treffer #{} existiert nicht", index);
        return;
    };
    fly_to_result(
        item,
        &mut state.camera,
        state.options.fly_to_zoom,
        state.options.fly_to_duration(),
    );
}

/// Hebt die Autocomplete-Auswahl auf.
pub fn clear_selection(state: &mut AppState) {
    state.stop_places.search.clear_selection();
}

/// Wechselt den Such-Kontext.
pub fn set_context(state: &mut AppState, context: SearchContext) {
    state.stop_places.search.set_active_context(context);
}

/// Schaltet einen Filter des aktiven Kontexts um.
pub fn toggle_filter(state: &mut AppState, key: &str) {
    let active = state.stop_places.search.toggle_filter(key);
    log::debug!("Filter '{}' {}", key, if active { "aktiv" } else { "inaktiv" });
}

/// Leert die Filter des aktiven Kontexts.
pub fn clear_filters(state: &mut AppState) {
    state.stop_places.search.clear_filters();
}
