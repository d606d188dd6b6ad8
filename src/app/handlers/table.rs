//! Handler für Sortierung und Paginierung der Haltestellen-Tabelle.

use crate::app::AppState;

/// Sortiert nach Spalte; derselbe Spaltenkopf kehrt die Richtung um.
pub fn sort_by(state: &mut AppState, column: &str) {
    state.stop_places.table.sort_by(column);
}

/// Wechselt die Seite, begrenzt auf die letzte vorhandene Seite.
pub fn set_page(state: &mut AppState, page: usize) {
    let total = state.stop_places.visible().current_total_for_table;
    let table = &mut state.stop_places.table;
    table.set_page(page);
    table.clamp_page(total);
}

/// Zurück auf die erste Seite.
pub fn reset_page(state: &mut AppState) {
    state.stop_places.table.reset_page();
}

/// Setzt die Seitengröße.
pub fn set_rows_per_page(state: &mut AppState, rows: usize) {
    state.stop_places.table.set_rows_per_page(rows);
}
