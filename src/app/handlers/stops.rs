//! Handler für Haltebereiche: Zeichnen, Bearbeiten, Entfernen, Zoomen.
//!
//! Nach jeder Werkzeug-Geste gleicht `TripStopsEditor::sync()` Modus und
//! Formular-Slots ab.

use crate::app::map_edit::draw_tool::point_in_ring;
use crate::app::map_edit::DrawingTool;
use crate::app::AppState;
use crate::core::{Feature, TripStopSlot};
use glam::DVec2;

fn with_tool(state: &mut AppState, action: impl FnOnce(&mut (dyn DrawingTool + 'static))) {
    match state.trip_editor.map_mut().tool_mut() {
        Some(tool) => action(tool),
        None => log::debug!("Kein Zeichenwerkzeug vorhanden, Geste ignoriert"),
    }
    state.trip_editor.sync();
}

/// Startet das Zeichnen eines neuen Haltebereichs.
pub fn start_drawing(state: &mut AppState) {
    state.trip_editor.start_drawing();
}

/// Hängt einen Eckpunkt an das laufende Polygon an.
pub fn draw_click(state: &mut AppState, pos: DVec2) {
    with_tool(state, |tool| tool.on_click(pos));
}

/// Selektiert das oberste Feature unter `pos`; ohne Treffer wird die Auswahl aufgehoben.
pub fn select_at(state: &mut AppState, pos: DVec2) {
    let hit: Vec<String> = state
        .trip_editor
        .map()
        .features()
        .rev()
        .find(|f| f.outer_ring().is_some_and(|ring| point_in_ring(pos, ring)))
        .map(|f| f.id.clone())
        .into_iter()
        .collect();
    with_tool(state, |tool| tool.select(&hit));
}

/// Schließt das laufende Polygon ab.
pub fn finish_drawing(state: &mut AppState) {
    with_tool(state, |tool| tool.finish());
}

/// Verwirft das laufende Polygon.
pub fn cancel_drawing(state: &mut AppState) {
    with_tool(state, |tool| tool.cancel());
}

/// Verschiebt einen Eckpunkt.
pub fn move_vertex(state: &mut AppState, feature_id: &str, index: usize, pos: DVec2) {
    with_tool(state, |tool| tool.move_vertex(feature_id, index, pos));
}

/// Löscht die selektierten Features.
pub fn delete_selected(state: &mut AppState) {
    with_tool(state, |tool| tool.delete_selected());
}

/// Leert einen Slot und nimmt sein Feature von der Karte.
pub fn remove_stop(state: &mut AppState, slot: TripStopSlot) {
    if state.trip_editor.remove_stop(slot).is_none() {
        log::debug!("{:?} ist bereits leer", slot);
    }
}

/// Zoomt die Kamera auf den Haltebereich eines Slots.
pub fn zoom_to_stop(state: &mut AppState, slot: TripStopSlot) {
    let padding = state.options.fit_bounds_padding_px;
    if !state.trip_editor.zoom_to_stop(slot, &mut state.camera, padding) {
        log::debug!("Kein Haltebereich für {:?}, Kamera unverändert", slot);
    }
}

/// Lädt die Haltebereiche einer gespeicherten Fahrt.
pub fn load_trip_stops(
    state: &mut AppState,
    departure: Feature,
    arrival: Feature,
) -> anyhow::Result<()> {
    state.trip_editor.load_existing(departure, arrival)?;
    state.trip_editor.sync();
    Ok(())
}
