//! Handler für Kamera und Viewport.

use crate::app::AppState;
use glam::DVec2;

/// Verschiebt die Kamera um ein Delta in Grad.
pub fn pan(state: &mut AppState, delta: DVec2) {
    state.camera.pan(delta);
}

/// Zoomt stufenweise.
pub fn zoom(state: &mut AppState, steps: f64) {
    state.camera.zoom_by(steps);
}

/// Aktualisiert die Viewport-Größe.
pub fn set_viewport_size(state: &mut AppState, size: [f64; 2]) {
    state.camera.viewport_size = size;
}
