//! Editierbare Karte: Polygon-Features und Modus-Zustandsmaschine.
//!
//! Der `MapFeatureController` verwaltet die Features, das Zeichenwerkzeug
//! reicht Benutzer-Gesten als `DrawEvent`s herein.

mod controller;
/// Zeichenwerkzeug-Trait und eingebautes Polygon-Werkzeug.
pub mod draw_tool;
mod mode;


pub use controller::{MapFeatureController, ModeTransitions};
pub use draw_tool::{DrawEvent, DrawEventSender, DrawingTool, DrawingToolFactory, PolygonDrawTool};
pub use mode::{EditMode, ModeTransition};
