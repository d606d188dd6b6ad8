//! Application-Layer: Controller, State, Events und Feature-Module.

pub mod command_log;
pub mod controller;
pub mod data_view;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod map_edit;
pub mod search;
/// Application State
///
/// Hält Fahrt-Editor, Haltestellen-Katalog, Kamera und Optionen.
pub mod state;
pub mod trip_editor;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use map_edit::{EditMode, MapFeatureController, ModeTransition};
pub use search::{SearchContext, SearchResultItem, SearchSession};
pub use state::{AppState, StopPlacesState};
pub use trip_editor::TripStopsEditor;
