//! Carpool-Planer Kern.
//! Editierbare Haltebereiche, Such-Registry und Tabellen-Pipeline als Library
//! exportiert für Hosts und Tests.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, EditMode, SearchContext, SearchResultItem,
    StopPlacesState, TripStopsEditor,
};
pub use core::{
    Feature, FeatureId, GeoBounds, Geometry, MapCamera, MapView, StopPlace, TransportMode, Trip,
    TripStatus, TripStopSlot, TripStopsPayload,
};
pub use shared::PlannerOptions;
