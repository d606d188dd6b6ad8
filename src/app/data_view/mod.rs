//! Generische Tabellen-Pipeline: Suche, Filter, Sortierung, Paginierung.

mod filters;
mod pipeline;
mod table;
/// View-Konfiguration (Spalten, Filter, Zugriffsfunktionen).
pub mod view_config;
pub mod views;


pub use filters::{apply_filters, FilterSet};
pub use pipeline::{compute_visible_slice, SliceRequest, VisibleSlice};
pub use table::{SortOrder, TableViewState};
pub use view_config::{Column, FilterOption, ViewConfig};
pub use views::{stop_places_view, trips_view};
