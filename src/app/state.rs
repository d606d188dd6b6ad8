//! Application State: zentrale Datenhaltung.

use super::data_view::{stop_places_view, TableViewState, ViewConfig, VisibleSlice};
use super::map_edit::{DrawingToolFactory, PolygonDrawTool};
use super::search::{LocalSearch, SearchContext, SearchRegistry, SearchSession, SharedSearchFunction};
use super::trip_editor::TripStopsEditor;
use super::CommandLog;
use crate::core::{MapView, StopPlace};
use crate::shared::PlannerOptions;
use std::path::PathBuf;
use std::sync::Arc;

/// Haltestellen-Katalog mit Tabellen- und Suchzustand
pub struct StopPlacesState {
    /// Geladene Haltestellen (Reihenfolge wie geliefert)
    pub items: Vec<StopPlace>,
    /// Gesamtanzahl laut Server (None = nur lokale Daten)
    pub server_total: Option<usize>,
    /// View-Konfiguration der Tabelle
    pub view: ViewConfig<StopPlace>,
    /// Sortierung und Paginierung
    pub table: TableViewState,
    /// Suchzustand (Begriff, Treffer, Auswahl, Filter)
    pub search: SearchSession<StopPlace>,
}

impl StopPlacesState {
    /// Erstellt einen leeren Katalog.
    pub fn new(options: &PlannerOptions) -> Self {
        Self::with_view(stop_places_view(), options)
    }

    /// Erstellt einen leeren Katalog für eine bestimmte Ansicht.
    ///
    /// Die Suche startet im Kontext der Ansicht.
    pub fn with_view(view: ViewConfig<StopPlace>, options: &PlannerOptions) -> Self {
        let table = view.initial_table_state(options.rows_per_page);
        let mut search = SearchSession::new(SearchRegistry::new(), options.search_debounce());
        search.set_active_context(view.search_context);
        Self {
            items: Vec::new(),
            server_total: None,
            view,
            table,
            search,
        }
    }

    /// Ersetzt den Katalog und registriert eine lokale Suche für beide Kontexte.
    pub fn load(&mut self, items: Vec<StopPlace>, server_total: Option<usize>) {
        let search: SharedSearchFunction<StopPlace> =
            Arc::new(LocalSearch::new(self.view.search_items(&items)));
        self.search.register(SearchContext::Data, Some(search.clone()));
        self.search.register(SearchContext::Map, Some(search));
        self.search.clear();
        self.items = items;
        self.server_total = server_total;
        self.table.reset_page();
        log::info!("{} Haltestellen geladen", self.items.len());
    }

    /// Sichtbare Tabellenzeilen der aktuellen Seite.
    pub fn visible(&self) -> VisibleSlice<'_, StopPlace> {
        self.view
            .visible_slice(&self.items, self.server_total, &self.search, &self.table)
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Fahrt-Formular mit Karten-Editor für die Haltebereiche
    pub trip_editor: TripStopsEditor,
    /// Haltestellen-Tabelle und Suche
    pub stop_places: StopPlacesState,
    /// Karten-Kamera
    pub camera: MapView,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: PlannerOptions,
    /// Speicherort der Optionen
    pub options_path: PathBuf,
    /// Signalisiert dem Host, die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(PlannerOptions::default())
    }

    /// Erstellt einen App-State mit gegebenen Optionen und Polygon-Werkzeug.
    pub fn with_options(options: PlannerOptions) -> Self {
        Self::with_tool_factory(options, PolygonDrawTool::factory())
    }

    /// Erstellt einen App-State mit eigener Werkzeug-Fabrik (z.B. Karten-Engine-Adapter).
    pub fn with_tool_factory(options: PlannerOptions, tool_factory: DrawingToolFactory) -> Self {
        Self {
            trip_editor: TripStopsEditor::new(tool_factory),
            stop_places: StopPlacesState::new(&options),
            camera: MapView::default(),
            command_log: CommandLog::new(),
            options,
            options_path: PlannerOptions::config_path(),
            should_exit: false,
        }
    }

    /// Anzahl der Features auf der Karte (für UI-Anzeige)
    pub fn feature_count(&self) -> usize {
        self.trip_editor.map().feature_count()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
