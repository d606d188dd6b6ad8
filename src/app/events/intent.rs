use crate::app::search::SearchContext;
use crate::core::{Trip, TripStopSlot};
use crate::shared::PlannerOptions;
use glam::DVec2;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    // ── Haltebereiche (Karte) ───────────────────────────────────
    /// "Haltebereich zeichnen" gedrückt
    DrawStopRequested,
    /// Klick auf die Karte (`[lon, lat]`)
    MapClicked { pos: DVec2 },
    /// Polygon abschließen (Doppelklick / Enter)
    FinishDrawingRequested,
    /// Zeichnen abbrechen (Escape)
    CancelDrawingRequested,
    /// Eckpunkt eines Polygons verschoben
    VertexDragged {
        feature_id: String,
        index: usize,
        pos: DVec2,
    },
    /// Entf-Taste auf selektiertem Polygon
    DeleteSelectedStopRequested,
    /// Haltebereich eines Slots im Formular entfernen
    RemoveStopRequested { slot: TripStopSlot },
    /// Auf den Haltebereich eines Slots zoomen
    ZoomToStopRequested { slot: TripStopSlot },
    /// Gespeicherte Fahrt zum Bearbeiten öffnen
    EditTripRequested { trip: Trip },

    // ── Suche ───────────────────────────────────────────────────
    /// Tastatureingabe im Suchfeld
    SearchQueryChanged { query: String },
    /// Suchknopf / Enter
    SearchSubmitted,
    /// Suchfeld geleert
    SearchCleared,
    /// Treffer aus der Autocomplete-Liste gewählt
    SearchResultSelected { index: usize },
    /// Autocomplete-Auswahl aufgehoben
    SearchSelectionCleared,
    /// Such-Kontext gewechselt (Karte / Tabelle)
    SearchContextChanged { context: SearchContext },
    /// Filter-Chip umgeschaltet
    FilterToggled { key: String },
    /// Alle Filter-Chips abgewählt
    FiltersCleared,

    // ── Tabelle ─────────────────────────────────────────────────
    /// Klick auf einen Spaltenkopf
    SortColumnClicked { column: String },
    /// Seite gewechselt (0-basiert)
    PageChanged { page: usize },
    /// Seitengröße gewählt
    RowsPerPageChanged { rows: usize },

    // ── Kamera ──────────────────────────────────────────────────
    /// Karte verschieben (Grad)
    CameraPan { delta: DVec2 },
    /// Zoomstufe ändern (negativ = heraus)
    CameraZoom { steps: f64 },
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f64; 2] },

    // ── Optionen & Anwendung ────────────────────────────────────
    /// Optionen übernehmen und speichern
    OptionsChanged { options: PlannerOptions },
    /// Optionen auf Standard zurücksetzen
    ResetOptionsRequested,
    /// Anwendung beenden
    ExitRequested,
}
