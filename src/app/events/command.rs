use crate::app::search::SearchContext;
use crate::core::{Feature, TripStopSlot};
use crate::shared::PlannerOptions;
use glam::DVec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    // === Haltebereiche ===
    /// Zeichenmodus starten (nur bei freiem Slot)
    StartDrawingStop,
    /// Eckpunkt an das laufende Polygon anhängen
    DrawToolClick { pos: DVec2 },
    /// Feature unter dem Klickpunkt selektieren (oder Auswahl aufheben)
    SelectFeatureAt { pos: DVec2 },
    /// Laufendes Polygon abschließen
    FinishDrawing,
    /// Laufendes Polygon verwerfen
    CancelDrawing,
    /// Eckpunkt verschieben
    MoveVertex {
        feature_id: String,
        index: usize,
        pos: DVec2,
    },
    /// Selektierte Features löschen
    DeleteSelectedFeatures,
    /// Slot leeren und Feature von der Karte nehmen
    RemoveStop { slot: TripStopSlot },
    /// Kamera auf den Haltebereich eines Slots
    ZoomToStop { slot: TripStopSlot },
    /// Beide Haltebereiche einer gespeicherten Fahrt laden
    LoadTripStops { departure: Feature, arrival: Feature },

    // === Suche ===
    /// Suchbegriff setzen (Debounce)
    SetSearchQuery { query: String },
    /// Suche sofort ausführen
    SubmitSearch,
    /// Begriff, Treffer und Auswahl leeren
    ClearSearch,
    /// Treffer als Tabellen-Auswahl übernehmen
    SelectSearchResult { index: usize },
    /// Zu einem Treffer fliegen
    FlyToSearchResult { index: usize },
    /// Auswahl aufheben
    ClearSearchSelection,
    /// Such-Kontext setzen
    SetSearchContext { context: SearchContext },
    /// Filter umschalten
    ToggleFilter { key: String },
    /// Filter leeren
    ClearFilters,

    // === Tabelle ===
    /// Sortierung nach Spalte (Wiederholung kehrt die Richtung um)
    SortBy { column: String },
    /// Seite setzen
    SetPage { page: usize },
    /// Auf erste Seite zurück
    ResetPage,
    /// Seitengröße setzen
    SetRowsPerPage { rows: usize },

    // === Kamera ===
    /// Kamera verschieben
    PanCamera { delta: DVec2 },
    /// Kamera zoomen
    ZoomCamera { steps: f64 },
    /// Viewport-Größe setzen
    SetViewportSize { size: [f64; 2] },

    // === Optionen & Anwendung ===
    /// Optionen übernehmen und speichern
    ApplyOptions { options: PlannerOptions },
    /// Standard-Optionen übernehmen und speichern
    ResetOptions,
    /// Anwendung beenden
    RequestExit,
}
