//! Bearbeitungsmodus der Karte und Modus-Übergänge.

/// Globaler Modus des Map-Feature-Controllers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    /// Kein aktives Zeichnen/Bearbeiten
    #[default]
    Viewing,
    /// Polygon-Werkzeug aktiv, wartet auf Abschluss
    Drawing,
    /// Genau ein Feature selektiert
    Editing,
}

/// Übergang `prev_mode → mode`, wird an genau einen Abonnenten gemeldet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeTransition {
    /// Modus vor dem Übergang
    pub prev_mode: EditMode,
    /// Neuer Modus
    pub mode: EditMode,
}

impl ModeTransition {
    /// Ein frisch gezeichnetes Feature wurde abgeschlossen und selektiert.
    pub fn finished_drawing(&self) -> bool {
        self.prev_mode == EditMode::Drawing && self.mode == EditMode::Editing
    }
}
