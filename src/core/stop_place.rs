//! Haltestellen (Stop Places) als Domänenobjekte der Tabellenansicht.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Verkehrsmittel einer Haltestelle. Dient als Filter-Schlüssel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    /// Bus
    Bus,
    /// Zug
    Train,
    /// Straßenbahn
    Tram,
    /// U-Bahn
    Metro,
    /// Fähre / Boot
    Water,
    /// Fernbus
    Coach,
}

impl TransportMode {
    /// Alle Varianten in Anzeige-Reihenfolge.
    pub const ALL: [TransportMode; 6] = [
        TransportMode::Bus,
        TransportMode::Train,
        TransportMode::Tram,
        TransportMode::Metro,
        TransportMode::Water,
        TransportMode::Coach,
    ];

    /// Filter-Schlüssel (identisch zur serde-Darstellung)
    pub fn as_key(self) -> &'static str {
        match self {
            TransportMode::Bus => "bus",
            TransportMode::Train => "train",
            TransportMode::Tram => "tram",
            TransportMode::Metro => "metro",
            TransportMode::Water => "water",
            TransportMode::Coach => "coach",
        }
    }

    /// Anzeigename für Filter-Chips
    pub fn label(self) -> &'static str {
        match self {
            TransportMode::Bus => "Bus",
            TransportMode::Train => "Zug",
            TransportMode::Tram => "Straßenbahn",
            TransportMode::Metro => "U-Bahn",
            TransportMode::Water => "Fähre",
            TransportMode::Coach => "Fernbus",
        }
    }
}

/// Haltestelle mit optionaler Position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopPlace {
    /// Stabile ID (z.B. `NSR:StopPlace:337`)
    pub id: String,
    /// Name
    pub name: String,
    /// Verkehrsmittel
    pub transport_mode: TransportMode,
    /// Position `[lon, lat]`
    #[serde(default)]
    pub location: Option<DVec2>,
}

impl StopPlace {
    /// Erstellt eine Haltestelle ohne Position.
    pub fn new(id: &str, name: &str, transport_mode: TransportMode) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            transport_mode,
            location: None,
        }
    }

    /// Setzt die Position (Builder-Stil).
    pub fn at(mut self, lon: f64, lat: f64) -> Self {
        self.location = Some(DVec2::new(lon, lat));
        self
    }
}
