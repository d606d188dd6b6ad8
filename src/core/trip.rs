//! Fahrgemeinschafts-Fahrten und die Übergabe-Struktur des Trip-Formulars.

use super::Feature;
use serde::{Deserialize, Serialize};

/// Status einer Fahrt. Dient als Filter-Schlüssel der Fahrten-Ansicht.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripStatus {
    /// Noch nicht veröffentlicht
    Draft,
    /// Buchbar
    Published,
    /// Abgesagt
    Cancelled,
}

impl TripStatus {
    /// Alle Varianten in Anzeige-Reihenfolge.
    pub const ALL: [TripStatus; 3] = [
        TripStatus::Draft,
        TripStatus::Published,
        TripStatus::Cancelled,
    ];

    /// Filter-Schlüssel
    pub fn as_key(self) -> &'static str {
        match self {
            TripStatus::Draft => "draft",
            TripStatus::Published => "published",
            TripStatus::Cancelled => "cancelled",
        }
    }

    /// Anzeigename
    pub fn label(self) -> &'static str {
        match self {
            TripStatus::Draft => "Entwurf",
            TripStatus::Published => "Veröffentlicht",
            TripStatus::Cancelled => "Abgesagt",
        }
    }
}

/// Geplante Fahrt mit Abfahrts- und Ankunftsbereich.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    /// ID
    pub id: String,
    /// Anzeigename
    pub name: String,
    /// Status
    pub status: TripStatus,
    /// Abfahrtszeit (ISO-8601, vom Server geliefert)
    pub departure_time: String,
    /// Freie Sitzplätze
    pub seats: u32,
    /// Gespeicherte Haltebereiche
    #[serde(default)]
    pub stops: TripStopsPayload,
}

/// Die beiden benannten Halte-Slots einer Fahrt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TripStopSlot {
    /// Abfahrtsbereich
    Departure,
    /// Ankunftsbereich
    Arrival,
}

impl TripStopSlot {
    /// Beide Slots in Füll-Reihenfolge.
    pub const ORDER: [TripStopSlot; 2] = [TripStopSlot::Departure, TripStopSlot::Arrival];
}

/// Formular-Grenze: ein `Feature` oder nichts pro Slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripStopsPayload {
    /// Abfahrtsbereich
    pub departure_stop: Option<Feature>,
    /// Ankunftsbereich
    pub arrival_stop: Option<Feature>,
}

impl TripStopsPayload {
    /// Gibt `true` zurück, wenn beide Slots belegt sind.
    pub fn is_complete(&self) -> bool {
        self.departure_stop.is_some() && self.arrival_stop.is_some()
    }
}
