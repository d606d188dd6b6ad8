//! Trip-Editor: spiegelt die Modus-Übergänge der Karte in die beiden
//! Halte-Slots (Abfahrt, Ankunft) des Fahrt-Formulars.

use super::map_edit::{DrawingToolFactory, MapFeatureController, ModeTransition, ModeTransitions};
use crate::core::{Feature, MapCamera, TripStopSlot, TripStopsPayload};

/// Besitzt den Map-Feature-Controller und ist einziger Abonnent seiner Übergänge.
pub struct TripStopsEditor {
    map: MapFeatureController,
    transitions: ModeTransitions,
    departure: Option<Feature>,
    arrival: Option<Feature>,
}

impl TripStopsEditor {
    /// Erstellt einen leeren Editor (beide Slots frei).
    pub fn new(tool_factory: DrawingToolFactory) -> Self {
        let (map, transitions) = MapFeatureController::new(tool_factory);
        Self {
            map,
            transitions,
            departure: None,
            arrival: None,
        }
    }

    /// Lesender Zugriff auf den Map-Controller
    pub fn map(&self) -> &MapFeatureController {
        &self.map
    }

    /// Schreibender Zugriff auf den Map-Controller (Werkzeug-Gesten).
    /// Danach `sync()` aufrufen.
    pub fn map_mut(&mut self) -> &mut MapFeatureController {
        &mut self.map
    }

    /// Belegung eines Slots
    pub fn slot(&self, slot: TripStopSlot) -> Option<&Feature> {
        match slot {
            TripStopSlot::Departure => self.departure.as_ref(),
            TripStopSlot::Arrival => self.arrival.as_ref(),
        }
    }

    fn slot_mut(&mut self, slot: TripStopSlot) -> &mut Option<Feature> {
        match slot {
            TripStopSlot::Departure => &mut self.departure,
            TripStopSlot::Arrival => &mut self.arrival,
        }
    }

    /// Zeichnen ist nur möglich, solange ein Slot frei ist.
    pub fn can_draw(&self) -> bool {
        self.departure.is_none() || self.arrival.is_none()
    }

    /// Startet das Zeichnen eines neuen Haltebereichs.
    /// Gibt `false` zurück, wenn beide Slots belegt sind.
    pub fn start_drawing(&mut self) -> bool {
        if !self.can_draw() {
            log::debug!("Beide Halte-Slots belegt, Zeichnen abgelehnt");
            return false;
        }
        self.map.draw_feature();
        self.sync();
        true
    }

    /// Lädt eine gespeicherte Fahrt: beide Slots werden gesetzt und an die Karte übergeben.
    pub fn load_existing(&mut self, departure: Feature, arrival: Feature) -> anyhow::Result<()> {
        self.map
            .add_features(vec![departure.clone(), arrival.clone()])?;
        self.departure = Some(departure);
        self.arrival = Some(arrival);
        Ok(())
    }

    /// Entfernt den Haltebereich eines Slots (Karte und Formular).
    pub fn remove_stop(&mut self, slot: TripStopSlot) -> Option<Feature> {
        let removed = self.slot_mut(slot).take()?;
        self.map.remove_feature(&removed.id);
        self.sync();
        Some(removed)
    }

    /// Zoomt auf den Haltebereich eines Slots.
    pub fn zoom_to_stop(&self, slot: TripStopSlot, camera: &mut dyn MapCamera, padding: f64) -> bool {
        match self.slot(slot) {
            Some(feature) => self.map.zoom_to_feature(&feature.id, camera, padding),
            None => false,
        }
    }

    /// Verarbeitet Werkzeug-Events und Modus-Übergänge, gleicht die Slots ab.
    /// Gibt die verarbeiteten Übergänge zurück.
    pub fn sync(&mut self) -> Vec<ModeTransition> {
        self.map.process_tool_events();

        let mut seen = Vec::new();
        while let Ok(transition) = self.transitions.try_recv() {
            if transition.finished_drawing() {
                self.assign_newest_feature();
            }
            seen.push(transition);
        }

        self.refresh_slots();
        seen
    }

    /// Formular-Grenze: ein Feature oder nichts pro Slot.
    pub fn to_payload(&self) -> TripStopsPayload {
        TripStopsPayload {
            departure_stop: self.departure.clone(),
            arrival_stop: self.arrival.clone(),
        }
    }

    fn is_assigned(&self, id: &str) -> bool {
        TripStopSlot::ORDER
            .iter()
            .any(|&slot| self.slot(slot).is_some_and(|f| f.id == id))
    }

    fn assign_newest_feature(&mut self) {
        let Some(feature) = self
            .map
            .features()
            .rev()
            .find(|f| !self.is_assigned(&f.id))
            .cloned()
        else {
            return;
        };

        let Some(slot) = TripStopSlot::ORDER
            .into_iter()
            .find(|&slot| self.slot(slot).is_none())
        else {
            log::warn!(
                "Feature '{}' gezeichnet, aber beide Slots sind belegt",
                feature.id
            );
            return;
        };

        log::info!("Haltebereich '{}' → {:?}", feature.id, slot);
        *self.slot_mut(slot) = Some(feature);
    }

    /// Übernimmt geänderte Geometrien, leert Slots gelöschter Features.
    fn refresh_slots(&mut self) {
        for slot in TripStopSlot::ORDER {
            let Some(id) = self.slot(slot).map(|f| f.id.clone()) else {
                continue;
            };
            let fresh = self.map.feature(&id).cloned();
            if fresh.is_none() {
                log::info!("Haltebereich '{}' gelöscht, {:?} geleert", id, slot);
            }
            *self.slot_mut(slot) = fresh;
        }
    }
}
