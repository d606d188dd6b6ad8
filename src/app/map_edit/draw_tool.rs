//! Zeichenwerkzeug-Schnittstelle und eingebautes Polygon-Werkzeug.
//!
//! Das Werkzeug meldet Benutzer-Gesten als `DrawEvent`s über einen Kanal an
//! den `MapFeatureController`. Programmatische Änderungen (`add`, `delete`)
//! erzeugen keine Events.

use crate::core::{Feature, FeatureId, Geometry};
use glam::DVec2;
use indexmap::IndexMap;
use tokio::sync::mpsc::UnboundedSender;

/// Die vier Event-Arten des Zeichenwerkzeugs.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawEvent {
    /// Feature(s) fertig gezeichnet
    Created(Vec<Feature>),
    /// Geometrie geändert (Vertex verschoben)
    Updated(Vec<Feature>),
    /// Feature(s) vom Benutzer gelöscht
    Deleted(Vec<Feature>),
    /// Selektion geändert (leer, eins oder mehrere)
    SelectionChanged(Vec<Feature>),
}

/// Rückkanal vom Werkzeug zum Controller.
pub type DrawEventSender = UnboundedSender<DrawEvent>;

/// Erzeugt das Werkzeug beim ersten `draw_feature()`.
pub type DrawingToolFactory = Box<dyn FnMut(DrawEventSender) -> Box<dyn DrawingTool> + Send>;

/// Schnittstelle für Zeichenwerkzeuge (eingebaut oder Adapter zur Karten-Engine).
///
/// Die Pflicht-Methoden werden vom Controller aufgerufen, die Gesten-Methoden
/// vom Host (Mausklick, Enter, Entf).
pub trait DrawingTool: Send {
    /// In den Polygon-Zeichenmodus wechseln.
    fn start_polygon(&mut self);

    /// Feature ohne `Created`-Event registrieren.
    fn add(&mut self, feature: Feature);

    /// Feature ohne `Deleted`-Event entfernen.
    fn delete(&mut self, id: &str);

    /// Zeichnet das Werkzeug gerade ein Polygon?
    fn is_drawing(&self) -> bool;

    /// Klick auf die Karte: Vertex setzen (Zeichnen) oder Feature treffen (Selektion).
    fn on_click(&mut self, _pos: DVec2) {}

    /// Aktuelles Polygon abschließen (Enter / Doppelklick).
    fn finish(&mut self) {}

    /// Zeichnen abbrechen (Escape).
    fn cancel(&mut self) {}

    /// Selektion programmatisch setzen (z.B. Mehrfachauswahl per Shift).
    fn select(&mut self, _ids: &[FeatureId]) {}

    /// Vertex eines Polygons verschieben.
    fn move_vertex(&mut self, _id: &str, _index: usize, _pos: DVec2) {}

    /// Selektierte Features löschen (Entf).
    fn delete_selected(&mut self) {}
}

/// In-Memory-Polygonwerkzeug nach dem Vorbild gängiger Web-Draw-Plugins.
pub struct PolygonDrawTool {
    sink: DrawEventSender,
    features: IndexMap<FeatureId, Feature>,
    selected: Vec<FeatureId>,
    drawing: bool,
    pending_ring: Vec<DVec2>,
    next_id: u64,
}

impl PolygonDrawTool {
    /// Mindestanzahl Vertices für ein gültiges Polygon.
    pub const MIN_VERTICES: usize = 3;

    /// Erstellt ein Werkzeug, das Events an `sink` sendet.
    pub fn new(sink: DrawEventSender) -> Self {
        Self {
            sink,
            features: IndexMap::new(),
            selected: Vec::new(),
            drawing: false,
            pending_ring: Vec::new(),
            next_id: 1,
        }
    }

    /// Factory für `MapFeatureController::new`.
    pub fn factory() -> DrawingToolFactory {
        Box::new(|sink: DrawEventSender| {
            Box::new(PolygonDrawTool::new(sink)) as Box<dyn DrawingTool>
        })
    }

    /// Anzahl registrierter Features.
    pub fn feature_count(&self) -> usize {
        self.features.len()
    }

    fn emit(&self, event: DrawEvent) {
        if self.sink.send(event).is_err() {
            log::debug!("DrawEvent verworfen: Controller nicht mehr vorhanden");
        }
    }

    fn selected_features(&self) -> Vec<Feature> {
        self.selected
            .iter()
            .filter_map(|id| self.features.get(id).cloned())
            .collect()
    }

    fn set_selection(&mut self, ids: Vec<FeatureId>) {
        if ids == self.selected {
            return;
        }
        self.selected = ids;
        self.emit(DrawEvent::SelectionChanged(self.selected_features()));
    }

    fn generate_id(&mut self) -> FeatureId {
        loop {
            let id = format!("draw-{}", self.next_id);
            self.next_id += 1;
            if !self.features.contains_key(&id) {
                return id;
            }
        }
    }
}

impl DrawingTool for PolygonDrawTool {
    fn start_polygon(&mut self) {
        self.drawing = true;
        self.pending_ring.clear();
        // Selektion still aufheben, sonst fällt der Controller zurück auf Viewing
        self.selected.clear();
    }

    fn add(&mut self, feature: Feature) {
        self.features.insert(feature.id.clone(), feature);
    }

    fn delete(&mut self, id: &str) {
        self.features.shift_remove(id);
        self.selected.retain(|s| s != id);
    }

    fn is_drawing(&self) -> bool {
        self.drawing
    }

    fn on_click(&mut self, pos: DVec2) {
        if self.drawing {
            self.pending_ring.push(pos);
            return;
        }

        let hit = self
            .features
            .values()
            .rev()
            .find(|f| f.outer_ring().is_some_and(|ring| point_in_ring(pos, ring)))
            .map(|f| f.id.clone());
        self.set_selection(hit.into_iter().collect());
    }

    fn finish(&mut self) {
        if !self.drawing {
            return;
        }
        if self.pending_ring.len() < Self::MIN_VERTICES {
            log::debug!(
                "Polygon mit {} Vertices verworfen",
                self.pending_ring.len()
            );
            self.cancel();
            return;
        }

        let mut ring = std::mem::take(&mut self.pending_ring);
        ring.push(ring[0]);
        let id = self.generate_id();
        let feature = Feature::new(id.clone(), Geometry::Polygon(vec![ring]));

        self.drawing = false;
        self.features.insert(id.clone(), feature.clone());
        self.emit(DrawEvent::Created(vec![feature]));
        self.set_selection(vec![id]);
    }

    fn cancel(&mut self) {
        self.drawing = false;
        self.pending_ring.clear();
    }

    fn select(&mut self, ids: &[FeatureId]) {
        let ids = ids
            .iter()
            .filter(|id| self.features.contains_key(*id))
            .cloned()
            .collect();
        self.set_selection(ids);
    }

    fn move_vertex(&mut self, id: &str, index: usize, pos: DVec2) {
        let Some(feature) = self.features.get_mut(id) else {
            return;
        };
        let Geometry::Polygon(rings) = &mut feature.geometry else {
            return;
        };
        let Some(ring) = rings.first_mut() else {
            return;
        };
        if index >= ring.len() {
            return;
        }
        let last = ring.len() - 1;
        ring[index] = pos;
        // Geschlossener Ring: erster und letzter Vertex bleiben identisch
        if index == 0 {
            ring[last] = pos;
        } else if index == last {
            ring[0] = pos;
        }
        let updated = feature.clone();
        self.emit(DrawEvent::Updated(vec![updated]));
    }

    fn delete_selected(&mut self) {
        if self.selected.is_empty() {
            return;
        }
        let removed: Vec<Feature> = std::mem::take(&mut self.selected)
            .iter()
            .filter_map(|id| self.features.shift_remove(id))
            .collect();
        self.emit(DrawEvent::Deleted(removed));
        self.emit(DrawEvent::SelectionChanged(Vec::new()));
    }
}

/// Prüft ob ein Punkt innerhalb eines Rings liegt (Ray-Casting, Rand zählt als innen).
pub fn point_in_ring(point: DVec2, ring: &[DVec2]) -> bool {
    if ring.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut previous = ring[ring.len() - 1];

    for &current in ring {
        if point_on_segment(point, previous, current) {
            return true;
        }

        let intersect = ((current.y > point.y) != (previous.y > point.y))
            && (point.x
                < (previous.x - current.x) * (point.y - current.y) / (previous.y - current.y)
                    + current.x);
        if intersect {
            inside = !inside;
        }

        previous = current;
    }

    inside
}

fn point_on_segment(point: DVec2, a: DVec2, b: DVec2) -> bool {
    let ab = b - a;
    let ap = point - a;
    if ab.perp_dot(ap).abs() > 1e-12 {
        return false;
    }
    let dot = ap.dot(ab);
    dot >= 0.0 && dot <= ab.length_squared()
}
