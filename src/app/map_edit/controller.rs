//! Map-Feature-Controller: besitzt die gezeichneten Polygone und die
//! Modus-Zustandsmaschine `Viewing → Drawing → Editing`.

use super::draw_tool::{DrawEvent, DrawEventSender, DrawingTool, DrawingToolFactory};
use super::mode::{EditMode, ModeTransition};
use crate::core::{Feature, FeatureId, MapCamera};
use indexmap::IndexMap;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Empfänger der Modus-Übergänge (genau ein Abonnent).
pub type ModeTransitions = UnboundedReceiver<ModeTransition>;

/// Capability-Objekt für den Eltern-Dialog (Trip-Formular).
///
/// Der Eltern-Dialog hält die einzige Referenz. Übergänge werden über den bei
/// der Konstruktion zurückgegebenen `ModeTransitions`-Kanal gemeldet.
pub struct MapFeatureController {
    mode: EditMode,
    previous_mode: EditMode,
    features: IndexMap<FeatureId, Feature>,
    current_feature: Option<Feature>,
    tool: Option<Box<dyn DrawingTool>>,
    tool_factory: DrawingToolFactory,
    tools_created: usize,
    seeded: bool,
    draw_tx: DrawEventSender,
    draw_rx: UnboundedReceiver<DrawEvent>,
    transition_tx: UnboundedSender<ModeTransition>,
}

impl MapFeatureController {
    /// Erstellt den Controller. Das Werkzeug wird erst beim ersten Bedarf gebaut.
    pub fn new(tool_factory: DrawingToolFactory) -> (Self, ModeTransitions) {
        let (draw_tx, draw_rx) = mpsc::unbounded_channel();
        let (transition_tx, transition_rx) = mpsc::unbounded_channel();
        let controller = Self {
            mode: EditMode::Viewing,
            previous_mode: EditMode::Viewing,
            features: IndexMap::new(),
            current_feature: None,
            tool: None,
            tool_factory,
            tools_created: 0,
            seeded: false,
            draw_tx,
            draw_rx,
            transition_tx,
        };
        (controller, transition_rx)
    }

    /// Aktueller Modus
    pub fn mode(&self) -> EditMode {
        self.mode
    }

    /// Modus vor dem letzten Übergang
    pub fn previous_mode(&self) -> EditMode {
        self.previous_mode
    }

    /// Anzahl verwalteter Features
    pub fn feature_count(&self) -> usize {
        self.features.len()
    }

    /// Feature per ID
    pub fn feature(&self, id: &str) -> Option<&Feature> {
        self.features.get(id)
    }

    /// Alle Features in Einfüge-Reihenfolge
    pub fn features(&self) -> impl DoubleEndedIterator<Item = &Feature> {
        self.features.values()
    }

    /// Wie oft die Factory ein Werkzeug gebaut hat (höchstens 1).
    pub fn tools_created(&self) -> usize {
        self.tools_created
    }

    /// Zugriff auf das Werkzeug für Benutzer-Gesten. `None` vor dem ersten Gebrauch.
    pub fn tool_mut(&mut self) -> Option<&mut (dyn DrawingTool + 'static)> {
        self.tool.as_deref_mut()
    }

    /// Genau ein selektiertes Feature, sonst `None`.
    pub fn current_feature(&self) -> Option<&Feature> {
        self.current_feature.as_ref()
    }

    /// Wechselt in den Zeichenmodus (Werkzeug wird beim ersten Aufruf gebaut).
    pub fn draw_feature(&mut self) {
        // start_polygon leert die Werkzeug-Auswahl ohne Event
        self.ensure_tool().start_polygon();
        self.current_feature = None;
        self.set_mode(EditMode::Drawing);
    }

    /// Übernimmt genau zwei vorhandene Features (Bearbeiten einer gespeicherten Fahrt).
    ///
    /// Umgeht den `Created`-Pfad. Darf pro Controller nur einmal aufgerufen werden.
    pub fn add_features(&mut self, features: Vec<Feature>) -> anyhow::Result<()> {
        if features.len() != 2 {
            anyhow::bail!(
                "add_features erwartet genau 2 Features (Abfahrt, Ankunft), erhalten: {}",
                features.len()
            );
        }
        if features[0].id == features[1].id {
            anyhow::bail!("add_features: doppelte Feature-ID '{}'", features[0].id);
        }
        if self.seeded {
            anyhow::bail!("add_features wurde bereits aufgerufen");
        }
        self.seeded = true;

        for feature in features {
            self.ensure_tool().add(feature.clone());
            self.features.insert(feature.id.clone(), feature);
        }
        log::debug!("{} Features übernommen", self.features.len());
        Ok(())
    }

    /// Entfernt ein Feature aus Controller und Werkzeug. Unbekannte IDs werden ignoriert.
    pub fn remove_feature(&mut self, id: &str) {
        if let Some(tool) = self.tool.as_deref_mut() {
            tool.delete(id);
        }
        if self.features.shift_remove(id).is_none() {
            log::debug!("remove_feature: unbekannte ID '{}'", id);
            return;
        }
        if self.current_feature.as_ref().is_some_and(|f| f.id == id) {
            self.current_feature = None;
        }
        if self.features.is_empty() {
            self.set_mode(EditMode::Viewing);
        }
    }

    /// Zoomt die Kamera auf die Bounding-Box des Polygons.
    ///
    /// Gibt `false` zurück (ohne Kamera-Aufruf), wenn die ID fehlt oder das
    /// Feature kein Polygon ist.
    pub fn zoom_to_feature(&self, id: &str, camera: &mut dyn MapCamera, padding: f64) -> bool {
        let Some(bounds) = self.features.get(id).and_then(Feature::polygon_bounds) else {
            return false;
        };
        camera.fit_bounds(bounds, padding);
        true
    }

    /// Verarbeitet alle vom Werkzeug gemeldeten Events. Gibt die Anzahl zurück.
    pub fn process_tool_events(&mut self) -> usize {
        let mut count = 0;
        while let Ok(event) = self.draw_rx.try_recv() {
            self.handle_draw_event(event);
            count += 1;
        }
        count
    }

    /// Wendet ein einzelnes Werkzeug-Event an.
    pub fn handle_draw_event(&mut self, event: DrawEvent) {
        match event {
            DrawEvent::Created(features) => {
                for feature in features {
                    log::debug!("Feature erstellt: {}", feature.id);
                    self.features.insert(feature.id.clone(), feature);
                }
            }
            DrawEvent::Updated(features) => {
                for feature in features {
                    if self.current_feature.as_ref().is_some_and(|f| f.id == feature.id) {
                        self.current_feature = Some(feature.clone());
                    }
                    self.features.insert(feature.id.clone(), feature);
                }
            }
            DrawEvent::Deleted(features) => {
                for feature in &features {
                    self.features.shift_remove(&feature.id);
                    if self.current_feature.as_ref().is_some_and(|f| f.id == feature.id) {
                        self.current_feature = None;
                    }
                }
                if self.features.is_empty() {
                    self.set_mode(EditMode::Viewing);
                }
            }
            DrawEvent::SelectionChanged(mut features) => {
                if features.len() == 1 {
                    self.current_feature = features.pop();
                    self.set_mode(EditMode::Editing);
                } else {
                    self.current_feature = None;
                    self.set_mode(EditMode::Viewing);
                }
            }
        }
    }

    fn ensure_tool(&mut self) -> &mut dyn DrawingTool {
        let tool = self.tool.get_or_insert_with(|| {
            self.tools_created += 1;
            log::debug!("Zeichenwerkzeug initialisiert");
            (self.tool_factory)(self.draw_tx.clone())
        });
        tool.as_mut()
    }

    fn set_mode(&mut self, mode: EditMode) {
        if mode == self.mode {
            return;
        }
        let transition = ModeTransition {
            prev_mode: self.mode,
            mode,
        };
        self.previous_mode = self.mode;
        self.mode = mode;
        log::debug!("Modus: {:?} → {:?}", transition.prev_mode, transition.mode);
        if self.transition_tx.send(transition).is_err() {
            log::debug!("Modus-Übergang ohne Abonnent verworfen");
        }
    }
}
