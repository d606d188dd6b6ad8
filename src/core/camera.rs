//! Karten-Kamera: `fit_bounds` und `fly_to`.
//!
//! Die eigentliche Karten-Engine ist extern; der Kern spricht sie über den
//! `MapCamera`-Trait an. `MapView` ist die In-Memory-Kamera für Host ohne
//! eigene Engine und für Tests.

use super::GeoBounds;
use glam::DVec2;
use std::time::Duration;

/// Steuer-Schnittstelle zur Karten-Kamera.
pub trait MapCamera {
    /// Kamera so setzen, dass `bounds` mit `padding` Pixeln Rand sichtbar ist.
    fn fit_bounds(&mut self, bounds: GeoBounds, padding: f64);

    /// Animierter Flug auf `center` mit Ziel-Zoom.
    fn fly_to(&mut self, center: DVec2, zoom: f64, duration: Duration);
}

/// Einfache Web-Karten-Kamera (Zentrum + Zoomstufe).
#[derive(Debug, Clone)]
pub struct MapView {
    /// Kartenzentrum `[lon, lat]`
    pub center: DVec2,
    /// Zoomstufe (0 = ganze Welt auf einer Kachel)
    pub zoom: f64,
    /// Viewport-Größe in Pixeln
    pub viewport_size: [f64; 2],
    /// Dauer der zuletzt angeforderten Animation
    pub last_animation: Option<Duration>,
}

impl MapView {
    /// Kachelgröße in Pixeln.
    pub const TILE_SIZE: f64 = 256.0;
    /// Minimale Zoomstufe.
    pub const ZOOM_MIN: f64 = 0.0;
    /// Maximale Zoomstufe.
    pub const ZOOM_MAX: f64 = 22.0;

    /// Erstellt eine Kamera mit Startposition.
    pub fn new(center: DVec2, zoom: f64) -> Self {
        Self {
            center,
            zoom: zoom.clamp(Self::ZOOM_MIN, Self::ZOOM_MAX),
            viewport_size: [1280.0, 720.0],
            last_animation: None,
        }
    }

    /// Verschiebt die Kamera (Pan, in Grad)
    pub fn pan(&mut self, delta: DVec2) {
        self.center += delta;
    }

    /// Ändert die Zoomstufe um `steps` (negativ = herauszoomen)
    pub fn zoom_by(&mut self, steps: f64) {
        self.zoom = (self.zoom + steps).clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
    }

    /// Pixel pro Grad bei der aktuellen Zoomstufe (äquirektanguläre Näherung).
    pub fn pixels_per_degree(&self) -> f64 {
        Self::TILE_SIZE * 2f64.powf(self.zoom) / 360.0
    }

    /// Zoomstufe, bei der `bounds` inkl. Rand in den Viewport passt.
    pub fn zoom_for_bounds(&self, bounds: &GeoBounds, padding: f64) -> f64 {
        let size = bounds.size();
        let avail_w = (self.viewport_size[0] - 2.0 * padding).max(1.0);
        let avail_h = (self.viewport_size[1] - 2.0 * padding).max(1.0);

        let mut ratio = f64::INFINITY;
        if size.x > 0.0 {
            ratio = ratio.min(avail_w / size.x);
        }
        if size.y > 0.0 {
            ratio = ratio.min(avail_h / size.y);
        }
        if !ratio.is_finite() {
            // Degenerierte Box (Punkt)
            return Self::ZOOM_MAX;
        }
        (ratio * 360.0 / Self::TILE_SIZE)
            .log2()
            .clamp(Self::ZOOM_MIN, Self::ZOOM_MAX)
    }
}

impl Default for MapView {
    fn default() -> Self {
        // Oslo
        Self::new(DVec2::new(10.75, 59.91), 10.0)
    }
}

impl MapCamera for MapView {
    fn fit_bounds(&mut self, bounds: GeoBounds, padding: f64) {
        self.zoom = self.zoom_for_bounds(&bounds, padding);
        self.center = bounds.center();
        self.last_animation = None;
        log::debug!(
            "fit_bounds: center={:?} zoom={:.2}",
            self.center,
            self.zoom
        );
    }

    fn fly_to(&mut self, center: DVec2, zoom: f64, duration: Duration) {
        self.center = center;
        self.zoom = zoom.clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
        self.last_animation = Some(duration);
    }
}
