//! GeoJSON-nahe Feature-Typen für Haltebereiche.
//!
//! Ein `Feature` ist eine Geometrie mit eindeutiger ID und kleinem
//! Property-Bag. Gezeichnet werden ausschließlich Polygone (flexible
//! Haltebereiche), Punkte und Linien werden nur mitgeführt.

use super::GeoBounds;
use glam::DVec2;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Stabile String-ID eines Features (vom Zeichenwerkzeug vergeben).
pub type FeatureId = String;

/// Geometrie eines Features, Koordinaten als `[lon, lat]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum Geometry {
    /// Einzelner Punkt
    Point(DVec2),
    /// Offener Linienzug
    LineString(Vec<DVec2>),
    /// Polygon: erster Ring = Außenring, weitere Ringe = Löcher
    Polygon(Vec<Vec<DVec2>>),
}

impl Geometry {
    /// Gibt `true` zurück, wenn die Geometrie ein Polygon ist.
    pub fn is_polygon(&self) -> bool {
        matches!(self, Geometry::Polygon(_))
    }
}

/// Geometrie mit ID und Properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    /// Eindeutige ID
    pub id: FeatureId,
    /// Geometrie
    pub geometry: Geometry,
    /// Freie Properties (z.B. Name des Haltebereichs)
    #[serde(default)]
    pub properties: IndexMap<String, serde_json::Value>,
}

impl Feature {
    /// Erstellt ein Feature mit leerem Property-Bag.
    pub fn new(id: impl Into<FeatureId>, geometry: Geometry) -> Self {
        Self {
            id: id.into(),
            geometry,
            properties: IndexMap::new(),
        }
    }

    /// Erstellt ein Polygon-Feature aus einem einzelnen Außenring.
    pub fn polygon(id: impl Into<FeatureId>, ring: Vec<DVec2>) -> Self {
        Self::new(id, Geometry::Polygon(vec![ring]))
    }

    /// Setzt eine Property (Builder-Stil).
    pub fn with_property(mut self, key: &str, value: serde_json::Value) -> Self {
        self.properties.insert(key.to_string(), value);
        self
    }

    /// Außenring des Polygons, `None` für andere Geometrien oder leere Polygone.
    pub fn outer_ring(&self) -> Option<&[DVec2]> {
        match &self.geometry {
            Geometry::Polygon(rings) => rings.first().map(Vec::as_slice),
            _ => None,
        }
    }

    /// Bounding-Box des Außenrings. Nicht-Polygone liefern `None`.
    pub fn polygon_bounds(&self) -> Option<GeoBounds> {
        GeoBounds::from_points(self.outer_ring()?.iter().copied())
    }
}
