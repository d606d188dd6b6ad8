//! Achsenparallele Bounding-Box in Geo-Koordinaten.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Bounding-Box `[min, max]` in `[lon, lat]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    /// Südwest-Ecke
    pub min: DVec2,
    /// Nordost-Ecke
    pub max: DVec2,
}

impl GeoBounds {
    /// Erstellt eine Box aus zwei beliebigen Eckpunkten.
    pub fn new(a: DVec2, b: DVec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Berechnet die Box über alle Punkte. Leere Eingabe liefert `None`.
    pub fn from_points(points: impl IntoIterator<Item = DVec2>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Self::new(first, first), |acc, p| acc.expanded_to(p)))
    }

    /// Gibt eine Box zurück, die zusätzlich `p` enthält.
    pub fn expanded_to(self, p: DVec2) -> Self {
        Self {
            min: self.min.min(p),
            max: self.max.max(p),
        }
    }

    /// Mittelpunkt
    pub fn center(&self) -> DVec2 {
        (self.min + self.max) * 0.5
    }

    /// Ausdehnung in Grad
    pub fn size(&self) -> DVec2 {
        self.max - self.min
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_points_collects_extremes() {
        let bounds = GeoBounds::from_points([
            DVec2::new(10.5, 59.9),
            DVec2::new(10.7, 59.8),
            DVec2::new(10.6, 60.0),
        ])
        .expect("Bounds erwartet");
        assert_relative_eq!(bounds.min.x, 10.5);
        assert_relative_eq!(bounds.min.y, 59.8);
        assert_relative_eq!(bounds.max.x, 10.7);
        assert_relative_eq!(bounds.max.y, 60.0);
        assert_relative_eq!(bounds.center().x, 10.6);
    }

    #[test]
    fn test_from_points_empty() {
        assert!(GeoBounds::from_points(std::iter::empty()).is_none());
    }
}
