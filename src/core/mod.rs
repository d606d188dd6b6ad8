//! Core-Domänentypen: Features, Bounding-Boxen, Kamera, Haltestellen, Fahrten.

pub mod bounds;
pub mod camera;
/// GeoJSON-nahe Features (Polygon-Haltebereiche)
pub mod feature;
pub mod stop_place;
pub mod trip;

pub use bounds::GeoBounds;
pub use camera::{MapCamera, MapView};
pub use feature::{Feature, FeatureId, Geometry};
pub use stop_place::{StopPlace, TransportMode};
pub use trip::{Trip, TripStatus, TripStopSlot, TripStopsPayload};
