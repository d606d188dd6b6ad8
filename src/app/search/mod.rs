//! Suche: Registry pro Such-Kontext, Debounce-Session und lokale Suche.
//!
//! Jede Ansicht registriert für ihren Kontext (`Map` oder `Data`) genau eine
//! asynchrone Suchfunktion. Die `SearchSession` ruft sie verzögert (Live-Suche)
//! oder sofort (expliziter Suchknopf) auf und übernimmt die Ergebnisse.

mod local;
mod registry;
mod session;

#[cfg(test)]
mod tests;

pub use local::LocalSearch;
pub use registry::{SearchRegistry, SharedSearchFunction};
pub use session::{SearchOutcome, SearchSession};

use crate::core::MapCamera;
use async_trait::async_trait;
use glam::DVec2;
use std::future::Future;
use std::time::Duration;

/// Such-Kontext: welche Suchfunktion und welches Filter-Set aktiv sind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SearchContext {
    /// Suche auf der Karte (Ergebnisse → Kamera-Flug)
    Map,
    /// Suche in der Tabellenansicht (Ergebnisse → Tabellenzeilen)
    #[default]
    Data,
}

/// Ein Treffer einer Suchfunktion mit dem zugrunde liegenden Domänenobjekt.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResultItem<T> {
    /// ID des Domänenobjekts
    pub id: String,
    /// Anzeigename
    pub name: String,
    /// Typ-Schlüssel (gleiche Werte wie die Filter-Schlüssel)
    pub item_type: String,
    /// Position für "Hinfliegen"
    pub coordinates: Option<DVec2>,
    /// Domänenobjekt für Sortierung und Tabellenzeile
    pub original_data: T,
}

/// Asynchrone Suchfunktion `(query, filters) → Treffer`.
///
/// "Keine Treffer" ist ein leerer Vektor, kein Fehler. Fehler stehen für
/// Transport-Probleme und werden von der Session zu leeren Ergebnissen.
#[async_trait]
pub trait SearchFunction<T>: Send + Sync {
    /// Führt die Suche aus.
    async fn search(
        &self,
        query: &str,
        filters: &[String],
    ) -> anyhow::Result<Vec<SearchResultItem<T>>>;
}

/// Adapter, der eine async Closure als `SearchFunction` registrierbar macht.
pub struct FnSearch<F>(pub F);

#[async_trait]
impl<T, F, Fut> SearchFunction<T> for FnSearch<F>
where
    T: Send + 'static,
    F: Fn(String, Vec<String>) -> Fut + Send + Sync,
    Fut: Future<Output = anyhow::Result<Vec<SearchResultItem<T>>>> + Send,
{
    async fn search(
        &self,
        query: &str,
        filters: &[String],
    ) -> anyhow::Result<Vec<SearchResultItem<T>>> {
        (self.0)(query.to_string(), filters.to_vec()).await
    }
}

/// Fliegt die Kamera zu einem Treffer mit Koordinaten. Ohne Koordinaten: `false`.
pub fn fly_to_result<T>(
    item: &SearchResultItem<T>,
    camera: &mut dyn MapCamera,
    zoom: f64,
    duration: Duration,
) -> bool {
    let Some(center) = item.coordinates else {
        log::debug!("Treffer '{}' ohne Koordinaten, kein Kamera-Flug", item.id);
        return false;
    };
    camera.fly_to(center, zoom, duration);
    true
}
