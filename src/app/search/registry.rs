//! Registry: genau eine Suchfunktion pro Such-Kontext.

use super::{SearchContext, SearchFunction};
use std::sync::Arc;

/// Geteilte Suchfunktion (wird in Such-Tasks geklont).
pub type SharedSearchFunction<T> = Arc<dyn SearchFunction<T>>;

/// Zuordnung `SearchContext → Suchfunktion`.
pub struct SearchRegistry<T> {
    map: Option<SharedSearchFunction<T>>,
    data: Option<SharedSearchFunction<T>>,
}

impl<T> Default for SearchRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SearchRegistry<T> {
    /// Erstellt eine leere Registry.
    pub fn new() -> Self {
        Self {
            map: None,
            data: None,
        }
    }

    fn slot_mut(&mut self, context: SearchContext) -> &mut Option<SharedSearchFunction<T>> {
        match context {
            SearchContext::Map => &mut self.map,
            SearchContext::Data => &mut self.data,
        }
    }

    /// Registriert (`Some`) oder entfernt (`None`) die Funktion eines Kontexts.
    /// Eine vorhandene Funktion wird ersetzt.
    pub fn register(&mut self, context: SearchContext, function: Option<SharedSearchFunction<T>>) {
        let slot = self.slot_mut(context);
        match (&function, slot.is_some()) {
            (Some(_), true) => log::debug!("Suchfunktion für {:?} ersetzt", context),
            (Some(_), false) => log::debug!("Suchfunktion für {:?} registriert", context),
            (None, _) => log::debug!("Suchfunktion für {:?} entfernt", context),
        }
        *slot = function;
    }

    /// Funktion eines Kontexts (Arc-Klon).
    pub fn get(&self, context: SearchContext) -> Option<SharedSearchFunction<T>> {
        match context {
            SearchContext::Map => self.map.clone(),
            SearchContext::Data => self.data.clone(),
        }
    }

    /// Ist für den Kontext eine Funktion registriert?
    pub fn is_registered(&self, context: SearchContext) -> bool {
        match context {
            SearchContext::Map => self.map.is_some(),
            SearchContext::Data => self.data.is_some(),
        }
    }
}
