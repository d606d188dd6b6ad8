//! Filter-Set aus Typ-Schlüsseln.

use indexmap::IndexSet;

/// Menge aktiver Filter-Schlüssel. Reihenfolge nur für die Anzeige relevant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    keys: IndexSet<String>,
}

impl FilterSet {
    /// Leeres Filter-Set
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter-Set aus Schlüsseln
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// Schaltet einen Schlüssel um. Gibt `true` zurück, wenn er danach aktiv ist.
    pub fn toggle(&mut self, key: &str) -> bool {
        if self.keys.shift_remove(key) {
            false
        } else {
            self.keys.insert(key.to_string());
            true
        }
    }

    /// Ist der Schlüssel aktiv?
    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Gibt `true` zurück, wenn kein Filter aktiv ist.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Anzahl aktiver Filter
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Alle Filter entfernen
    pub fn clear(&mut self) {
        self.keys.clear();
    }

    /// Schlüssel als Vektor (für Suchfunktionen)
    pub fn keys(&self) -> Vec<String> {
        self.keys.iter().cloned().collect()
    }

    /// Leeres Set lässt alles durch, sonst muss der Schlüssel enthalten sein.
    pub fn admits(&self, key: &str) -> bool {
        self.keys.is_empty() || self.keys.contains(key)
    }
}

/// Filtert eine Sammlung nach Typ-Schlüssel. Leeres Set ist die Identität.
pub fn apply_filters<'a, T>(
    items: &'a [T],
    filters: &FilterSet,
    get_filter_key: &dyn Fn(&T) -> String,
) -> Vec<&'a T> {
    if filters.is_empty() {
        return items.iter().collect();
    }
    items
        .iter()
        .filter(|item| filters.contains(&get_filter_key(*item)))
        .collect()
}
