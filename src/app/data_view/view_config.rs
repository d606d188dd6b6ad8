//! Deklarative View-Konfiguration: Spalten, Filter und Zugriffsfunktionen
//! einer Tabellenansicht.

use super::pipeline::{compute_visible_slice, SliceRequest, VisibleSlice};
use super::table::TableViewState;
use crate::app::search::{SearchContext, SearchResultItem, SearchSession};
use glam::DVec2;

/// Tabellenspalte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// Schlüssel für `get_sort_value`
    pub key: &'static str,
    /// Spaltenüberschrift
    pub label: &'static str,
    /// Kopf ist klickbar
    pub sortable: bool,
}

/// Auswählbarer Filter-Chip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOption {
    /// Typ-Schlüssel
    pub key: &'static str,
    /// Anzeigename
    pub label: &'static str,
}

/// Beschreibt eine Tabellenansicht, damit eine generische Seite jede Ansicht
/// rendern kann.
pub struct ViewConfig<T> {
    /// Stabile ID der Ansicht
    pub id: &'static str,
    /// Überschrift
    pub title: &'static str,
    /// Kontext, in dem die Ansicht sucht
    pub search_context: SearchContext,
    /// Spalten in Anzeige-Reihenfolge
    pub columns: Vec<Column>,
    /// Filter-Chips
    pub filter_options: Vec<FilterOption>,
    /// Standard-Sortierspalte
    pub default_order_by: &'static str,
    /// ID eines Eintrags
    pub get_id: fn(&T) -> String,
    /// Anzeigename eines Eintrags
    pub get_name: fn(&T) -> String,
    /// Typ-Schlüssel eines Eintrags
    pub get_filter_key: fn(&T) -> String,
    /// Sortierwert eines Eintrags für eine Spalte
    pub get_sort_value: fn(&T, &str) -> String,
    /// Position eines Eintrags
    pub get_coordinates: fn(&T) -> Option<DVec2>,
}

impl<T> ViewConfig<T> {
    /// Anfangszustand der Tabelle
    pub fn initial_table_state(&self, rows_per_page: usize) -> TableViewState {
        TableViewState::new(self.default_order_by, rows_per_page)
    }

    /// Spalte per Schlüssel
    pub fn column(&self, key: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.key == key)
    }

    /// Ist die Spalte sortierbar?
    pub fn is_sortable(&self, key: &str) -> bool {
        self.column(key).is_some_and(|c| c.sortable)
    }

    /// Berechnet die sichtbaren Zeilen aus Sammlung, Such-Session und Tabellenzustand.
    pub fn visible_slice<'a>(
        &self,
        all_data: &'a [T],
        server_total: Option<usize>,
        session: &'a SearchSession<T>,
        table: &TableViewState,
    ) -> VisibleSlice<'a, T>
    where
        T: Clone + Send + Sync + 'static,
    {
        let get_filter_key = self.get_filter_key;
        let get_sort_value = self.get_sort_value;
        compute_visible_slice(SliceRequest {
            all_data,
            server_total,
            search_query: session.query(),
            search_results: session.results(),
            selected_item: session.selected_item(),
            active_search_context: session.active_context(),
            active_filters: session.active_filters(),
            order: table.order,
            order_by: &table.order_by,
            page: table.page,
            rows_per_page: table.rows_per_page,
            get_filter_key: &get_filter_key,
            get_sort_value: &get_sort_value,
        })
    }
}

impl<T: Clone> ViewConfig<T> {
    /// Baut einen Suchtreffer für einen Eintrag.
    pub fn search_item(&self, item: &T) -> SearchResultItem<T> {
        SearchResultItem {
            id: (self.get_id)(item),
            name: (self.get_name)(item),
            item_type: (self.get_filter_key)(item),
            coordinates: (self.get_coordinates)(item),
            original_data: item.clone(),
        }
    }

    /// Suchtreffer für eine ganze Sammlung (für `LocalSearch`).
    pub fn search_items(&self, items: &[T]) -> Vec<SearchResultItem<T>> {
        items.iter().map(|item| self.search_item(item)).collect()
    }
}
