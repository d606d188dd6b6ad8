//! Reine Pipeline: Sammlung + Suche + Filter + Sortierung + Seite → sichtbare Zeilen.

use super::filters::{apply_filters, FilterSet};
use super::table::SortOrder;
use crate::app::search::{SearchContext, SearchResultItem};

/// Eingaben für `compute_visible_slice`.
///
/// `'a` bindet die Daten, aus denen die Zeilen stammen; `'f` alles, was nur
/// während der Berechnung gelesen wird.
pub struct SliceRequest<'a, 'f, T> {
    /// Vollständige (ggf. serverseitig sortierte) Sammlung
    pub all_data: &'a [T],
    /// Vom Server gemeldete Gesamtzahl (ohne aktive Filter maßgeblich)
    pub server_total: Option<usize>,
    /// Suchbegriff
    pub search_query: &'f str,
    /// Treffer der registrierten Suchfunktion
    pub search_results: &'a [SearchResultItem<T>],
    /// Explizit gewählter Treffer (Autocomplete)
    pub selected_item: Option<&'a SearchResultItem<T>>,
    /// Aktiver Such-Kontext
    pub active_search_context: SearchContext,
    /// Aktive Filter
    pub active_filters: &'f FilterSet,
    /// Sortierrichtung
    pub order: SortOrder,
    /// Sortier-Spalte
    pub order_by: &'f str,
    /// Seite (0-basiert)
    pub page: usize,
    /// Zeilen pro Seite
    pub rows_per_page: usize,
    /// Typ-Schlüssel eines Eintrags
    pub get_filter_key: &'f dyn Fn(&T) -> String,
    /// Sortierwert eines Eintrags für eine Spalte
    pub get_sort_value: &'f dyn Fn(&T, &str) -> String,
}

/// Ergebnis: Zeilen der aktuellen Seite und Gesamtzahl für die Paginierung.
#[derive(Debug, PartialEq)]
pub struct VisibleSlice<'a, T> {
    /// Zeilen der aktuellen Seite
    pub data_for_table: Vec<&'a T>,
    /// Gesamtzahl für den Paginator
    pub current_total_for_table: usize,
}

/// Berechnet die sichtbaren Zeilen. Reine Funktion ohne Seiteneffekte.
///
/// Priorität: Auswahl > Suche im `Data`-Kontext > gefilterte Sammlung.
/// Nur Auswahl und Suchtreffer werden sortiert; die Sammlung behält die
/// Reihenfolge des Aufrufers (serverseitige Sortierung).
pub fn compute_visible_slice<'a, T>(req: SliceRequest<'a, '_, T>) -> VisibleSlice<'a, T> {
    let searching = !req.search_query.trim().is_empty()
        && req.active_search_context == SearchContext::Data;

    let (base, total, needs_sort): (Vec<&'a T>, usize, bool) =
        if let Some(selected) = req.selected_item {
            (vec![&selected.original_data], 1, true)
        } else if searching {
            let items: Vec<&'a T> = req
                .search_results
                .iter()
                .map(|r| &r.original_data)
                .collect();
            let total = items.len();
            (items, total, true)
        } else {
            let filtered = apply_filters(req.all_data, req.active_filters, req.get_filter_key);
            let total = if req.active_filters.is_empty() {
                req.server_total.unwrap_or(filtered.len())
            } else {
                filtered.len()
            };
            (filtered, total, false)
        };

    let sorted = if needs_sort {
        sort_stable(base, req.order, req.order_by, req.get_sort_value)
    } else {
        base
    };

    VisibleSlice {
        data_for_table: paginate(sorted, req.page, req.rows_per_page),
        current_total_for_table: total,
    }
}

/// Stabile Sortierung nach kleingeschriebenem Sortierwert.
fn sort_stable<'a, T>(
    items: Vec<&'a T>,
    order: SortOrder,
    order_by: &str,
    get_sort_value: &dyn Fn(&T, &str) -> String,
) -> Vec<&'a T> {
    let mut keyed: Vec<(String, &'a T)> = items
        .into_iter()
        .map(|item| (get_sort_value(item, order_by).to_lowercase(), item))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| match order {
        SortOrder::Asc => a.cmp(b),
        SortOrder::Desc => b.cmp(a),
    });
    keyed.into_iter().map(|(_, item)| item).collect()
}

/// Schneidet `[page * rows, page * rows + rows)` aus.
fn paginate<T>(items: Vec<T>, page: usize, rows_per_page: usize) -> Vec<T> {
    let start = page.saturating_mul(rows_per_page).min(items.len());
    let end = start.saturating_add(rows_per_page).min(items.len());
    items.into_iter().skip(start).take(end - start).collect()
}
