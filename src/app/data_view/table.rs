//! Tabellen-Zustand: Sortierung und Paginierung.

/// Sortierrichtung
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Aufsteigend
    #[default]
    Asc,
    /// Absteigend
    Desc,
}

impl SortOrder {
    /// Gegenrichtung
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// Sortier- und Seitenzustand einer Tabelle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableViewState {
    /// Sortierrichtung
    pub order: SortOrder,
    /// Spalten-Schlüssel der Sortierung
    pub order_by: String,
    /// Seite (0-basiert)
    pub page: usize,
    /// Zeilen pro Seite (> 0)
    pub rows_per_page: usize,
}

impl TableViewState {
    /// Erstellt einen Zustand auf Seite 0, aufsteigend sortiert.
    pub fn new(order_by: &str, rows_per_page: usize) -> Self {
        Self {
            order: SortOrder::Asc,
            order_by: order_by.to_string(),
            page: 0,
            rows_per_page: rows_per_page.max(1),
        }
    }

    /// Klick auf einen Spaltenkopf: gleiche Spalte dreht die Richtung,
    /// neue Spalte sortiert aufsteigend.
    pub fn sort_by(&mut self, key: &str) {
        if self.order_by == key {
            self.order = self.order.toggled();
        } else {
            self.order_by = key.to_string();
            self.order = SortOrder::Asc;
        }
        self.page = 0;
    }

    /// Seite wechseln
    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Seitengröße ändern (Seite zurück auf 0). Werte 0 werden ignoriert.
    pub fn set_rows_per_page(&mut self, rows_per_page: usize) {
        if rows_per_page == 0 {
            log::warn!("Seitengröße 0 ignoriert");
            return;
        }
        self.rows_per_page = rows_per_page;
        self.page = 0;
    }

    /// Zurück auf Seite 0 (nach Such- oder Filteränderung).
    pub fn reset_page(&mut self) {
        self.page = 0;
    }

    /// Anzahl Seiten für `total` Einträge (mindestens 1).
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.rows_per_page).max(1)
    }

    /// Setzt die Seite auf 0, wenn sie hinter dem Ende liegt.
    pub fn clamp_page(&mut self, total: usize) {
        if self.page >= self.page_count(total) {
            self.page = 0;
        }
    }
}
