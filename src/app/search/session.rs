//! Such-Session: explizit übergebener Suchzustand einer Ansicht.
//!
//! Lebenszyklus: `new()` beim Öffnen der Ansicht, `teardown()` (oder Drop)
//! beim Schließen. Ergebnisse laufen über einen Kanal zurück und werden mit
//! `apply_ready()` bzw. `next_outcome()` übernommen.

use super::{SearchContext, SearchFunction, SearchRegistry, SearchResultItem, SharedSearchFunction};
use crate::app::data_view::FilterSet;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

/// Ergebnis eines Such-Aufrufs, mit Sequenznummer für die Reihenfolge-Prüfung.
#[derive(Debug)]
pub struct SearchOutcome<T> {
    /// Laufende Nummer der Anfrage
    pub seq: u64,
    /// Kontext zum Zeitpunkt der Anfrage
    pub context: SearchContext,
    /// Suchbegriff der Anfrage
    pub query: String,
    /// Treffer (leer bei Fehler)
    pub results: Vec<SearchResultItem<T>>,
}

/// Suchzustand einer Ansicht (Begriff, Treffer, Auswahl, Filter).
pub struct SearchSession<T> {
    registry: SearchRegistry<T>,
    debounce: Duration,
    query: String,
    results: Vec<SearchResultItem<T>>,
    selected: Option<SearchResultItem<T>>,
    active_context: SearchContext,
    map_filters: FilterSet,
    data_filters: FilterSet,
    /// Zuletzt vergebene Sequenznummer
    issued_seq: u64,
    /// Sequenznummer der zuletzt übernommenen (oder verworfenen) Antwort
    applied_seq: u64,
    pending: Option<JoinHandle<()>>,
    outcome_tx: UnboundedSender<SearchOutcome<T>>,
    outcome_rx: UnboundedReceiver<SearchOutcome<T>>,
}

impl<T> SearchSession<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Erstellt eine Session mit leerem Zustand.
    pub fn new(registry: SearchRegistry<T>, debounce: Duration) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            registry,
            debounce,
            query: String::new(),
            results: Vec::new(),
            selected: None,
            active_context: SearchContext::default(),
            map_filters: FilterSet::new(),
            data_filters: FilterSet::new(),
            issued_seq: 0,
            applied_seq: 0,
            pending: None,
            outcome_tx,
            outcome_rx,
        }
    }

    /// Beendet die Session: Timer stoppen, Zustand leeren.
    pub fn teardown(&mut self) {
        self.clear();
        self.map_filters.clear();
        self.data_filters.clear();
        log::debug!("Such-Session beendet");
    }

    /// Registriert (`Some`) oder entfernt (`None`) die Suchfunktion eines Kontexts.
    ///
    /// Wird die Funktion des aktiven Kontexts entfernt, verfallen laufende Anfragen.
    pub fn register(&mut self, context: SearchContext, function: Option<SharedSearchFunction<T>>) {
        let deregistered = function.is_none();
        self.registry.register(context, function);
        if deregistered && context == self.active_context {
            self.cancel_timer();
            self.invalidate_in_flight();
        }
    }

    /// Ändert die Debounce-Verzögerung für künftige Eingaben.
    pub fn set_debounce(&mut self, debounce: Duration) {
        self.debounce = debounce;
    }

    /// Lesender Zugriff auf die Registry
    pub fn registry(&self) -> &SearchRegistry<T> {
        &self.registry
    }

    /// Aktueller Suchbegriff
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Zuletzt übernommene Treffer
    pub fn results(&self) -> &[SearchResultItem<T>] {
        &self.results
    }

    /// Explizit ausgewählter Treffer (Autocomplete)
    pub fn selected_item(&self) -> Option<&SearchResultItem<T>> {
        self.selected.as_ref()
    }

    /// Aktiver Such-Kontext
    pub fn active_context(&self) -> SearchContext {
        self.active_context
    }

    /// Filter des aktiven Kontexts
    pub fn active_filters(&self) -> &FilterSet {
        self.filters(self.active_context)
    }

    /// Filter eines Kontexts
    pub fn filters(&self, context: SearchContext) -> &FilterSet {
        match context {
            SearchContext::Map => &self.map_filters,
            SearchContext::Data => &self.data_filters,
        }
    }

    fn active_filters_mut(&mut self) -> &mut FilterSet {
        match self.active_context {
            SearchContext::Map => &mut self.map_filters,
            SearchContext::Data => &mut self.data_filters,
        }
    }

    /// Läuft gerade ein Debounce-Timer?
    pub fn has_pending_timer(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Wechselt den Such-Kontext. Treffer und Auswahl des alten Kontexts verfallen.
    pub fn set_active_context(&mut self, context: SearchContext) {
        if context == self.active_context {
            return;
        }
        self.clear();
        self.active_context = context;
    }

    /// Tastatureingabe: ersetzt den Debounce-Timer, sucht nach Ablauf.
    pub fn on_query_input(&mut self, query: &str) {
        self.query = query.to_string();
        self.selected = None;
        self.cancel_timer();

        if self.query.trim().is_empty() {
            self.results.clear();
            self.invalidate_in_flight();
            return;
        }

        let Some(request) = self.prepare_request() else {
            return;
        };
        let delay = self.debounce;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Suche selbst läuft unabhängig vom Timer weiter
            tokio::spawn(request.run());
        }));
    }

    /// Expliziter Suchknopf: ohne Debounce.
    pub fn submit_search(&mut self) {
        self.cancel_timer();
        if self.query.trim().is_empty() {
            return;
        }
        if let Some(request) = self.prepare_request() {
            tokio::spawn(request.run());
        }
    }

    /// Schaltet einen Filter des aktiven Kontexts um. Bei aktivem Begriff wird sofort neu gesucht.
    pub fn toggle_filter(&mut self, key: &str) -> bool {
        let active = self.active_filters_mut().toggle(key);
        if !self.query.trim().is_empty() {
            self.submit_search();
        }
        active
    }

    /// Leert die Filter des aktiven Kontexts.
    pub fn clear_filters(&mut self) {
        if self.active_filters().is_empty() {
            return;
        }
        self.active_filters_mut().clear();
        if !self.query.trim().is_empty() {
            self.submit_search();
        }
    }

    /// Autocomplete-Auswahl
    pub fn select_item(&mut self, item: SearchResultItem<T>) {
        self.cancel_timer();
        self.selected = Some(item);
    }

    /// Hebt die Autocomplete-Auswahl auf.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Leert Begriff, Treffer und Auswahl. Laufende Antworten werden verworfen.
    pub fn clear(&mut self) {
        self.cancel_timer();
        self.query.clear();
        self.results.clear();
        self.selected = None;
        self.invalidate_in_flight();
    }

    /// Übernimmt alle bereits eingetroffenen Antworten. Gibt die Anzahl übernommener zurück.
    pub fn apply_ready(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            if self.apply(outcome) {
                applied += 1;
            }
        }
        applied
    }

    /// Wartet auf die nächste Antwort und übernimmt sie. `true` wenn übernommen.
    pub async fn next_outcome(&mut self) -> bool {
        match self.outcome_rx.recv().await {
            Some(outcome) => self.apply(outcome),
            None => false,
        }
    }

    fn apply(&mut self, outcome: SearchOutcome<T>) -> bool {
        if outcome.seq <= self.applied_seq {
            log::debug!(
                "Veraltete Antwort #{} für '{}' verworfen",
                outcome.seq,
                outcome.query
            );
            return false;
        }
        if outcome.context != self.active_context {
            log::debug!("Antwort für inaktiven Kontext {:?} verworfen", outcome.context);
            return false;
        }
        log::debug!(
            "Antwort #{} für '{}': {} Treffer",
            outcome.seq,
            outcome.query,
            outcome.results.len()
        );
        self.applied_seq = outcome.seq;
        self.results = outcome.results;
        true
    }

    fn prepare_request(&mut self) -> Option<SearchRequest<T>> {
        let Some(function) = self.registry.get(self.active_context) else {
            log::debug!(
                "Keine Suchfunktion für {:?} registriert",
                self.active_context
            );
            self.results.clear();
            self.invalidate_in_flight();
            return None;
        };
        self.issued_seq += 1;
        Some(SearchRequest {
            seq: self.issued_seq,
            context: self.active_context,
            query: self.query.trim().to_string(),
            filters: self.active_filters().keys(),
            function,
            tx: self.outcome_tx.clone(),
        })
    }

    fn cancel_timer(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    fn invalidate_in_flight(&mut self) {
        self.applied_seq = self.issued_seq;
    }
}

impl<T> Drop for SearchSession<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

/// Eine abgeschickte Suche, läuft als eigener Task.
struct SearchRequest<T> {
    seq: u64,
    context: SearchContext,
    query: String,
    filters: Vec<String>,
    function: SharedSearchFunction<T>,
    tx: UnboundedSender<SearchOutcome<T>>,
}

impl<T: Send + 'static> SearchRequest<T> {
    async fn run(self) {
        let results = run_search(self.function.as_ref(), &self.query, &self.filters).await;
        let outcome = SearchOutcome {
            seq: self.seq,
            context: self.context,
            query: self.query,
            results,
        };
        if self.tx.send(outcome).is_err() {
            log::debug!("Such-Session geschlossen, Antwort #{} verworfen", self.seq);
        }
    }
}

/// Führt die Suche aus; Fehler werden geloggt und zu "keine Treffer".
pub(crate) async fn run_search<T>(
    function: &dyn SearchFunction<T>,
    query: &str,
    filters: &[String],
) -> Vec<SearchResultItem<T>> {
    match function.search(query, filters).await {
        Ok(results) => results,
        Err(e) => {
            log::warn!("Suche nach '{}' fehlgeschlagen: {:#}", query, e);
            Vec::new()
        }
    }
}
