//! Zentrale Konfiguration für den Carpool-Planer.
//!
//! `PlannerOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};
use std::time::Duration;

// ── Suche ───────────────────────────────────────────────────────────

/// Debounce-Verzögerung für die Live-Suche in Millisekunden.
pub const SEARCH_DEBOUNCE_MS: u64 = 300;

// ── Tabelle ─────────────────────────────────────────────────────────

/// Standard-Zeilen pro Seite.
pub const ROWS_PER_PAGE_DEFAULT: usize = 10;
/// Auswählbare Seitengrößen.
pub const ROWS_PER_PAGE_CHOICES: [usize; 4] = [10, 25, 50, 100];

// ── Kamera ──────────────────────────────────────────────────────────

/// Rand in Pixeln beim Zoom auf einen Haltebereich.
pub const FIT_BOUNDS_PADDING_PX: f64 = 50.0;
/// Ziel-Zoomstufe beim Flug zu einem Suchergebnis.
pub const FLY_TO_ZOOM: f64 = 15.0;
/// Dauer des Flugs zu einem Suchergebnis in Millisekunden.
pub const FLY_TO_DURATION_MS: u64 = 1200;

/// Alle zur Laufzeit änderbaren Planer-Optionen.
/// Wird als `carpool_planner.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerOptions {
    // ── Suche ───────────────────────────────────────────────────
    /// Debounce der Live-Suche in Millisekunden
    pub search_debounce_ms: u64,

    // ── Tabelle ─────────────────────────────────────────────────
    /// Standard-Seitengröße neuer Tabellen
    pub rows_per_page: usize,
    /// Auswählbare Seitengrößen
    pub rows_per_page_choices: Vec<usize>,

    // ── Kamera ──────────────────────────────────────────────────
    /// Rand beim Zoom auf ein Feature (Pixel)
    pub fit_bounds_padding_px: f64,
    /// Zoomstufe beim Flug zu einem Suchergebnis
    pub fly_to_zoom: f64,
    /// Flugdauer in Millisekunden
    pub fly_to_duration_ms: u64,
}

impl Default for PlannerOptions {
    fn default() -> Self {
        Self {
            search_debounce_ms: SEARCH_DEBOUNCE_MS,
            rows_per_page: ROWS_PER_PAGE_DEFAULT,
            rows_per_page_choices: ROWS_PER_PAGE_CHOICES.to_vec(),
            fit_bounds_padding_px: FIT_BOUNDS_PADDING_PX,
            fly_to_zoom: FLY_TO_ZOOM,
            fly_to_duration_ms: FLY_TO_DURATION_MS,
        }
    }
}

impl PlannerOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler werden Standardwerte verwendet.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.sanitized()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("carpool_planner"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("carpool_planner.toml")
    }

    /// Debounce als `Duration`.
    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    /// Flugdauer als `Duration`.
    pub fn fly_to_duration(&self) -> Duration {
        Duration::from_millis(self.fly_to_duration_ms)
    }

    /// Korrigiert ungültige Werte (Seitengröße 0, leere Auswahl).
    pub fn sanitized(mut self) -> Self {
        self.rows_per_page_choices.retain(|&n| n > 0);
        if self.rows_per_page_choices.is_empty() {
            self.rows_per_page_choices = ROWS_PER_PAGE_CHOICES.to_vec();
        }
        if self.rows_per_page == 0 {
            log::warn!(
                "rows_per_page = 0 ist ungültig, verwende {}",
                ROWS_PER_PAGE_DEFAULT
            );
            self.rows_per_page = ROWS_PER_PAGE_DEFAULT;
        }
        self
    }
}
