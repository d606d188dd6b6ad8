//! Geteilte Typen für layer-übergreifende Verträge.

pub mod options;

pub use options::PlannerOptions;
pub use options::{ROWS_PER_PAGE_DEFAULT, SEARCH_DEBOUNCE_MS};
