//! Lokale Suche über eine bereits geladene Sammlung.

use super::{SearchFunction, SearchResultItem};
use async_trait::async_trait;
use regex::RegexBuilder;

/// Suchfunktion über In-Memory-Treffer (Namensabgleich ohne Groß/Klein).
pub struct LocalSearch<T> {
    items: Vec<SearchResultItem<T>>,
    limit: Option<usize>,
}

impl<T: Clone> LocalSearch<T> {
    /// Erstellt die Suche aus vorbereiteten Treffern.
    pub fn new(items: Vec<SearchResultItem<T>>) -> Self {
        Self { items, limit: None }
    }

    /// Begrenzt die Trefferzahl (Autocomplete-Vorschläge).
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Synchroner Kern der Suche.
    pub fn find(&self, query: &str, filters: &[String]) -> anyhow::Result<Vec<SearchResultItem<T>>> {
        let pattern = RegexBuilder::new(&regex::escape(query.trim()))
            .case_insensitive(true)
            .build()?;

        let matches = self
            .items
            .iter()
            .filter(|item| filters.is_empty() || filters.contains(&item.item_type))
            .filter(|item| pattern.is_match(&item.name))
            .take(self.limit.unwrap_or(usize::MAX))
            .cloned()
            .collect();
        Ok(matches)
    }
}

#[async_trait]
impl<T> SearchFunction<T> for LocalSearch<T>
where
    T: Clone + Send + Sync,
{
    async fn search(
        &self,
        query: &str,
        filters: &[String],
    ) -> anyhow::Result<Vec<SearchResultItem<T>>> {
        self.find(query, filters)
    }
}
