use std::sync::Arc;

use crate::models::{DetailView, Manifest, MediaKind, Preferences, RawPreferences, SummaryView};

use super::corpus::Corpus;
use super::selector::select;

/// Catalog and detail queries over a corpus snapshot.
///
/// Every query normalizes its own preferences, so concurrent requests share
/// nothing but the read-only corpus.
#[derive(Debug, Clone)]
pub struct Catalog {
    corpus: Arc<Corpus>,
    manifest: Manifest,
}

impl Catalog {
    pub fn new(corpus: Arc<Corpus>) -> Self {
        Self {
            corpus,
            manifest: Manifest::humanifesto(),
        }
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Ranked summaries of one media kind
    pub fn list(&self, kind: MediaKind, raw: &RawPreferences, limit: usize) -> Vec<SummaryView> {
        let prefs = Preferences::normalize(raw);

        select(self.corpus.pool(kind), &prefs, limit)
            .into_iter()
            .map(SummaryView::from)
            .collect()
    }

    /// Ranked summaries for a manifest catalog.
    ///
    /// Unknown catalogs, or a kind the catalog does not serve, yield an
    /// empty list.
    pub fn list_catalog(
        &self,
        kind: MediaKind,
        catalog_id: &str,
        raw: &RawPreferences,
        limit: usize,
    ) -> Vec<SummaryView> {
        match self.manifest.catalog_kind(catalog_id) {
            Some(served) if served == kind => self.list(kind, raw, limit),
            _ => {
                tracing::debug!(catalog_id, kind = %kind, "No such catalog");
                Vec::new()
            }
        }
    }

    /// Detail view for an id, `None` when the corpus has no such title
    pub fn detail(&self, id: &str) -> Option<DetailView> {
        self.corpus.find(id).map(DetailView::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Genre, TitleRecord, MOVIES_CATALOG_ID, SERIES_CATALOG_ID};
    use serde_json::{json, Value};

    fn catalog() -> Catalog {
        let mut matrix = TitleRecord::new("tt0133093", MediaKind::Film, "The Matrix");
        matrix.genres = vec![Genre::Action, Genre::SciFi];
        matrix.summary = Some("A hacker learns the truth.".into());

        let mut heat = TitleRecord::new("tt0113277", MediaKind::Film, "Heat");
        heat.genres = vec![Genre::Crime, Genre::Action];

        let mut peaks = TitleRecord::new("tt0098936", MediaKind::Series, "Twin Peaks");
        peaks.genres = vec![Genre::Mystery, Genre::Drama];

        Catalog::new(Arc::new(Corpus::new(vec![matrix, heat, peaks])))
    }

    fn raw(value: Value) -> RawPreferences {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_list_only_returns_requested_kind() {
        let catalog = catalog();
        let films = catalog.list(MediaKind::Film, &RawPreferences::new(), 10);
        assert_eq!(films.len(), 2);
        assert!(films.iter().all(|f| f.kind == MediaKind::Film));

        let series = catalog.list(MediaKind::Series, &RawPreferences::new(), 10);
        assert_eq!(series[0].name, "Twin Peaks");
    }

    #[test]
    fn test_list_normalizes_raw_preferences() {
        let catalog = catalog();
        let films = catalog.list(
            MediaKind::Film,
            &raw(json!({ "primaryGenre": "sci-fi", "mode": 7 })),
            10,
        );

        assert_eq!(films.len(), 1);
        assert_eq!(films[0].id, "tt0133093");
    }

    #[test]
    fn test_list_catalog_checks_catalog_and_kind() {
        let catalog = catalog();
        let none = RawPreferences::new();

        assert_eq!(catalog.list_catalog(MediaKind::Film, MOVIES_CATALOG_ID, &none, 10).len(), 2);
        assert!(catalog.list_catalog(MediaKind::Film, SERIES_CATALOG_ID, &none, 10).is_empty());
        assert!(catalog.list_catalog(MediaKind::Film, "top", &none, 10).is_empty());
    }

    #[test]
    fn test_detail_found_and_not_found() {
        let catalog = catalog();

        let detail = catalog.detail("tt0133093").unwrap();
        assert_eq!(detail.description, "A hacker learns the truth.");

        assert!(catalog.detail("tt0000000").is_none());
    }

    #[test]
    fn test_empty_corpus_yields_empty_results() {
        let catalog = Catalog::new(Arc::new(Corpus::empty()));
        assert!(catalog.list(MediaKind::Film, &RawPreferences::new(), 10).is_empty());
        assert!(catalog.detail("tt0133093").is_none());
    }
}
