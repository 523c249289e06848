use regex::Regex;
use std::collections::HashSet;
use std::path::Path;

use crate::error::CorpusError;
use crate::models::{MediaKind, TitleRecord};

/// Public catalog ids: `tt` followed by 7 or 8 digits
const CATALOG_ID_PATTERN: &str = r"^tt\d{7,8}$";

/// Prefix reserved for titles outside the public catalog
pub const ORIGINAL_ID_PREFIX: &str = "human_";

/// Immutable snapshot of the curated titles, partitioned by media kind.
///
/// Built once at startup and shared behind an `Arc`; nothing mutates it
/// afterwards.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    films: Vec<TitleRecord>,
    series: Vec<TitleRecord>,
}

/// Findings of the load-time integrity check
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntegrityReport {
    pub duplicate_ids: Vec<String>,
    pub malformed_ids: Vec<String>,
}

impl IntegrityReport {
    /// Flags repeated ids and ids that are neither catalog nor original ids
    pub fn check<'a>(records: impl IntoIterator<Item = &'a TitleRecord>) -> Self {
        let catalog_id = Regex::new(CATALOG_ID_PATTERN).ok();
        let mut seen = HashSet::new();
        let mut report = Self::default();

        for record in records {
            let id = record.id.as_str();
            if !seen.insert(id) && !report.duplicate_ids.iter().any(|d| d == id) {
                report.duplicate_ids.push(id.to_string());
            }

            let well_formed = id.starts_with(ORIGINAL_ID_PREFIX)
                || catalog_id.as_ref().is_some_and(|re| re.is_match(id));
            if !well_formed {
                report.malformed_ids.push(id.to_string());
            }
        }

        report
    }

    fn log(&self) {
        if !self.duplicate_ids.is_empty() {
            tracing::warn!(
                count = self.duplicate_ids.len(),
                ids = ?self.duplicate_ids,
                "Duplicate title ids in corpus, first occurrence wins on lookup"
            );
        }
        if !self.malformed_ids.is_empty() {
            tracing::warn!(
                count = self.malformed_ids.len(),
                ids = ?self.malformed_ids,
                "Title ids match neither the catalog pattern nor the originals prefix"
            );
        }
    }
}

impl Corpus {
    /// Builds a snapshot, keeping the input order within each kind.
    ///
    /// Integrity findings are logged here, once per snapshot.
    pub fn new(records: Vec<TitleRecord>) -> Self {
        IntegrityReport::check(&records).log();

        let (films, series): (Vec<_>, Vec<_>) = records
            .into_iter()
            .partition(|record| record.kind == MediaKind::Film);

        Self { films, series }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses a JSON array of title records
    pub fn from_json(json: &str) -> Result<Self, CorpusError> {
        let records: Vec<TitleRecord> = serde_json::from_str(json)?;
        Ok(Self::new(records))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CorpusError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Loads the corpus, degrading to an empty one on any failure
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(corpus) => {
                tracing::info!(
                    path = %path.display(),
                    films = corpus.films.len(),
                    series = corpus.series.len(),
                    "Corpus loaded"
                );
                corpus
            }
            Err(e) => {
                tracing::error!(
                    path = %path.display(),
                    error = %e,
                    "Failed to load corpus, serving an empty catalog"
                );
                Self::empty()
            }
        }
    }

    /// Candidate pool for one media kind
    pub fn pool(&self, kind: MediaKind) -> &[TitleRecord] {
        match kind {
            MediaKind::Film => &self.films,
            MediaKind::Series => &self.series,
        }
    }

    /// First occurrence of the id within the films-then-series order.
    ///
    /// A film wins over a series sharing its id even when the series came
    /// first in the source file.
    pub fn find(&self, id: &str) -> Option<&TitleRecord> {
        self.iter().find(|record| record.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TitleRecord> {
        self.films.iter().chain(self.series.iter())
    }

    pub fn len(&self) -> usize {
        self.films.len() + self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn record(id: &str, kind: MediaKind, title: &str) -> TitleRecord {
        TitleRecord::new(id, kind, title)
    }

    #[test]
    fn test_partitions_by_kind_in_order() {
        let corpus = Corpus::new(vec![
            record("tt0000001", MediaKind::Film, "A"),
            record("tt0000002", MediaKind::Series, "B"),
            record("tt0000003", MediaKind::Film, "C"),
        ]);

        let films: Vec<&str> = corpus
            .pool(MediaKind::Film)
            .iter()
            .map(|r| r.title.as_str())
            .collect();
        assert_eq!(films, vec!["A", "C"]);
        assert_eq!(corpus.pool(MediaKind::Series).len(), 1);
        assert_eq!(corpus.len(), 3);
    }

    #[test]
    fn test_find_returns_first_occurrence() {
        let corpus = Corpus::new(vec![
            record("tt0000001", MediaKind::Film, "First"),
            record("tt0000001", MediaKind::Film, "Second"),
        ]);

        assert_eq!(corpus.find("tt0000001").map(|r| r.title.as_str()), Some("First"));
        assert!(corpus.find("tt9999999").is_none());
    }

    #[test]
    fn test_find_prefers_films_over_series() {
        let corpus = Corpus::new(vec![
            record("tt0000001", MediaKind::Series, "Series first"),
            record("tt0000001", MediaKind::Film, "Film second"),
        ]);

        assert_eq!(
            corpus.find("tt0000001").map(|r| r.title.as_str()),
            Some("Film second")
        );
    }

    #[test]
    fn test_integrity_report_flags_duplicates_and_malformed_ids() {
        let records = vec![
            record("tt0133093", MediaKind::Film, "The Matrix"),
            record("tt0133093", MediaKind::Film, "The Matrix (again)"),
            record("tt0133093", MediaKind::Film, "The Matrix (thrice)"),
            record("tt12345678", MediaKind::Series, "Eight digits"),
            record("human_0001", MediaKind::Film, "Original"),
            record("tt123", MediaKind::Film, "Too short"),
            record("imdb0133093", MediaKind::Film, "Wrong prefix"),
        ];

        let report = IntegrityReport::check(&records);
        assert_eq!(report.duplicate_ids, vec!["tt0133093"]);
        assert_eq!(report.malformed_ids, vec!["tt123", "imdb0133093"]);
    }

    #[test]
    fn test_duplicates_do_not_block_loading() {
        let corpus = Corpus::from_json(
            r#"[
                {"id": "tt0000001", "type": "film", "title": "One"},
                {"id": "tt0000001", "type": "film", "title": "Two"}
            ]"#,
        )
        .unwrap();
        assert_eq!(corpus.len(), 2);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(matches!(
            Corpus::from_json("{not json"),
            Err(CorpusError::Parse(_))
        ));
    }

    #[test]
    fn test_load_or_empty_degrades_on_missing_file() {
        let corpus = Corpus::load_or_empty("/definitely/not/here/corpus.json");
        assert!(corpus.is_empty());
    }

    #[test]
    fn test_load_or_empty_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": "tt0000001", "type": "series", "title": "Twin Peaks"}}]"#
        )
        .unwrap();

        let corpus = Corpus::load_or_empty(file.path());
        assert_eq!(corpus.pool(MediaKind::Series).len(), 1);
    }
}
