use icu_collator::{Collator, CollatorOptions};
use std::cmp::Ordering;

use crate::models::{Preferences, TitleRecord};

use super::scoring::score;
use super::tokenizer::tokenize;

/// A title that survived the hard filters, with its score
#[derive(Debug, Clone, Copy)]
pub struct ScoredTitle<'a> {
    pub title: &'a TitleRecord,
    pub score: f64,
}

/// Whether a title passes the primary-genre and exclusion filters.
///
/// The secondary genre never filters.
pub fn passes_filters(title: &TitleRecord, prefs: &Preferences) -> bool {
    if let Some(primary) = prefs.primary_genre {
        if !title.has_genre(primary) {
            return false;
        }
    }
    if let Some(exclude) = prefs.exclude {
        if title.has_genre(exclude) {
            return false;
        }
    }
    true
}

/// Filters, scores and orders the whole pool
pub fn rank<'a>(pool: &'a [TitleRecord], prefs: &Preferences) -> Vec<ScoredTitle<'a>> {
    let seed_tokens = tokenize(&prefs.seed);

    let mut ranked: Vec<ScoredTitle<'a>> = pool
        .iter()
        .filter(|title| passes_filters(title, prefs))
        .map(|title| ScoredTitle {
            title,
            score: score(title, prefs, &seed_tokens),
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| compare_titles(&a.title.title, &b.title.title))
    });

    ranked
}

/// Top `limit` titles for the preferences, best first
pub fn select<'a>(pool: &'a [TitleRecord], prefs: &Preferences, limit: usize) -> Vec<&'a TitleRecord> {
    let mut ranked = rank(pool, prefs);
    ranked.truncate(limit);

    tracing::debug!(
        pool = pool.len(),
        selected = ranked.len(),
        limit,
        "Selection ranked"
    );

    ranked.into_iter().map(|scored| scored.title).collect()
}

thread_local! {
    /// Root-locale collator, built once per thread
    static TITLE_COLLATOR: Option<Collator> =
        Collator::try_new(&Default::default(), CollatorOptions::new())
            .map_err(|e| tracing::error!(error = ?e, "Failed to build title collator"))
            .ok();
}

/// Display-order comparison for titles.
///
/// Root-locale collation: accents and case only break ties between
/// otherwise equal letters, and lowercase sorts before uppercase.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    TITLE_COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| b.cmp(a)),
    })
}
