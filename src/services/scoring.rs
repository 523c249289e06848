use std::collections::HashSet;

use crate::models::{Genre, Mode, Preferences, TitleRecord};

use super::tokenizer::token_set;

/// Reward for carrying the primary genre
pub const PRIMARY_GENRE_WEIGHT: f64 = 3.0;
/// Reward for carrying the secondary genre
pub const SECONDARY_GENRE_WEIGHT: f64 = 1.0;
/// Penalty for carrying the excluded genre
pub const EXCLUDE_GENRE_PENALTY: f64 = 2.0;
/// Share of the popularity weight always added
pub const POPULARITY_WEIGHT: f64 = 0.5;
/// Scale of the mode bonus, applied to popularity or to its complement
pub const MODE_BONUS_SCALE: f64 = 1.1;

pub const ARTHOUSE_BONUS: f64 = 0.3;
pub const EXPERIMENTAL_BONUS: f64 = 0.2;
pub const SURREAL_BONUS: f64 = 0.2;

/// Flat bonus for any seed match
pub const SEED_MATCH_BASE: f64 = 0.6;
/// Bonus per distinct matched seed token
pub const SEED_PER_MATCH: f64 = 0.35;
/// Ceiling on the per-match bonus
pub const SEED_PER_MATCH_CAP: f64 = 1.6;
/// Scale of the matched / total seed token ratio
pub const SEED_OVERLAP_WEIGHT: f64 = 0.4;

/// Relevance of a title for a preference configuration.
///
/// `seed_tokens` must be the tokenized `prefs.seed`; it is passed in so a
/// selection tokenizes the seed once.
pub fn score(title: &TitleRecord, prefs: &Preferences, seed_tokens: &[String]) -> f64 {
    genre_score(title, prefs)
        + mode_bonus(title, prefs.mode)
        + seed_score(title, seed_tokens)
        + POPULARITY_WEIGHT * title.popularity()
}

/// Primary and secondary rewards minus the exclusion penalty
pub fn genre_score(title: &TitleRecord, prefs: &Preferences) -> f64 {
    let carries = |genre: Option<Genre>| genre.is_some_and(|g| title.has_genre(g));

    let mut score = 0.0;
    if carries(prefs.primary_genre) {
        score += PRIMARY_GENRE_WEIGHT;
    }
    if carries(prefs.secondary_genre) {
        score += SECONDARY_GENRE_WEIGHT;
    }
    if carries(prefs.exclude) {
        score -= EXCLUDE_GENRE_PENALTY;
    }
    score
}

pub fn mode_bonus(title: &TitleRecord, mode: Mode) -> f64 {
    let popularity = title.popularity();

    match mode {
        Mode::Canon => popularity * MODE_BONUS_SCALE,
        Mode::Oddities => {
            let mut bonus = (1.0 - popularity) * MODE_BONUS_SCALE;
            if let Some(flags) = &title.vibe_flags {
                if flags.arthouse {
                    bonus += ARTHOUSE_BONUS;
                }
                if flags.experimental {
                    bonus += EXPERIMENTAL_BONUS;
                }
                if flags.surreal {
                    bonus += SURREAL_BONUS;
                }
            }
            bonus
        }
    }
}

/// Free-text match between seed tokens and the title's descriptive metadata.
///
/// The overlap ratio divides distinct matches by the full seed token count,
/// repeats included, so repeating a seed word lowers it.
pub fn seed_score(title: &TitleRecord, seed_tokens: &[String]) -> f64 {
    if seed_tokens.is_empty() {
        return 0.0;
    }

    let haystack = metadata_tokens(title);
    let distinct: HashSet<&str> = seed_tokens.iter().map(String::as_str).collect();
    let matches = distinct
        .iter()
        .filter(|token| haystack.contains(**token))
        .count();

    if matches == 0 {
        return 0.0;
    }

    let matches = matches as f64;
    SEED_MATCH_BASE
        + (matches * SEED_PER_MATCH).min(SEED_PER_MATCH_CAP)
        + (matches / seed_tokens.len() as f64) * SEED_OVERLAP_WEIGHT
}

/// Token set over tags, title, director and vibe notes
fn metadata_tokens(title: &TitleRecord) -> HashSet<String> {
    let notes = title
        .vibe_flags
        .as_ref()
        .and_then(|flags| flags.notes.as_deref());

    token_set(
        title
            .tags
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(title.title.as_str()))
            .chain(title.director.as_deref())
            .chain(notes),
    )
}
