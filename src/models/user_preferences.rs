use serde::Serialize;
use serde_json::{Map, Value};

use super::Genre;

/// Hard cap applied to the seed by the normalizer
pub const SEED_MAX_CHARS: usize = 600;

/// Cap applied where user input is collected
pub const SEED_INPUT_MAX_CHARS: usize = 300;

/// Raw, loosely-typed preference fields as supplied by a caller
pub type RawPreferences = Map<String, Value>;

/// Ranking strategy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Favors mainstream, popular titles
    #[default]
    Canon,
    /// Favors obscure and experimental titles
    Oddities,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Canon => "canon",
            Mode::Oddities => "oddities",
        }
    }
}

/// Canonical preference configuration, built fresh for every request
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub primary_genre: Option<Genre>,
    pub secondary_genre: Option<Genre>,
    pub exclude: Option<Genre>,
    pub mode: Mode,
    pub seed: String,
}

impl Preferences {
    /// Normalizes a raw preference bag.
    ///
    /// Total: unknown genres, wrong types and missing keys all degrade to
    /// the defaults instead of failing.
    pub fn normalize(raw: &RawPreferences) -> Self {
        Self {
            primary_genre: genre_field(raw, "primaryGenre"),
            secondary_genre: genre_field(raw, "secondaryGenre"),
            exclude: genre_field(raw, "exclude"),
            mode: match raw.get("mode") {
                Some(Value::String(mode)) if mode == "oddities" => Mode::Oddities,
                _ => Mode::Canon,
            },
            seed: match raw.get("seed") {
                Some(Value::String(seed)) => clean_seed(seed, SEED_MAX_CHARS),
                _ => String::new(),
            },
        }
    }

    /// Converts back into a raw bag; unset fields are omitted
    pub fn to_raw(&self) -> RawPreferences {
        let mut raw = Map::new();
        let genres = [
            ("primaryGenre", self.primary_genre),
            ("secondaryGenre", self.secondary_genre),
            ("exclude", self.exclude),
        ];
        for (key, genre) in genres {
            if let Some(genre) = genre {
                raw.insert(key.to_string(), Value::from(genre.as_str()));
            }
        }
        raw.insert("mode".to_string(), Value::from(self.mode.as_str()));
        if !self.seed.is_empty() {
            raw.insert("seed".to_string(), Value::from(self.seed.clone()));
        }
        raw
    }
}

fn genre_field(raw: &RawPreferences, key: &str) -> Option<Genre> {
    raw.get(key)
        .and_then(Value::as_str)
        .and_then(Genre::parse)
}

/// Trims and truncates to `max_chars` characters.
///
/// Trailing whitespace exposed by the cut is trimmed too, so cleaning an
/// already clean seed is a no-op.
pub fn clean_seed(seed: &str, max_chars: usize) -> String {
    let truncated: String = seed.trim().chars().take(max_chars).collect();
    truncated.trim_end().to_string()
}
