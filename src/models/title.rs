use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt::Display;

use super::genre::{lenient_genres, Genre};

/// Popularity assumed for records that carry no usable weight
pub const DEFAULT_POPULARITY_WEIGHT: f64 = 0.6;

/// Media kind of a title
///
/// Records say `film` (or `movie`); the media client only knows `movie`,
/// which is what goes out on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaKind {
    #[serde(rename = "movie", alias = "film")]
    Film,
    #[serde(rename = "series")]
    Series,
}

impl MediaKind {
    /// Parses the type segment the media client puts in request paths
    pub fn from_wire(value: &str) -> Option<MediaKind> {
        match value {
            "movie" | "film" => Some(MediaKind::Film),
            "series" => Some(MediaKind::Series),
            _ => None,
        }
    }

    pub fn as_wire(&self) -> &'static str {
        match self {
            MediaKind::Film => "movie",
            MediaKind::Series => "series",
        }
    }
}

impl Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_wire())
    }
}

/// Optional editorial flags that only influence "oddities" ranking
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VibeFlags {
    #[serde(default)]
    pub arthouse: bool,
    #[serde(default)]
    pub experimental: bool,
    #[serde(default)]
    pub surreal: bool,
    #[serde(default)]
    pub notes: Option<String>,
}

/// External link shown on the detail page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub name: String,
    #[serde(default)]
    pub category: String,
    pub url: String,
}

/// A curated title as stored in the corpus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleRecord {
    /// `tt` + 7-8 digits for public catalog entries, `human_...` for originals
    pub id: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub title: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default, deserialize_with = "lenient_genres")]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub director: Option<String>,
    #[serde(default)]
    pub cast: Vec<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "lenient_links")]
    pub links: Vec<Link>,
    #[serde(default, deserialize_with = "lenient_weight")]
    pub popularity_weight: Option<f64>,
    #[serde(default)]
    pub vibe_flags: Option<VibeFlags>,
}

impl TitleRecord {
    /// Creates a bare record; the remaining metadata defaults to empty
    pub fn new(id: impl Into<String>, kind: MediaKind, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            title: title.into(),
            year: None,
            genres: Vec::new(),
            tags: Vec::new(),
            director: None,
            cast: Vec::new(),
            summary: None,
            links: Vec::new(),
            popularity_weight: None,
            vibe_flags: None,
        }
    }

    /// Popularity in [0, 1], falling back to the corpus default
    pub fn popularity(&self) -> f64 {
        self.popularity_weight.unwrap_or(DEFAULT_POPULARITY_WEIGHT)
    }

    pub fn has_genre(&self, genre: Genre) -> bool {
        self.genres.contains(&genre)
    }
}

/// Decodes links one by one, dropping the malformed ones
fn lenient_links<'de, D>(deserializer: D) -> Result<Vec<Link>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Vec<Value> = Vec::deserialize(deserializer)?;

    Ok(raw
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<Link>(value) {
            Ok(link) => Some(link),
            Err(e) => {
                tracing::warn!(error = %e, "Dropping malformed link");
                None
            }
        })
        .collect())
}

/// Keeps numeric weights and treats anything else as absent
fn lenient_weight<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_f64()).filter(|w| w.is_finite()))
}
