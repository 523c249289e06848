pub mod genre;
pub mod manifest;
pub mod title;
pub mod user_preferences;
pub mod views;

pub use genre::Genre;
pub use manifest::{CatalogEntry, Manifest, Resource, MOVIES_CATALOG_ID, SERIES_CATALOG_ID};
pub use title::{Link, MediaKind, TitleRecord, VibeFlags, DEFAULT_POPULARITY_WEIGHT};
pub use user_preferences::{
    clean_seed, Mode, Preferences, RawPreferences, SEED_INPUT_MAX_CHARS, SEED_MAX_CHARS,
};
pub use views::{poster_url, DetailView, SummaryView};
