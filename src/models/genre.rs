use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::Display;

/// Fixed genre vocabulary shared by the normalizer, the corpus and the
/// configuration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Genre {
    Action,
    Adventure,
    Animation,
    Comedy,
    Crime,
    Documentary,
    Drama,
    Fantasy,
    Horror,
    Mystery,
    Romance,
    SciFi,
    Thriller,
    War,
    Western,
}

impl Genre {
    /// Every genre, in display order
    pub const ALL: [Genre; 15] = [
        Genre::Action,
        Genre::Adventure,
        Genre::Animation,
        Genre::Comedy,
        Genre::Crime,
        Genre::Documentary,
        Genre::Drama,
        Genre::Fantasy,
        Genre::Horror,
        Genre::Mystery,
        Genre::Romance,
        Genre::SciFi,
        Genre::Thriller,
        Genre::War,
        Genre::Western,
    ];

    /// Display name, also used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Adventure => "Adventure",
            Genre::Animation => "Animation",
            Genre::Comedy => "Comedy",
            Genre::Crime => "Crime",
            Genre::Documentary => "Documentary",
            Genre::Drama => "Drama",
            Genre::Fantasy => "Fantasy",
            Genre::Horror => "Horror",
            Genre::Mystery => "Mystery",
            Genre::Romance => "Romance",
            Genre::SciFi => "Sci-Fi",
            Genre::Thriller => "Thriller",
            Genre::War => "War",
            Genre::Western => "Western",
        }
    }

    /// Case-insensitive lookup against the vocabulary.
    ///
    /// Returns `None` for anything outside it, including the empty string.
    pub fn parse(value: &str) -> Option<Genre> {
        Genre::ALL
            .iter()
            .copied()
            .find(|genre| genre.as_str().eq_ignore_ascii_case(value))
    }
}

impl Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Genre {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Decodes a genre list, dropping tags outside the vocabulary
pub(crate) fn lenient_genres<'de, D>(deserializer: D) -> Result<Vec<Genre>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Vec<String> = Vec::deserialize(deserializer)?;
    let mut genres = Vec::with_capacity(raw.len());

    for tag in raw {
        match Genre::parse(&tag) {
            Some(genre) if !genres.contains(&genre) => genres.push(genre),
            Some(_) => {}
            None => tracing::warn!(genre = %tag, "Dropping unknown genre tag"),
        }
    }

    Ok(genres)
}
