use serde::Serialize;

use super::{Genre, Link, MediaKind, TitleRecord};

/// Artwork service the media client already knows how to fetch from
pub const POSTER_URL_BASE: &str = "https://images.metahub.space/poster/medium";

/// Poster URL for a title id
pub fn poster_url(id: &str) -> String {
    format!("{}/{}/img", POSTER_URL_BASE, id)
}

/// List-view projection of a title
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SummaryView {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub name: String,
    pub year: Option<i32>,
    pub genres: Vec<Genre>,
    pub poster: String,
}

impl From<&TitleRecord> for SummaryView {
    fn from(record: &TitleRecord) -> Self {
        Self {
            id: record.id.clone(),
            kind: record.kind,
            name: record.title.clone(),
            year: record.year,
            genres: record.genres.clone(),
            poster: poster_url(&record.id),
        }
    }
}

/// Single-item projection with the descriptive metadata
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DetailView {
    #[serde(flatten)]
    pub summary: SummaryView,
    pub description: String,
    pub director: Option<String>,
    pub cast: Vec<String>,
    pub links: Vec<Link>,
}

impl From<&TitleRecord> for DetailView {
    fn from(record: &TitleRecord) -> Self {
        Self {
            summary: SummaryView::from(record),
            description: record.summary.clone().unwrap_or_default(),
            director: record.director.clone(),
            cast: record.cast.clone(),
            links: record.links.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stalker() -> TitleRecord {
        let mut record = TitleRecord::new("tt0079944", MediaKind::Film, "Stalker");
        record.year = Some(1979);
        record.genres = vec![Genre::SciFi, Genre::Drama];
        record.director = Some("Andrei Tarkovsky".to_string());
        record
    }

    #[test]
    fn test_summary_projection() {
        let summary = SummaryView::from(&stalker());
        assert_eq!(summary.id, "tt0079944");
        assert_eq!(summary.name, "Stalker");
        assert_eq!(summary.year, Some(1979));
        assert_eq!(
            summary.poster,
            "https://images.metahub.space/poster/medium/tt0079944/img"
        );
    }

    #[test]
    fn test_detail_projection_defaults() {
        let detail = DetailView::from(&stalker());
        assert_eq!(detail.description, "");
        assert!(detail.cast.is_empty());
        assert!(detail.links.is_empty());
        assert_eq!(detail.director.as_deref(), Some("Andrei Tarkovsky"));
    }

    #[test]
    fn test_detail_serializes_flat() {
        let value = serde_json::to_value(DetailView::from(&stalker())).unwrap();
        assert_eq!(value["type"], "movie");
        assert_eq!(value["name"], "Stalker");
        assert_eq!(value["genres"][0], "Sci-Fi");
        assert_eq!(value["description"], "");
        assert!(value.get("summary").is_none());
    }
}
