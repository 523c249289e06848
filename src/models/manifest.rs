use serde::Serialize;

use super::MediaKind;

/// Catalog id serving films
pub const MOVIES_CATALOG_ID: &str = "humanifesto_movies";

/// Catalog id serving series
pub const SERIES_CATALOG_ID: &str = "humanifesto_series";

/// Id prefixes this addon answers detail queries for
pub const ID_PREFIXES: [&str; 2] = ["tt", "human_"];

/// Addon manifest advertised to the media client
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub id: &'static str,
    pub version: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub resources: Vec<Resource>,
    pub types: Vec<MediaKind>,
    pub catalogs: Vec<CatalogEntry>,
    pub id_prefixes: Vec<&'static str>,
}

/// A served resource, either by bare name or with type/prefix restrictions
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Resource {
    Name(&'static str),
    #[serde(rename_all = "camelCase")]
    Scoped {
        name: &'static str,
        types: Vec<MediaKind>,
        id_prefixes: Vec<&'static str>,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogEntry {
    pub id: &'static str,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub name: &'static str,
}

impl Manifest {
    pub fn humanifesto() -> Self {
        let kinds = vec![MediaKind::Film, MediaKind::Series];
        Self {
            id: "community.humanifesto",
            version: env!("CARGO_PKG_VERSION"),
            name: "Humanifesto",
            description: "Tell it what you loved, and Humanifesto rolls out a small, hand-picked \
                list of films and shows that match the vibe. No accounts, no watchlist scraping.",
            resources: vec![
                Resource::Name("catalog"),
                Resource::Scoped {
                    name: "meta",
                    types: kinds.clone(),
                    id_prefixes: ID_PREFIXES.to_vec(),
                },
            ],
            types: kinds,
            catalogs: vec![
                CatalogEntry {
                    id: MOVIES_CATALOG_ID,
                    kind: MediaKind::Film,
                    name: "Humanifesto: Movies",
                },
                CatalogEntry {
                    id: SERIES_CATALOG_ID,
                    kind: MediaKind::Series,
                    name: "Humanifesto: Series",
                },
            ],
            id_prefixes: ID_PREFIXES.to_vec(),
        }
    }

    /// Media kind served by a catalog id, if the catalog exists
    pub fn catalog_kind(&self, catalog_id: &str) -> Option<MediaKind> {
        self.catalogs
            .iter()
            .find(|catalog| catalog.id == catalog_id)
            .map(|catalog| catalog.kind)
    }
}
