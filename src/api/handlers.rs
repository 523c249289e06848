use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

use crate::error::{AppError, AppResult};
use crate::middleware::request_id::RequestId;
use crate::models::{
    clean_seed, DetailView, Manifest, MediaKind, RawPreferences, SummaryView, SEED_INPUT_MAX_CHARS,
};

use super::AppState;

// Response types

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub metas: Vec<SummaryView>,
}

#[derive(Debug, Serialize)]
pub struct MetaResponse {
    pub meta: DetailView,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Addon manifest
pub async fn manifest(State(state): State<AppState>) -> Json<Manifest> {
    Json(state.catalog.manifest().clone())
}

/// Ranked catalog for the preferences carried in the query string
pub async fn catalog(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path((kind, file)): Path<(String, String)>,
    Query(params): Query<HashMap<String, String>>,
) -> AppResult<Json<CatalogResponse>> {
    let kind = parse_kind(&kind)?;
    let catalog_id = strip_json(&file);
    let raw = preferences_from_query(params);

    let metas = state
        .catalog
        .list_catalog(kind, catalog_id, &raw, state.catalog_size);

    tracing::info!(
        request_id = %request_id,
        kind = %kind,
        catalog_id,
        results = metas.len(),
        "Catalog served"
    );

    Ok(Json(CatalogResponse { metas }))
}

/// Detail view for a single title
pub async fn meta(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path((kind, file)): Path<(String, String)>,
) -> AppResult<Json<MetaResponse>> {
    parse_kind(&kind)?;
    let id = strip_json(&file);

    match state.catalog.detail(id) {
        Some(meta) => Ok(Json(MetaResponse { meta })),
        None => {
            tracing::info!(request_id = %request_id, id, "Unknown title requested");
            Err(AppError::NotFound(format!("No title with id {}", id)))
        }
    }
}

fn parse_kind(kind: &str) -> AppResult<MediaKind> {
    MediaKind::from_wire(kind)
        .ok_or_else(|| AppError::InvalidInput(format!("Unsupported type: {}", kind)))
}

/// The media client addresses resources as `<name>.json`
fn strip_json(file: &str) -> &str {
    file.strip_suffix(".json").unwrap_or(file)
}

/// Collects query parameters into a raw preference bag.
///
/// The seed is capped at the user-facing limit here, before normalization.
fn preferences_from_query(params: HashMap<String, String>) -> RawPreferences {
    params
        .into_iter()
        .map(|(key, value)| {
            let value = if key == "seed" {
                clean_seed(&value, SEED_INPUT_MAX_CHARS)
            } else {
                value
            };
            (key, Value::String(value))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_json() {
        assert_eq!(strip_json("humanifesto_movies.json"), "humanifesto_movies");
        assert_eq!(strip_json("tt0133093"), "tt0133093");
    }

    #[test]
    fn test_query_seed_is_capped() {
        let mut params = HashMap::new();
        params.insert("seed".to_string(), "y".repeat(500));
        params.insert("mode".to_string(), "oddities".to_string());

        let raw = preferences_from_query(params);
        assert_eq!(raw["seed"].as_str().map(|s| s.len()), Some(SEED_INPUT_MAX_CHARS));
        assert_eq!(raw["mode"], "oddities");
    }

    #[test]
    fn test_parse_kind_rejects_unknown() {
        assert!(matches!(parse_kind("channel"), Err(AppError::InvalidInput(_))));
        assert_eq!(parse_kind("movie").ok(), Some(MediaKind::Film));
    }
}
