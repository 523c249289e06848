use axum::{middleware, routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::request_id::{make_span_with_request_id, request_id_middleware};

use super::handlers;
use super::AppState;

/// Creates the addon router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Addon protocol
        .route("/manifest.json", get(handlers::manifest))
        .route("/catalog/:type/:file", get(handlers::catalog))
        .route("/meta/:type/:file", get(handlers::meta))
        .with_state(state)
        .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
        .layer(middleware::from_fn(request_id_middleware))
        // The media client fetches from arbitrary origins
        .layer(CorsLayer::permissive())
}
