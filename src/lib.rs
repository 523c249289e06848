//! Humanifesto: a small, hand-curated recommendation catalog served as a
//! media-client addon.
//!
//! The engine lives in [`services`]: preferences are normalized, the corpus
//! pool is filtered and scored, and the ranked shortlist is projected into
//! catalog or detail views. [`api`] is a thin axum adapter around it.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;
