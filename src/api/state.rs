use std::sync::Arc;

use crate::services::{Catalog, Corpus};

/// Shared application state
///
/// The corpus is read-only after startup, so no lock is needed.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    /// Maximum titles per catalog response
    pub catalog_size: usize,
}

impl AppState {
    /// Creates the state around a loaded corpus
    pub fn new(corpus: Corpus, catalog_size: usize) -> Self {
        Self {
            catalog: Arc::new(Catalog::new(Arc::new(corpus))),
            catalog_size,
        }
    }
}
