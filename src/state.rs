use std::sync::Arc;

use crate::db::ReviewStore;
use crate::sentiment::{SentimentScorer, VaderScorer};

/// Shared state for all handlers
pub struct AppState {
    pub store: ReviewStore,
    // Stateless, safe to share between workers
    pub scorer: Arc<dyn SentimentScorer>,
}

impl AppState {
    pub fn new(store: ReviewStore, scorer: Arc<dyn SentimentScorer>) -> Self {
        Self { store, scorer }
    }

    pub fn with_vader(store: ReviewStore) -> Self {
        Self::new(store, Arc::new(VaderScorer::new()))
    }
}
