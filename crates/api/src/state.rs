use std::sync::Arc;

use txcat_db::repositories::{CategoryRepo, QuestionRepo};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Category store.
    pub categories: Arc<CategoryRepo>,
    /// Question store.
    pub questions: Arc<QuestionRepo>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Build state around the given repositories.
    pub fn new(categories: CategoryRepo, questions: QuestionRepo, config: ServerConfig) -> Self {
        Self {
            categories: Arc::new(categories),
            questions: Arc::new(questions),
            config: Arc::new(config),
        }
    }
}
