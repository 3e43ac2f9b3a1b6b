use std::sync::Arc;

use shotpilot_rag::PromptBackend;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything inside is a pool handle or behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: shotpilot_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Prompt generation backend (the RAG service in production).
    pub prompt_backend: Arc<dyn PromptBackend>,
}
