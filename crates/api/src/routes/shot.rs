//! Route definitions for the `/shots` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{generation, prompt_history, shot};
use crate::state::AppState;

/// Routes mounted at `/shots`.
///
/// ```text
/// GET    /{id}            -> get_by_id
/// PUT    /{id}            -> update
/// DELETE /{id}            -> delete
/// GET    /{id}/entities   -> entities
/// POST   /{id}/generate   -> generate (costs credits)
/// GET    /{id}/prompts    -> list_for_shot
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}",
            get(shot::get_by_id).put(shot::update).delete(shot::delete),
        )
        .route("/{id}/entities", get(shot::entities))
        .route("/{id}/generate", post(generation::generate))
        .route("/{id}/prompts", get(prompt_history::list_for_shot))
}
