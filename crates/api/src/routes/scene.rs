//! Route definitions for the `/scenes` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::{scene, shot};
use crate::state::AppState;

/// Routes mounted at `/scenes`.
///
/// ```text
/// GET    /{scene_id}           -> get_by_id
/// PUT    /{scene_id}           -> update
/// DELETE /{scene_id}           -> delete
///
/// GET    /{scene_id}/shots     -> list_by_scene
/// POST   /{scene_id}/shots     -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{scene_id}",
            get(scene::get_by_id)
                .put(scene::update)
                .delete(scene::delete),
        )
        .route("/{scene_id}/shots", get(shot::list_by_scene).post(shot::create))
}
