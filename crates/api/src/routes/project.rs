//! Route definitions for the `/projects` resource.
//!
//! Also nests characters, objects, and scene listing/creation under
//! `/projects/{project_id}/...`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{character, object, project, scene};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                                  -> list
/// POST   /                                  -> create
/// GET    /{project_id}                      -> get_by_id
/// PUT    /{project_id}                      -> update
/// DELETE /{project_id}                      -> delete
/// POST   /{project_id}/restore              -> restore
///
/// GET    /{project_id}/characters           -> list_by_project
/// POST   /{project_id}/characters           -> create
/// GET    /{project_id}/characters/{id}      -> get_by_id
/// PUT    /{project_id}/characters/{id}      -> update
/// DELETE /{project_id}/characters/{id}      -> delete
///
/// GET    /{project_id}/objects              -> list_by_project
/// POST   /{project_id}/objects              -> create
/// GET    /{project_id}/objects/{id}         -> get_by_id
/// PUT    /{project_id}/objects/{id}         -> update
/// DELETE /{project_id}/objects/{id}         -> delete
///
/// GET    /{project_id}/scenes               -> list_by_project
/// POST   /{project_id}/scenes               -> create
/// ```
pub fn router() -> Router<AppState> {
    let character_routes = Router::new()
        .route("/", get(character::list_by_project).post(character::create))
        .route(
            "/{id}",
            get(character::get_by_id)
                .put(character::update)
                .delete(character::delete),
        );

    let object_routes = Router::new()
        .route("/", get(object::list_by_project).post(object::create))
        .route(
            "/{id}",
            get(object::get_by_id)
                .put(object::update)
                .delete(object::delete),
        );

    let scene_routes =
        Router::new().route("/", get(scene::list_by_project).post(scene::create));

    Router::new()
        .route("/", get(project::list).post(project::create))
        .route(
            "/{project_id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
        .route("/{project_id}/restore", post(project::restore))
        .nest("/{project_id}/characters", character_routes)
        .nest("/{project_id}/objects", object_routes)
        .nest("/{project_id}/scenes", scene_routes)
}
