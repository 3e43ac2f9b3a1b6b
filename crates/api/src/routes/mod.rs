pub mod admin;
pub mod auth;
pub mod credits;
pub mod health;
pub mod project;
pub mod prompt_history;
pub mod scene;
pub mod shot;
pub mod specialist;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /auth/register                                   register (public)
/// /auth/login                                      login (public)
/// /auth/logout                                     logout
/// /auth/me                                         current user
///
/// /credits                                         balance + ledger
/// /admin/users/{id}/credits                        adjust (admin only)
///
/// /specialists                                     list models
/// /prompts                                         prompt history
///
/// /projects                                        list, create
/// /projects/{id}                                   get, update, delete
/// /projects/{id}/restore                           restore
/// /projects/{project_id}/characters                list, create
/// /projects/{project_id}/characters/{id}           get, update, delete
/// /projects/{project_id}/objects                   list, create
/// /projects/{project_id}/objects/{id}              get, update, delete
/// /projects/{project_id}/scenes                    list, create
///
/// /scenes/{id}                                     get, update, delete
/// /scenes/{scene_id}/shots                         list, create
///
/// /shots/{id}                                      get, update, delete
/// /shots/{id}/entities                             mention filter preview
/// /shots/{id}/generate                             generate prompt
/// /shots/{id}/prompts                              shot prompt history
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/credits", credits::router())
        .nest("/admin", admin::router())
        .nest("/specialists", specialist::router())
        .nest("/prompts", prompt_history::router())
        .nest("/projects", project::router())
        .nest("/scenes", scene::router())
        .nest("/shots", shot::router())
}
