//! Handlers for scenes.
//!
//! Listing and creation are nested under `/projects/{project_id}/scenes`;
//! everything else is addressed directly at `/scenes/{id}`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use shotpilot_core::error::CoreError;
use shotpilot_core::types::DbId;
use shotpilot_core::validation::{validate_name, validate_optional_name};
use shotpilot_db::models::scene::{CreateScene, Scene, UpdateScene};
use shotpilot_db::repositories::SceneRepo;

use super::{ensure_project, ensure_scene};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /api/v1/projects/{project_id}/scenes
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateScene>,
) -> AppResult<(StatusCode, Json<Scene>)> {
    ensure_project(&state.pool, project_id, auth.user_id).await?;
    validate_name("Scene", &input.name)?;
    let scene = SceneRepo::create(&state.pool, project_id, &input).await?;
    Ok((StatusCode::CREATED, Json(scene)))
}

/// GET /api/v1/projects/{project_id}/scenes
pub async fn list_by_project(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<Scene>>> {
    ensure_project(&state.pool, project_id, auth.user_id).await?;
    let scenes = SceneRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(scenes))
}

/// GET /api/v1/scenes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Scene>> {
    let scene = ensure_scene(&state.pool, id, auth.user_id).await?;
    Ok(Json(scene))
}

/// PUT /api/v1/scenes/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateScene>,
) -> AppResult<Json<Scene>> {
    ensure_scene(&state.pool, id, auth.user_id).await?;
    validate_optional_name("Scene", input.name.as_deref())?;
    let scene = SceneRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Scene",
            id,
        }))?;
    Ok(Json(scene))
}

/// DELETE /api/v1/scenes/{id}
///
/// Deletes the scene and, by cascade, its shots.
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    ensure_scene(&state.pool, id, auth.user_id).await?;
    SceneRepo::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
