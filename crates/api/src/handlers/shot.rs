//! Handlers for shots.
//!
//! Listing and creation are nested under `/scenes/{scene_id}/shots`;
//! everything else is addressed directly at `/shots/{id}`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use shotpilot_core::error::CoreError;
use shotpilot_core::mention::{filter_entities, FilterResult, TracingObserver};
use shotpilot_core::types::DbId;
use shotpilot_core::validation::validate_shot_number;
use shotpilot_db::models::character::Character;
use shotpilot_db::models::object_item::ObjectItem;
use shotpilot_db::models::shot::{CreateShot, Shot, UpdateShot};
use shotpilot_db::repositories::{CharacterRepo, ObjectRepo, ShotRepo};

use super::{ensure_scene, ensure_shot};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Response for `GET /shots/{id}/entities`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityPreview<'e> {
    #[serde(flatten)]
    pub filter: FilterResult<'e, Character, ObjectItem>,
    pub unmatched_names: Vec<String>,
}

/// POST /api/v1/scenes/{scene_id}/shots
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(scene_id): Path<DbId>,
    Json(input): Json<CreateShot>,
) -> AppResult<(StatusCode, Json<Shot>)> {
    ensure_scene(&state.pool, scene_id, auth.user_id).await?;
    validate_shot_number(input.shot_number)?;
    let shot = ShotRepo::create(&state.pool, scene_id, &input).await?;
    Ok((StatusCode::CREATED, Json(shot)))
}

/// GET /api/v1/scenes/{scene_id}/shots
pub async fn list_by_scene(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(scene_id): Path<DbId>,
) -> AppResult<Json<Vec<Shot>>> {
    ensure_scene(&state.pool, scene_id, auth.user_id).await?;
    let shots = ShotRepo::list_by_scene(&state.pool, scene_id).await?;
    Ok(Json(shots))
}

/// GET /api/v1/shots/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Shot>> {
    let shot = ensure_shot(&state.pool, id, auth.user_id).await?;
    Ok(Json(shot))
}

/// PUT /api/v1/shots/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateShot>,
) -> AppResult<Json<Shot>> {
    ensure_shot(&state.pool, id, auth.user_id).await?;
    if let Some(number) = input.shot_number {
        validate_shot_number(number)?;
    }
    let shot = ShotRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Shot", id }))?;
    Ok(Json(shot))
}

/// DELETE /api/v1/shots/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    ensure_shot(&state.pool, id, auth.user_id).await?;
    ShotRepo::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/shots/{id}/entities
///
/// Which of the project's characters and objects this shot would send to a
/// specialist, without generating anything.
pub async fn entities(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    let shot = ensure_shot(&state.pool, id, auth.user_id).await?;
    let scene = ensure_scene(&state.pool, shot.scene_id, auth.user_id).await?;

    let characters = CharacterRepo::list_by_project(&state.pool, scene.project_id).await?;
    let objects = ObjectRepo::list_by_project(&state.pool, scene.project_id).await?;

    let filter = filter_entities(shot.mention_text(), &characters, &objects, &TracingObserver);
    let unmatched_names = filter
        .unmatched_names()
        .into_iter()
        .map(str::to_string)
        .collect();
    let preview = EntityPreview {
        unmatched_names,
        filter,
    };

    let body = serde_json::to_value(&preview)
        .map_err(|e| AppError::InternalError(format!("Serialization error: {e}")))?;
    Ok(Json(body))
}
