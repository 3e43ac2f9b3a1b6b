//! Handlers for characters nested under `/projects/{project_id}/characters`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use shotpilot_core::error::CoreError;
use shotpilot_core::types::DbId;
use shotpilot_core::validation::{validate_name, validate_optional_name};
use shotpilot_db::models::character::{Character, CreateCharacter, UpdateCharacter};
use shotpilot_db::repositories::CharacterRepo;

use super::ensure_project;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Character",
        id,
    })
}

/// POST /api/v1/projects/{project_id}/characters
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateCharacter>,
) -> AppResult<(StatusCode, Json<Character>)> {
    ensure_project(&state.pool, project_id, auth.user_id).await?;
    validate_name("Character", &input.name)?;
    let character = CharacterRepo::create(&state.pool, project_id, &input).await?;
    Ok((StatusCode::CREATED, Json(character)))
}

/// GET /api/v1/projects/{project_id}/characters
pub async fn list_by_project(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<Character>>> {
    ensure_project(&state.pool, project_id, auth.user_id).await?;
    let characters = CharacterRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(characters))
}

/// GET /api/v1/projects/{project_id}/characters/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((project_id, id)): Path<(DbId, DbId)>,
) -> AppResult<Json<Character>> {
    ensure_project(&state.pool, project_id, auth.user_id).await?;
    let character = CharacterRepo::find_in_project(&state.pool, project_id, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(character))
}

/// PUT /api/v1/projects/{project_id}/characters/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((project_id, id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateCharacter>,
) -> AppResult<Json<Character>> {
    ensure_project(&state.pool, project_id, auth.user_id).await?;
    validate_optional_name("Character", input.name.as_deref())?;
    let character = CharacterRepo::update(&state.pool, project_id, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(character))
}

/// DELETE /api/v1/projects/{project_id}/characters/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((project_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    ensure_project(&state.pool, project_id, auth.user_id).await?;
    if CharacterRepo::delete(&state.pool, project_id, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
