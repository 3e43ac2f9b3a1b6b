//! Handlers for objects (props) nested under `/projects/{project_id}/objects`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use shotpilot_core::error::CoreError;
use shotpilot_core::types::DbId;
use shotpilot_core::validation::{validate_name, validate_optional_name};
use shotpilot_db::models::object_item::{CreateObjectItem, ObjectItem, UpdateObjectItem};
use shotpilot_db::repositories::ObjectRepo;

use super::ensure_project;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Object",
        id,
    })
}

/// POST /api/v1/projects/{project_id}/objects
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateObjectItem>,
) -> AppResult<(StatusCode, Json<ObjectItem>)> {
    ensure_project(&state.pool, project_id, auth.user_id).await?;
    validate_name("Object", &input.name)?;
    let object = ObjectRepo::create(&state.pool, project_id, &input).await?;
    Ok((StatusCode::CREATED, Json(object)))
}

/// GET /api/v1/projects/{project_id}/objects
pub async fn list_by_project(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<ObjectItem>>> {
    ensure_project(&state.pool, project_id, auth.user_id).await?;
    let objects = ObjectRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(objects))
}

/// GET /api/v1/projects/{project_id}/objects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((project_id, id)): Path<(DbId, DbId)>,
) -> AppResult<Json<ObjectItem>> {
    ensure_project(&state.pool, project_id, auth.user_id).await?;
    let object = ObjectRepo::find_in_project(&state.pool, project_id, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(object))
}

/// PUT /api/v1/projects/{project_id}/objects/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((project_id, id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateObjectItem>,
) -> AppResult<Json<ObjectItem>> {
    ensure_project(&state.pool, project_id, auth.user_id).await?;
    validate_optional_name("Object", input.name.as_deref())?;
    let object = ObjectRepo::update(&state.pool, project_id, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(object))
}

/// DELETE /api/v1/projects/{project_id}/objects/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((project_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    ensure_project(&state.pool, project_id, auth.user_id).await?;
    if ObjectRepo::delete(&state.pool, project_id, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
