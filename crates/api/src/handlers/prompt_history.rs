//! Handlers for previously generated prompts.

use axum::extract::{Path, Query, State};
use axum::Json;
use shotpilot_core::types::DbId;
use shotpilot_db::models::prompt_history::PromptHistoryEntry;
use shotpilot_db::repositories::PromptHistoryRepo;

use super::ensure_shot;
use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/prompts
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<PromptHistoryEntry>>>> {
    let (limit, offset) = params.clamped();
    let entries = PromptHistoryRepo::list_for_user(&state.pool, auth.user_id, limit, offset).await?;
    Ok(Json(DataResponse { data: entries }))
}

/// GET /api/v1/shots/{id}/prompts
pub async fn list_for_shot(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<PromptHistoryEntry>>>> {
    ensure_shot(&state.pool, id, auth.user_id).await?;
    let (limit, offset) = params.clamped();
    let entries =
        PromptHistoryRepo::list_for_shot(&state.pool, auth.user_id, id, limit, offset).await?;
    Ok(Json(DataResponse { data: entries }))
}
