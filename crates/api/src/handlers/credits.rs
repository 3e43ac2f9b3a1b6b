//! Handlers for credit balances and admin adjustments.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use shotpilot_core::credits::{apply_adjustment, REASON_ADMIN_ADJUSTMENT};
use shotpilot_core::error::CoreError;
use shotpilot_core::types::DbId;
use shotpilot_db::models::credit::CreditTransaction;
use shotpilot_db::repositories::CreditRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::query::PaginationParams;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CreditsResponse {
    pub balance: i32,
    /// Newest first.
    pub transactions: Vec<CreditTransaction>,
}

/// Request body for `POST /admin/users/{id}/credits`.
#[derive(Debug, Deserialize)]
pub struct AdjustCreditsRequest {
    /// Signed amount; negative values revoke credits.
    pub amount: i32,
}

/// GET /api/v1/credits
pub async fn get_credits(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<CreditsResponse>> {
    let (limit, offset) = params.clamped();

    let balance = CreditRepo::balance(&state.pool, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth.user_id,
        }))?;
    let transactions = CreditRepo::list_for_user(&state.pool, auth.user_id, limit, offset).await?;

    Ok(Json(CreditsResponse {
        balance,
        transactions,
    }))
}

/// POST /api/v1/admin/users/{id}/credits
///
/// Grant (positive) or revoke (negative) credits. The balance may not go
/// below zero.
pub async fn adjust(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(user_id): Path<DbId>,
    Json(input): Json<AdjustCreditsRequest>,
) -> AppResult<Json<CreditTransaction>> {
    let balance = CreditRepo::balance(&state.pool, user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user_id,
        }))?;
    apply_adjustment(balance, input.amount)?;

    let entry = CreditRepo::adjust(&state.pool, user_id, input.amount, REASON_ADMIN_ADJUSTMENT)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Conflict(
                "Balance changed during the adjustment; retry".into(),
            ))
        })?;

    tracing::info!(
        admin_id = admin.user_id,
        user_id,
        amount = input.amount,
        balance_after = entry.balance_after,
        "Credits adjusted"
    );

    Ok(Json(entry))
}
