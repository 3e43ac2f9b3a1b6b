//! Credit pre-check extractor for paid operations.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use shotpilot_core::credits::ensure_sufficient;
use shotpilot_core::error::CoreError;
use shotpilot_db::repositories::CreditRepo;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// An authenticated user whose balance covers one generation.
///
/// Rejects with 402 Payment Required when `credits < generation_cost`.
/// This is a fast pre-check only; the charge itself is re-guarded in the
/// database when it is applied.
#[derive(Debug, Clone)]
pub struct CreditGuard {
    pub user: AuthUser,
    /// Balance observed at extraction time.
    pub balance: i32,
}

impl FromRequestParts<AppState> for CreditGuard {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;

        let balance = CreditRepo::balance(&state.pool, user.user_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "User",
                id: user.user_id,
            }))?;

        ensure_sufficient(balance, state.config.generation_cost)?;

        Ok(CreditGuard { user, balance })
    }
}
