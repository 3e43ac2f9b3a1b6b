//! Handler listing the available prompt specialists.

use axum::Json;
use shotpilot_core::specialist::{Specialist, SPECIALISTS};

use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;

/// GET /api/v1/specialists
pub async fn list(_auth: AuthUser) -> Json<DataResponse<&'static [Specialist]>> {
    Json(DataResponse { data: SPECIALISTS })
}
