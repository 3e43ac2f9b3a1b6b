//! Route definitions for `/admin` (admin role required).

use axum::routing::post;
use axum::Router;

use crate::handlers::credits;
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// POST /users/{id}/credits  -> adjust
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/users/{id}/credits", post(credits::adjust))
}
