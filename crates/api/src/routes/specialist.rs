use axum::routing::get;
use axum::Router;

use crate::handlers::specialist;
use crate::state::AppState;

/// Routes mounted at `/specialists`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(specialist::list))
}
