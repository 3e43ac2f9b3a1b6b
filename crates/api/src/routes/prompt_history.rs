use axum::routing::get;
use axum::Router;

use crate::handlers::prompt_history;
use crate::state::AppState;

/// Routes mounted at `/prompts`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(prompt_history::list))
}
