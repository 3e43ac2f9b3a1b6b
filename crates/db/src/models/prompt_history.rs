//! Generated prompt history.

use serde::Serialize;
use shotpilot_core::types::{DbId, Timestamp};
use sqlx::types::Json;
use sqlx::FromRow;

/// A row from the `prompt_history` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PromptHistoryEntry {
    pub id: DbId,
    pub user_id: DbId,
    /// `None` once the shot has been deleted.
    pub shot_id: Option<DbId>,
    pub model: String,
    pub prompt: String,
    pub mentioned_names: Json<Vec<String>>,
    pub credits_spent: i32,
    pub created_at: Timestamp,
}

/// DTO for recording a generated prompt.
#[derive(Debug, Clone)]
pub struct CreatePromptHistory {
    pub user_id: DbId,
    pub shot_id: Option<DbId>,
    pub model: String,
    pub prompt: String,
    pub mentioned_names: Vec<String>,
    pub credits_spent: i32,
}
