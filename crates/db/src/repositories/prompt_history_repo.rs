//! Repository for the `prompt_history` table.
//!
//! Rows are inserted by [`CreditRepo::charge_for_generation`] so that a
//! prompt is only recorded when it was paid for.
//!
//! [`CreditRepo::charge_for_generation`]: crate::repositories::CreditRepo::charge_for_generation

use shotpilot_core::types::DbId;
use sqlx::types::Json;
use sqlx::{PgConnection, PgPool};

use crate::models::prompt_history::{CreatePromptHistory, PromptHistoryEntry};

const COLUMNS: &str =
    "id, user_id, shot_id, model, prompt, mentioned_names, credits_spent, created_at";

pub struct PromptHistoryRepo;

impl PromptHistoryRepo {
    /// A user's generated prompts, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<PromptHistoryEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM prompt_history
             WHERE user_id = $1
             ORDER BY created_at DESC, id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, PromptHistoryEntry>(&query)
            .bind(user_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Prompts a user generated for one shot, newest first.
    pub async fn list_for_shot(
        pool: &PgPool,
        user_id: DbId,
        shot_id: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<PromptHistoryEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM prompt_history
             WHERE user_id = $1 AND shot_id = $2
             ORDER BY created_at DESC, id DESC
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, PromptHistoryEntry>(&query)
            .bind(user_id)
            .bind(shot_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }
}

pub(crate) async fn insert_history_entry(
    conn: &mut PgConnection,
    input: &CreatePromptHistory,
) -> Result<PromptHistoryEntry, sqlx::Error> {
    let query = format!(
        "INSERT INTO prompt_history (user_id, shot_id, model, prompt, mentioned_names, credits_spent)
         VALUES ($1, $2, $3, $4, $5, $6)
         RETURNING {COLUMNS}"
    );
    sqlx::query_as::<_, PromptHistoryEntry>(&query)
        .bind(input.user_id)
        .bind(input.shot_id)
        .bind(&input.model)
        .bind(&input.prompt)
        .bind(Json(&input.mentioned_names))
        .bind(input.credits_spent)
        .fetch_one(&mut *conn)
        .await
}
