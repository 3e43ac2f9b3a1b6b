//! Repository for credit balances (`users.credits`) and the
//! `credit_transactions` ledger.
//!
//! Every balance change goes through a transaction that updates the balance
//! with a guard (`credits + amount >= 0`) and appends a ledger row carrying
//! the resulting balance.

use serde::Serialize;
use shotpilot_core::credits::REASON_GENERATION;
use shotpilot_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::credit::CreditTransaction;
use crate::models::prompt_history::{CreatePromptHistory, PromptHistoryEntry};
use crate::repositories::prompt_history_repo::insert_history_entry;

const LEDGER_COLUMNS: &str = "id, user_id, amount, reason, balance_after, created_at";

/// Outcome of a successful generation charge.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationCharge {
    pub balance: i32,
    pub history: PromptHistoryEntry,
}

pub struct CreditRepo;

impl CreditRepo {
    /// Current balance, or `None` if the user does not exist.
    pub async fn balance(pool: &PgPool, user_id: DbId) -> Result<Option<i32>, sqlx::Error> {
        sqlx::query_scalar::<_, i32>("SELECT credits FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Apply a signed adjustment and record it.
    ///
    /// Returns `None` if the user does not exist or the adjustment would
    /// leave a negative balance; nothing is written in that case.
    pub async fn adjust(
        pool: &PgPool,
        user_id: DbId,
        amount: i32,
        reason: &str,
    ) -> Result<Option<CreditTransaction>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let Some(balance) = apply_delta(&mut tx, user_id, amount).await? else {
            return Ok(None);
        };
        let entry = insert_ledger_entry(&mut tx, user_id, amount, reason, balance).await?;

        tx.commit().await?;
        Ok(Some(entry))
    }

    /// Charge `cost` credits for a generated prompt and record the prompt in
    /// the user's history, atomically.
    ///
    /// Returns `None` (and writes nothing) when the balance is below `cost`.
    pub async fn charge_for_generation(
        pool: &PgPool,
        cost: i32,
        history: &CreatePromptHistory,
    ) -> Result<Option<GenerationCharge>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let Some(balance) = apply_delta(&mut tx, history.user_id, -cost).await? else {
            return Ok(None);
        };
        if cost != 0 {
            insert_ledger_entry(&mut tx, history.user_id, -cost, REASON_GENERATION, balance)
                .await?;
        }
        let history = insert_history_entry(&mut tx, history).await?;

        tx.commit().await?;
        Ok(Some(GenerationCharge { balance, history }))
    }

    /// A user's ledger, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<CreditTransaction>, sqlx::Error> {
        let query = format!(
            "SELECT {LEDGER_COLUMNS} FROM credit_transactions
             WHERE user_id = $1
             ORDER BY created_at DESC, id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, CreditTransaction>(&query)
            .bind(user_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }
}

/// Add `amount` to the balance unless that would make it negative.
/// Returns the new balance, or `None` if no row qualified.
async fn apply_delta(
    conn: &mut PgConnection,
    user_id: DbId,
    amount: i32,
) -> Result<Option<i32>, sqlx::Error> {
    sqlx::query_scalar::<_, i32>(
        "UPDATE users SET credits = credits + $2
         WHERE id = $1 AND credits + $2 >= 0
         RETURNING credits",
    )
    .bind(user_id)
    .bind(amount)
    .fetch_optional(&mut *conn)
    .await
}

pub(crate) async fn insert_ledger_entry(
    conn: &mut PgConnection,
    user_id: DbId,
    amount: i32,
    reason: &str,
    balance_after: i32,
) -> Result<CreditTransaction, sqlx::Error> {
    let query = format!(
        "INSERT INTO credit_transactions (user_id, amount, reason, balance_after)
         VALUES ($1, $2, $3, $4)
         RETURNING {LEDGER_COLUMNS}"
    );
    sqlx::query_as::<_, CreditTransaction>(&query)
        .bind(user_id)
        .bind(amount)
        .bind(reason)
        .bind(balance_after)
        .fetch_one(&mut *conn)
        .await
}
