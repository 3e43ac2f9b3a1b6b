//! Credit ledger model.

use serde::Serialize;
use shotpilot_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the append-only `credit_transactions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CreditTransaction {
    pub id: DbId,
    pub user_id: DbId,
    /// Positive for grants, negative for charges.
    pub amount: i32,
    pub reason: String,
    pub balance_after: i32,
    pub created_at: Timestamp,
}
