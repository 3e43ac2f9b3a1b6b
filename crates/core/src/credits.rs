//! Credit balance rules.
//!
//! Every user holds a non-negative integer credit balance. Prompt generation
//! costs a fixed number of credits; admins may grant or revoke credits. All
//! changes are recorded in the `credit_transactions` ledger with one of the
//! reason constants below.

use crate::error::CoreError;

/// Credits granted to a newly registered user.
pub const DEFAULT_INITIAL_CREDITS: i32 = 50;

/// Credits charged per successful prompt generation.
pub const DEFAULT_GENERATION_COST: i32 = 1;

/// Largest single admin adjustment, in either direction.
pub const MAX_ADJUSTMENT: i32 = 100_000;

pub const REASON_SIGNUP_GRANT: &str = "signup_grant";
pub const REASON_GENERATION: &str = "generation";
pub const REASON_ADMIN_ADJUSTMENT: &str = "admin_adjustment";

/// Fail with [`CoreError::InsufficientCredits`] if `balance` cannot cover `cost`.
pub fn ensure_sufficient(balance: i32, cost: i32) -> Result<(), CoreError> {
    if balance < cost {
        return Err(CoreError::InsufficientCredits {
            required: cost,
            available: balance,
        });
    }
    Ok(())
}

/// Validate an admin adjustment and return the resulting balance.
pub fn apply_adjustment(balance: i32, amount: i32) -> Result<i32, CoreError> {
    if amount == 0 {
        return Err(CoreError::Validation(
            "Credit adjustment must not be zero".to_string(),
        ));
    }
    if amount.unsigned_abs() > MAX_ADJUSTMENT.unsigned_abs() {
        return Err(CoreError::Validation(format!(
            "Credit adjustment exceeds maximum of {MAX_ADJUSTMENT} (got {amount})"
        )));
    }
    let new_balance = balance
        .checked_add(amount)
        .ok_or_else(|| CoreError::Validation("Credit balance overflow".to_string()))?;
    if new_balance < 0 {
        return Err(CoreError::Validation(format!(
            "Adjustment of {amount} would leave a negative balance (current {balance})"
        )));
    }
    Ok(new_balance)
}
