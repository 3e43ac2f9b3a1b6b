//! Integration tests for the credit ledger and generation charging.

use shotpilot_db::models::prompt_history::CreatePromptHistory;
use shotpilot_db::models::user::CreateUser;
use shotpilot_db::repositories::{CreditRepo, PromptHistoryRepo, UserRepo};
use sqlx::PgPool;

async fn user_with_credits(pool: &PgPool, username: &str, credits: i32) -> i64 {
    let input = CreateUser {
        username: username.to_string(),
        email: format!("{username}@test.com"),
        password_hash: "x".to_string(),
        role: "user".to_string(),
        credits,
    };
    UserRepo::create(pool, &input).await.unwrap().id
}

fn history(user_id: i64, prompt: &str) -> CreatePromptHistory {
    CreatePromptHistory {
        user_id,
        shot_id: None,
        model: "midjourney".to_string(),
        prompt: prompt.to_string(),
        mentioned_names: vec!["Mara".to_string()],
        credits_spent: 1,
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_signup_grant_is_recorded(pool: PgPool) {
    let user_id = user_with_credits(&pool, "newbie", 50).await;

    let ledger = CreditRepo::list_for_user(&pool, user_id, 10, 0).await.unwrap();
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger[0].amount, 50);
    assert_eq!(ledger[0].reason, "signup_grant");
    assert_eq!(ledger[0].balance_after, 50);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_zero_opening_balance_has_no_ledger_row(pool: PgPool) {
    let user_id = user_with_credits(&pool, "broke", 0).await;
    assert!(CreditRepo::list_for_user(&pool, user_id, 10, 0)
        .await
        .unwrap()
        .is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_adjust_grants_and_refuses_negative(pool: PgPool) {
    let user_id = user_with_credits(&pool, "adjusted", 5).await;

    let entry = CreditRepo::adjust(&pool, user_id, 10, "admin_adjustment")
        .await
        .unwrap()
        .expect("grant applies");
    assert_eq!(entry.balance_after, 15);

    let refused = CreditRepo::adjust(&pool, user_id, -16, "admin_adjustment")
        .await
        .unwrap();
    assert!(refused.is_none());
    assert_eq!(CreditRepo::balance(&pool, user_id).await.unwrap(), Some(15));

    assert!(CreditRepo::adjust(&pool, 999_999, 1, "admin_adjustment")
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_generation_charge_records_history(pool: PgPool) {
    let user_id = user_with_credits(&pool, "spender", 2).await;

    let charge = CreditRepo::charge_for_generation(&pool, 1, &history(user_id, "a prompt"))
        .await
        .unwrap()
        .expect("balance covers cost");
    assert_eq!(charge.balance, 1);
    assert_eq!(charge.history.prompt, "a prompt");
    assert_eq!(charge.history.mentioned_names.0, vec!["Mara".to_string()]);

    let ledger = CreditRepo::list_for_user(&pool, user_id, 10, 0).await.unwrap();
    assert_eq!(ledger[0].amount, -1);
    assert_eq!(ledger[0].reason, "generation");
    assert_eq!(ledger[0].balance_after, 1);

    let entries = PromptHistoryRepo::list_for_user(&pool, user_id, 10, 0)
        .await
        .unwrap();
    assert_eq!(entries.len(), 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_generation_charge_refused_without_credits(pool: PgPool) {
    let user_id = user_with_credits(&pool, "empty", 0).await;

    let charge = CreditRepo::charge_for_generation(&pool, 1, &history(user_id, "nope"))
        .await
        .unwrap();
    assert!(charge.is_none());

    assert!(PromptHistoryRepo::list_for_user(&pool, user_id, 10, 0)
        .await
        .unwrap()
        .is_empty());
    assert_eq!(CreditRepo::balance(&pool, user_id).await.unwrap(), Some(0));
}
