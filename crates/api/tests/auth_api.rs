//! HTTP-level integration tests for registration, login, sessions, and lockout.

mod common;

use assert_matches::assert_matches;
use axum::http::header::SET_COOKIE;
use axum::http::StatusCode;
use common::{body_json, get_auth, post_json, post_json_auth, register, TEST_PASSWORD};
use sqlx::PgPool;
use shotpilot_api::auth::session::hash_session_token;
use shotpilot_db::repositories::{SessionRepo, UserRepo};

fn login_body(username: &str, password: &str) -> serde_json::Value {
    serde_json::json!({ "username": username, "password": password })
}

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_sets_session_cookie_and_grants_credits(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    let body = serde_json::json!({
        "username": "director",
        "email": "Director@Studio.film",
        "password": TEST_PASSWORD,
    });
    let response = post_json(app.clone(), "/api/v1/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let set_cookie = response.headers()[SET_COOKIE].to_str().unwrap().to_string();
    assert!(set_cookie.starts_with("shotpilot_session="));
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("SameSite=Lax"));

    let json = body_json(response).await;
    assert_eq!(json["username"], "director");
    assert_eq!(json["email"], "director@studio.film");
    assert_eq!(json["role"], "user");
    assert_eq!(json["credits"], 50);
    assert!(json.get("password_hash").is_none());

    // Only the hash of the cookie value is stored.
    let token = set_cookie
        .split(';')
        .next()
        .unwrap()
        .trim_start_matches("shotpilot_session=");
    let session = SessionRepo::find_active_by_token_hash(&pool, &hash_session_token(token))
        .await
        .unwrap();
    assert_matches!(session, Some(s) if s.user_id == json["id"].as_i64().unwrap());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_duplicate_username_conflicts(pool: PgPool) {
    let app = common::build_test_app(pool);
    register(&app, "twin").await;

    let body = serde_json::json!({
        "username": "twin",
        "email": "other@test.com",
        "password": TEST_PASSWORD,
    });
    let response = post_json(app, "/api/v1/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_validates_input(pool: PgPool) {
    let app = common::build_test_app(pool);

    let cases = [
        ("ok_name", "ok@test.com", "short"),
        ("a", "ok@test.com", TEST_PASSWORD),
        ("ok_name", "not-an-email", TEST_PASSWORD),
    ];
    for (username, email, password) in cases {
        let body = serde_json::json!({
            "username": username,
            "email": email,
            "password": password,
        });
        let response = post_json(app.clone(), "/api/v1/auth/register", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{username}/{email}");
        let json = body_json(response).await;
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }
}

// ---------------------------------------------------------------------------
// Login / logout / me
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_and_me(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (user_id, _) = register(&app, "gaffer").await;

    let response = post_json(
        app.clone(),
        "/api/v1/auth/login",
        login_body("gaffer", TEST_PASSWORD),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let cookie = common::session_cookie(&response);

    let response = get_auth(app, "/api/v1/auth/me", &cookie).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["id"], user_id);
    assert_eq!(json["username"], "gaffer");
    assert!(json["last_login_at"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_wrong_password(pool: PgPool) {
    let app = common::build_test_app(pool);
    register(&app, "grip").await;

    let response = post_json(
        app,
        "/api/v1/auth/login",
        login_body("grip", "incorrect-password"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(response.headers().get(SET_COOKIE).is_none());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_unknown_user(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/login",
        login_body("nobody", TEST_PASSWORD),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_account_locks_after_repeated_failures(pool: PgPool) {
    let app = common::build_test_app(pool);
    register(&app, "locked").await;

    for _ in 0..5 {
        let response = post_json(
            app.clone(),
            "/api/v1/auth/login",
            login_body("locked", "wrong-password"),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    // Even the correct password is refused while locked.
    let response = post_json(
        app,
        "/api/v1/auth/login",
        login_body("locked", TEST_PASSWORD),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_deactivated_account_cannot_login_or_use_session(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (user_id, cookie) = register(&app, "retired").await;

    UserRepo::deactivate(&pool, user_id).await.unwrap();

    let response = post_json(
        app.clone(),
        "/api/v1/auth/login",
        login_body("retired", TEST_PASSWORD),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = get_auth(app, "/api/v1/auth/me", &cookie).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_logout_revokes_session(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (_, cookie) = register(&app, "wrapper").await;

    let response = post_json_auth(
        app.clone(),
        "/api/v1/auth/logout",
        serde_json::json!({}),
        &cookie,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let cleared = response.headers()[SET_COOKIE].to_str().unwrap();
    assert!(cleared.starts_with("shotpilot_session="));

    let response = get_auth(app, "/api/v1/auth/me", &cookie).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_forged_cookie_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get_auth(
        app,
        "/api/v1/auth/me",
        "shotpilot_session=00000000-0000-4000-8000-000000000000",
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
