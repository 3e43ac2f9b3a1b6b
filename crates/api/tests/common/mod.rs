#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use shotpilot_api::config::{ServerConfig, SessionConfig};
use shotpilot_api::router::build_app_router;
use shotpilot_api::state::AppState;
use shotpilot_rag::{PromptBackend, RagError, RagRequest};

pub const TEST_PASSWORD: &str = "rack-focus-42";

// ---------------------------------------------------------------------------
// Prompt backend double
// ---------------------------------------------------------------------------

/// In-process stand-in for the RAG service. Records every request.
pub struct FakeBackend {
    reply: Option<String>,
    pub requests: Mutex<Vec<RagRequest>>,
}

impl FakeBackend {
    /// Always answers with `reply`.
    pub fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Some(reply.to_string()),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Always fails as if the service returned 503.
    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: None,
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn recorded(&self) -> Vec<RagRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PromptBackend for FakeBackend {
    async fn generate(&self, request: &RagRequest) -> Result<String, RagError> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.reply {
            Some(reply) => Ok(reply.clone()),
            None => Err(RagError::Api {
                status: 503,
                body: "knowledge base offline".to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        session: SessionConfig::default(),
        initial_credits: 50,
        generation_cost: 1,
        rag_url: "http://127.0.0.1:9".to_string(),
        rag_timeout_secs: 1,
    }
}

/// Full application router backed by `pool` and a backend that always
/// answers `"generated prompt"`.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, FakeBackend::replying("generated prompt"))
}

/// Full application router with an explicit prompt backend.
pub fn build_test_app_with(pool: PgPool, backend: Arc<FakeBackend>) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        prompt_backend: backend,
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a request through the router. `cookie` is a `name=value` pair.
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
    cookie: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, cookie: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, Some(cookie)).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body), None).await
}

pub async fn post_json_auth(app: Router, uri: &str, body: Value, cookie: &str) -> Response<Body> {
    send(app, Method::POST, uri, Some(body), Some(cookie)).await
}

pub async fn put_json_auth(app: Router, uri: &str, body: Value, cookie: &str) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body), Some(cookie)).await
}

pub async fn delete_auth(app: Router, uri: &str, cookie: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None, Some(cookie)).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// The `name=value` part of the first `Set-Cookie` header.
pub fn session_cookie(response: &Response<Body>) -> String {
    let header = response
        .headers()
        .get(SET_COOKIE)
        .expect("response should set a cookie")
        .to_str()
        .unwrap();
    header.split(';').next().unwrap().trim().to_string()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Register `username` through the API and return `(user_id, cookie)`.
pub async fn register(app: &Router, username: &str) -> (i64, String) {
    let body = serde_json::json!({
        "username": username,
        "email": format!("{username}@test.com"),
        "password": TEST_PASSWORD,
    });
    let response = post_json(app.clone(), "/api/v1/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let cookie = session_cookie(&response);
    let json = body_json(response).await;
    (json["id"].as_i64().unwrap(), cookie)
}

/// Create a resource and return its JSON body, asserting 201.
pub async fn create(app: &Router, uri: &str, body: Value, cookie: &str) -> Value {
    let response = post_json_auth(app.clone(), uri, body, cookie).await;
    assert_eq!(response.status(), StatusCode::CREATED, "POST {uri}");
    body_json(response).await
}
