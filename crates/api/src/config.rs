use shotpilot_core::credits::{DEFAULT_GENERATION_COST, DEFAULT_INITIAL_CREDITS};

/// Session cookie settings.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Cookie carrying the opaque session token (default: `shotpilot_session`).
    pub cookie_name: String,
    /// Server-side session lifetime in days (default: `7`).
    pub ttl_days: i64,
    /// Set the `Secure` attribute on the cookie (default: `false`).
    pub secure_cookie: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: "shotpilot_session".to_string(),
            ttl_days: 7,
            secure_cookie: false,
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    pub session: SessionConfig,
    /// Credits granted at registration.
    pub initial_credits: i32,
    /// Credits charged per generated prompt.
    pub generation_cost: i32,
    /// Base URL of the RAG backend.
    pub rag_url: String,
    pub rag_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                    |
    /// |-------------------------|----------------------------|
    /// | `HOST`                  | `0.0.0.0`                  |
    /// | `PORT`                  | `3000`                     |
    /// | `CORS_ORIGINS`          | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                       |
    /// | `SESSION_COOKIE_NAME`   | `shotpilot_session`        |
    /// | `SESSION_TTL_DAYS`      | `7`                        |
    /// | `SESSION_COOKIE_SECURE` | `false`                    |
    /// | `INITIAL_CREDITS`       | `50`                       |
    /// | `GENERATION_COST`       | `1`                        |
    /// | `RAG_URL`               | `http://localhost:8000`    |
    /// | `RAG_TIMEOUT_SECS`      | `60`                       |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let defaults = SessionConfig::default();
        let session = SessionConfig {
            cookie_name: std::env::var("SESSION_COOKIE_NAME").unwrap_or(defaults.cookie_name),
            ttl_days: std::env::var("SESSION_TTL_DAYS")
                .map(|v| v.parse().expect("SESSION_TTL_DAYS must be a valid i64"))
                .unwrap_or(defaults.ttl_days),
            secure_cookie: std::env::var("SESSION_COOKIE_SECURE")
                .map(|v| v.parse().expect("SESSION_COOKIE_SECURE must be true or false"))
                .unwrap_or(defaults.secure_cookie),
        };

        let initial_credits: i32 = std::env::var("INITIAL_CREDITS")
            .map(|v| v.parse().expect("INITIAL_CREDITS must be a valid i32"))
            .unwrap_or(DEFAULT_INITIAL_CREDITS);
        assert!(initial_credits >= 0, "INITIAL_CREDITS must not be negative");

        let generation_cost: i32 = std::env::var("GENERATION_COST")
            .map(|v| v.parse().expect("GENERATION_COST must be a valid i32"))
            .unwrap_or(DEFAULT_GENERATION_COST);
        assert!(generation_cost >= 0, "GENERATION_COST must not be negative");

        let rag_url = std::env::var("RAG_URL").unwrap_or_else(|_| "http://localhost:8000".into());

        let rag_timeout_secs: u64 = std::env::var("RAG_TIMEOUT_SECS")
            .unwrap_or_else(|_| "60".into())
            .parse()
            .expect("RAG_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            session,
            initial_credits,
            generation_cost,
            rag_url,
            rag_timeout_secs,
        }
    }
}
