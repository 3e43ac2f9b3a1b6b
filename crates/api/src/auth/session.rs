//! Opaque session tokens and the cookie that carries them.
//!
//! The browser holds a random UUID v4 in an `HttpOnly` cookie. Only the
//! SHA-256 hex digest of that token is stored in `user_sessions`, so a
//! database leak does not expose live sessions.

use axum_extra::extract::cookie::{Cookie, SameSite};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::config::SessionConfig;

/// Generate a new session token.
///
/// Returns `(plaintext, sha256_hex_hash)`. The plaintext goes into the
/// cookie; only the hash is persisted.
pub fn generate_session_token() -> (String, String) {
    let plaintext = Uuid::new_v4().to_string();
    let hash = hash_session_token(&plaintext);
    (plaintext, hash)
}

/// SHA-256 hex digest of a session token.
pub fn hash_session_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Build the cookie that carries `token`.
///
/// No `Max-Age` is set; expiry is enforced server-side by
/// `user_sessions.expires_at`.
pub fn session_cookie(config: &SessionConfig, token: String) -> Cookie<'static> {
    Cookie::build((config.cookie_name.clone(), token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.secure_cookie)
        .build()
}

/// A cookie matching [`session_cookie`]'s name and path, for removal.
pub fn removal_cookie(config: &SessionConfig) -> Cookie<'static> {
    Cookie::build((config.cookie_name.clone(), "")).path("/").build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_hash_is_sha256_hex() {
        let (plaintext, hash) = generate_session_token();
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(hash, hash_session_token(&plaintext));
        assert!(Uuid::parse_str(&plaintext).is_ok());
    }

    #[test]
    fn tokens_are_unique() {
        let (a, _) = generate_session_token();
        let (b, _) = generate_session_token();
        assert_ne!(a, b);
    }

    #[test]
    fn cookie_attributes() {
        let config = SessionConfig::default();
        let cookie = session_cookie(&config, "abc".to_string());
        assert_eq!(cookie.name(), "shotpilot_session");
        assert_eq!(cookie.value(), "abc");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.path(), Some("/"));
    }

    #[test]
    fn secure_flag_follows_config() {
        let config = SessionConfig {
            secure_cookie: true,
            ..SessionConfig::default()
        };
        let cookie = session_cookie(&config, "abc".to_string());
        assert_eq!(cookie.secure(), Some(true));
    }
}
