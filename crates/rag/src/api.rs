//! REST API client for the RAG backend.
//!
//! Wraps the `/generate` endpoint using [`reqwest`].

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// HTTP client for a single RAG backend instance.
#[derive(Debug, Clone)]
pub struct RagClient {
    client: reqwest::Client,
    base_url: String,
}

/// Body of `POST /generate`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RagRequest {
    /// The rendered shot brief.
    pub query: String,
    /// Knowledge-base document to retrieve from.
    pub knowledge_base: String,
    pub system_prompt: String,
    /// Model id the prompt is written for, e.g. `"midjourney"`.
    pub model: String,
}

/// Response returned by `POST /generate`.
#[derive(Debug, Deserialize)]
pub struct RagResponse {
    pub response: String,
}

/// Errors from the RAG REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum RagError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend returned a non-2xx status code.
    #[error("RAG API error ({status}): {body}")]
    Api {
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The backend answered 2xx but produced no prompt text.
    #[error("RAG backend returned an empty response")]
    EmptyResponse,
}

impl RagClient {
    /// Create a new client.
    ///
    /// * `base_url` - Base HTTP URL, e.g. `http://localhost:8000`. A trailing
    ///   slash is stripped.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client whose requests give up after `timeout`.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self, RagError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Ask the backend for a prompt.
    ///
    /// Sends `POST /generate` and returns the trimmed `response` text.
    pub async fn generate(&self, request: &RagRequest) -> Result<String, RagError> {
        tracing::debug!(
            model = %request.model,
            knowledge_base = %request.knowledge_base,
            "Requesting prompt from RAG backend"
        );

        let response = self
            .client
            .post(format!("{}/generate", self.base_url))
            .json(request)
            .send()
            .await?;

        let body: RagResponse = Self::parse_response(response).await?;
        prompt_text(body)
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the response
    /// unchanged on success, or a [`RagError::Api`] carrying the status and
    /// body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, RagError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(RagError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, RagError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

/// Extract the prompt from a backend response, rejecting blank output.
fn prompt_text(body: RagResponse) -> Result<String, RagError> {
    let prompt = body.response.trim();
    if prompt.is_empty() {
        return Err(RagError::EmptyResponse);
    }
    Ok(prompt.to_string())
}
