//! The prompt-generation seam used by the API layer.

use async_trait::async_trait;

use crate::api::{RagClient, RagError, RagRequest};

/// Something that turns a [`RagRequest`] into prompt text.
#[async_trait]
pub trait PromptBackend: Send + Sync {
    async fn generate(&self, request: &RagRequest) -> Result<String, RagError>;
}

#[async_trait]
impl PromptBackend for RagClient {
    async fn generate(&self, request: &RagRequest) -> Result<String, RagError> {
        RagClient::generate(self, request).await
    }
}
