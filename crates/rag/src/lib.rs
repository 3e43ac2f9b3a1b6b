//! Client library for the RAG prompt-generation backend.
//!
//! The backend holds one knowledge-base document per AI model and answers
//! `POST /generate` with a prompt grounded in that document. The API layer
//! talks to it through the [`PromptBackend`] trait so tests can swap in a
//! canned implementation.

pub mod api;
pub mod backend;

pub use api::{RagClient, RagError, RagRequest, RagResponse};
pub use backend::PromptBackend;
