//! Request extractors for authentication, authorization, and credit checks.

pub mod auth;
pub mod credits;
pub mod rbac;
