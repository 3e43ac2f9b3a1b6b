//! Object (prop) entity model and DTOs.

use serde::{Deserialize, Serialize};
use shotpilot_core::mention::NamedEntity;
use shotpilot_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `objects` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct ObjectItem {
    pub id: DbId,
    pub project_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl NamedEntity for ObjectItem {
    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateObjectItem {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateObjectItem {
    pub name: Option<String>,
    pub description: Option<String>,
}
