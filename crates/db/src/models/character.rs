//! Character entity model and DTOs.

use serde::{Deserialize, Serialize};
use shotpilot_core::mention::NamedEntity;
use shotpilot_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A character row from the `characters` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Character {
    pub id: DbId,
    pub project_id: DbId,
    pub name: String,
    pub description: Option<String>,
    /// Wardrobe, age, build -- whatever a prompt needs to draw them consistently.
    pub appearance: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl NamedEntity for Character {
    fn name(&self) -> &str {
        &self.name
    }
}

/// DTO for creating a new character. `project_id` comes from the route.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCharacter {
    pub name: String,
    pub description: Option<String>,
    pub appearance: Option<String>,
}

/// DTO for updating an existing character. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCharacter {
    pub name: Option<String>,
    pub description: Option<String>,
    pub appearance: Option<String>,
}
