//! Scene entity model and DTOs.

use serde::{Deserialize, Serialize};
use shotpilot_core::brief::SceneContext;
use shotpilot_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `scenes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Scene {
    pub id: DbId,
    pub project_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub time_of_day: Option<String>,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Scene {
    pub fn context(&self) -> SceneContext<'_> {
        SceneContext {
            name: &self.name,
            description: self.description.as_deref(),
            location: self.location.as_deref(),
            time_of_day: self.time_of_day.as_deref(),
        }
    }
}

/// DTO for creating a new scene. `project_id` comes from the route.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateScene {
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub time_of_day: Option<String>,
    /// Defaults to 0 if omitted.
    pub sort_order: Option<i32>,
}

/// DTO for updating an existing scene. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateScene {
    pub name: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub time_of_day: Option<String>,
    pub sort_order: Option<i32>,
}
