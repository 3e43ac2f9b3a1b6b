//! Shot entity model and DTOs.

use serde::{Deserialize, Serialize};
use shotpilot_core::brief::ShotFraming;
use shotpilot_core::mention::ShotText;
use shotpilot_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `shots` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Shot {
    pub id: DbId,
    pub scene_id: DbId,
    pub shot_number: i32,
    pub shot_type: Option<String>,
    pub camera_angle: Option<String>,
    pub camera_movement: Option<String>,
    pub lens: Option<String>,
    // -- Free text; may contain @mentions --
    pub description: Option<String>,
    pub blocking: Option<String>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Shot {
    /// The fields scanned for `@mentions`.
    pub fn mention_text(&self) -> ShotText<'_> {
        ShotText {
            description: self.description.as_deref(),
            blocking: self.blocking.as_deref(),
            notes: self.notes.as_deref(),
        }
    }

    pub fn framing(&self) -> ShotFraming<'_> {
        ShotFraming {
            shot_number: self.shot_number,
            shot_type: self.shot_type.as_deref(),
            camera_angle: self.camera_angle.as_deref(),
            camera_movement: self.camera_movement.as_deref(),
            lens: self.lens.as_deref(),
        }
    }
}

/// DTO for creating a new shot. `scene_id` comes from the route.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateShot {
    pub shot_number: i32,
    pub shot_type: Option<String>,
    pub camera_angle: Option<String>,
    pub camera_movement: Option<String>,
    pub lens: Option<String>,
    pub description: Option<String>,
    pub blocking: Option<String>,
    pub notes: Option<String>,
}

/// DTO for updating an existing shot. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateShot {
    pub shot_number: Option<i32>,
    pub shot_type: Option<String>,
    pub camera_angle: Option<String>,
    pub camera_movement: Option<String>,
    pub lens: Option<String>,
    pub description: Option<String>,
    pub blocking: Option<String>,
    pub notes: Option<String>,
}
