//! HTTP handlers, one module per resource.
//!
//! Every resource is reached through its owning project, so the lookups
//! below double as authorization checks: a row owned by another user is
//! reported as not found.

pub mod auth;
pub mod character;
pub mod credits;
pub mod generation;
pub mod object;
pub mod project;
pub mod prompt_history;
pub mod scene;
pub mod shot;
pub mod specialist;

use shotpilot_core::error::CoreError;
use shotpilot_core::types::DbId;
use shotpilot_db::models::project::Project;
use shotpilot_db::models::scene::Scene;
use shotpilot_db::models::shot::Shot;
use shotpilot_db::repositories::{ProjectRepo, SceneRepo, ShotRepo};
use shotpilot_db::DbPool;

use crate::error::{AppError, AppResult};

/// Load a live project owned by `user_id`, or 404.
pub(crate) async fn ensure_project(
    pool: &DbPool,
    project_id: DbId,
    user_id: DbId,
) -> AppResult<Project> {
    ProjectRepo::find_for_user(pool, project_id, user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }))
}

/// Load a scene in a live project owned by `user_id`, or 404.
pub(crate) async fn ensure_scene(pool: &DbPool, scene_id: DbId, user_id: DbId) -> AppResult<Scene> {
    SceneRepo::find_for_user(pool, scene_id, user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Scene",
            id: scene_id,
        }))
}

/// Load a shot in a live project owned by `user_id`, or 404.
pub(crate) async fn ensure_shot(pool: &DbPool, shot_id: DbId, user_id: DbId) -> AppResult<Shot> {
    ShotRepo::find_for_user(pool, shot_id, user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Shot",
            id: shot_id,
        }))
}
