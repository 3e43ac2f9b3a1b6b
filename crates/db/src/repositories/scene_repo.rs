//! Repository for the `scenes` table.

use shotpilot_core::types::DbId;
use sqlx::PgPool;

use crate::models::scene::{CreateScene, Scene, UpdateScene};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, project_id, name, description, location, time_of_day, sort_order, created_at, updated_at";

/// Same columns qualified with the `s` alias for ownership joins.
const QUALIFIED_COLUMNS: &str = "s.id, s.project_id, s.name, s.description, s.location, \
     s.time_of_day, s.sort_order, s.created_at, s.updated_at";

/// Provides CRUD operations for scenes.
pub struct SceneRepo;

impl SceneRepo {
    /// Insert a new scene. If `sort_order` is `None`, defaults to 0.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        input: &CreateScene,
    ) -> Result<Scene, sqlx::Error> {
        let query = format!(
            "INSERT INTO scenes (project_id, name, description, location, time_of_day, sort_order)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Scene>(&query)
            .bind(project_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.location)
            .bind(&input.time_of_day)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    /// Find a scene the user can reach through one of their live projects.
    pub async fn find_for_user(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<Scene>, sqlx::Error> {
        let query = format!(
            "SELECT {QUALIFIED_COLUMNS} FROM scenes s
             JOIN projects p ON p.id = s.project_id
             WHERE s.id = $1 AND p.user_id = $2 AND p.deleted_at IS NULL"
        );
        sqlx::query_as::<_, Scene>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List a project's scenes by `sort_order`, then creation order.
    pub async fn list_by_project(pool: &PgPool, project_id: DbId) -> Result<Vec<Scene>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM scenes
             WHERE project_id = $1
             ORDER BY sort_order ASC, id ASC"
        );
        sqlx::query_as::<_, Scene>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Update a scene. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateScene,
    ) -> Result<Option<Scene>, sqlx::Error> {
        let query = format!(
            "UPDATE scenes SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                location = COALESCE($4, location),
                time_of_day = COALESCE($5, time_of_day),
                sort_order = COALESCE($6, sort_order)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Scene>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.location)
            .bind(&input.time_of_day)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    /// Delete a scene and, by cascade, its shots.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM scenes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
