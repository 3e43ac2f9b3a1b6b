//! Repository for the `objects` table.

use shotpilot_core::types::DbId;
use sqlx::PgPool;

use crate::models::object_item::{CreateObjectItem, ObjectItem, UpdateObjectItem};

const COLUMNS: &str = "id, project_id, name, description, created_at, updated_at";

/// Provides CRUD operations for props/objects within a project.
pub struct ObjectRepo;

impl ObjectRepo {
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        input: &CreateObjectItem,
    ) -> Result<ObjectItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO objects (project_id, name, description)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ObjectItem>(&query)
            .bind(project_id)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    pub async fn find_in_project(
        pool: &PgPool,
        project_id: DbId,
        id: DbId,
    ) -> Result<Option<ObjectItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM objects WHERE id = $1 AND project_id = $2");
        sqlx::query_as::<_, ObjectItem>(&query)
            .bind(id)
            .bind(project_id)
            .fetch_optional(pool)
            .await
    }

    /// List all objects for a project in creation order.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<ObjectItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM objects
             WHERE project_id = $1
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, ObjectItem>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        project_id: DbId,
        id: DbId,
        input: &UpdateObjectItem,
    ) -> Result<Option<ObjectItem>, sqlx::Error> {
        let query = format!(
            "UPDATE objects SET
                name = COALESCE($3, name),
                description = COALESCE($4, description)
             WHERE id = $1 AND project_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ObjectItem>(&query)
            .bind(id)
            .bind(project_id)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, project_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM objects WHERE id = $1 AND project_id = $2")
            .bind(id)
            .bind(project_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
