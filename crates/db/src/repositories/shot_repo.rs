//! Repository for the `shots` table.

use shotpilot_core::types::DbId;
use sqlx::PgPool;

use crate::models::shot::{CreateShot, Shot, UpdateShot};

const COLUMNS: &str = "id, scene_id, shot_number, shot_type, camera_angle, camera_movement, \
     lens, description, blocking, notes, created_at, updated_at";

const QUALIFIED_COLUMNS: &str = "sh.id, sh.scene_id, sh.shot_number, sh.shot_type, \
     sh.camera_angle, sh.camera_movement, sh.lens, sh.description, sh.blocking, sh.notes, \
     sh.created_at, sh.updated_at";

/// Provides CRUD operations for shots.
pub struct ShotRepo;

impl ShotRepo {
    pub async fn create(
        pool: &PgPool,
        scene_id: DbId,
        input: &CreateShot,
    ) -> Result<Shot, sqlx::Error> {
        let query = format!(
            "INSERT INTO shots
                (scene_id, shot_number, shot_type, camera_angle, camera_movement, lens,
                 description, blocking, notes)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Shot>(&query)
            .bind(scene_id)
            .bind(input.shot_number)
            .bind(&input.shot_type)
            .bind(&input.camera_angle)
            .bind(&input.camera_movement)
            .bind(&input.lens)
            .bind(&input.description)
            .bind(&input.blocking)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Find a shot the user can reach through scene -> live project ownership.
    pub async fn find_for_user(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<Shot>, sqlx::Error> {
        let query = format!(
            "SELECT {QUALIFIED_COLUMNS} FROM shots sh
             JOIN scenes s ON s.id = sh.scene_id
             JOIN projects p ON p.id = s.project_id
             WHERE sh.id = $1 AND p.user_id = $2 AND p.deleted_at IS NULL"
        );
        sqlx::query_as::<_, Shot>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List a scene's shots ordered by shot number.
    pub async fn list_by_scene(pool: &PgPool, scene_id: DbId) -> Result<Vec<Shot>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM shots
             WHERE scene_id = $1
             ORDER BY shot_number ASC, id ASC"
        );
        sqlx::query_as::<_, Shot>(&query)
            .bind(scene_id)
            .fetch_all(pool)
            .await
    }

    /// Update a shot. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateShot,
    ) -> Result<Option<Shot>, sqlx::Error> {
        let query = format!(
            "UPDATE shots SET
                shot_number = COALESCE($2, shot_number),
                shot_type = COALESCE($3, shot_type),
                camera_angle = COALESCE($4, camera_angle),
                camera_movement = COALESCE($5, camera_movement),
                lens = COALESCE($6, lens),
                description = COALESCE($7, description),
                blocking = COALESCE($8, blocking),
                notes = COALESCE($9, notes)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Shot>(&query)
            .bind(id)
            .bind(input.shot_number)
            .bind(&input.shot_type)
            .bind(&input.camera_angle)
            .bind(&input.camera_movement)
            .bind(&input.lens)
            .bind(&input.description)
            .bind(&input.blocking)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM shots WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
