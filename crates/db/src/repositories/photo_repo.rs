//! Repository for the `photos` table.

use sqlx::PgPool;

use leadflow_core::types::DbId;

use crate::models::photo::{CreatePhoto, Photo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, prospect_id, filename, original_name, mime_type, file_size, file_path, uploaded_at";

/// Provides insert/list/delete operations for photo metadata. Photos are
/// append-only; there is no update.
pub struct PhotoRepo;

impl PhotoRepo {
    /// Record a photo's metadata against a prospect, returning the row.
    pub async fn create(
        pool: &PgPool,
        prospect_id: DbId,
        input: &CreatePhoto,
    ) -> Result<Photo, sqlx::Error> {
        let query = format!(
            "INSERT INTO photos
                (prospect_id, filename, original_name, mime_type, file_size, file_path)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Photo>(&query)
            .bind(prospect_id)
            .bind(&input.filename)
            .bind(&input.original_name)
            .bind(&input.mime_type)
            .bind(input.file_size)
            .bind(&input.file_path)
            .fetch_one(pool)
            .await
    }

    /// Find a photo by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Photo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM photos WHERE id = $1");
        sqlx::query_as::<_, Photo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a prospect's photos, most recently uploaded first.
    pub async fn list_by_prospect(
        pool: &PgPool,
        prospect_id: DbId,
    ) -> Result<Vec<Photo>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM photos
             WHERE prospect_id = $1
             ORDER BY uploaded_at DESC, id DESC"
        );
        sqlx::query_as::<_, Photo>(&query)
            .bind(prospect_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a photo record by ID. Returns `true` if a row was removed.
    ///
    /// Only the metadata row is deleted; the stored file is the caller's
    /// concern.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM photos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
