//! Repository for the `activities` table.

use sqlx::PgPool;

use leadflow_core::types::DbId;

use crate::models::activity::{Activity, CreateActivity};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, prospect_id, activity_type, title, description, activity_date, created_at";

/// Provides insert/list operations for the activity log. Activities are
/// append-only; there is no update or delete.
pub struct ActivityRepo;

impl ActivityRepo {
    /// Append an activity to a prospect's log, returning the created row.
    ///
    /// If `activity_date` is `None`, defaults to the current time.
    pub async fn create(
        pool: &PgPool,
        prospect_id: DbId,
        input: &CreateActivity,
    ) -> Result<Activity, sqlx::Error> {
        let query = format!(
            "INSERT INTO activities
                (prospect_id, activity_type, title, description, activity_date)
             VALUES ($1, $2, $3, $4, COALESCE($5, NOW()))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Activity>(&query)
            .bind(prospect_id)
            .bind(input.activity_type)
            .bind(&input.title)
            .bind(input.description.as_deref())
            .bind(input.activity_date)
            .fetch_one(pool)
            .await
    }

    /// List a prospect's activities, most recent activity date first.
    pub async fn list_by_prospect(
        pool: &PgPool,
        prospect_id: DbId,
    ) -> Result<Vec<Activity>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM activities
             WHERE prospect_id = $1
             ORDER BY activity_date DESC, id DESC"
        );
        sqlx::query_as::<_, Activity>(&query)
            .bind(prospect_id)
            .fetch_all(pool)
            .await
    }
}
