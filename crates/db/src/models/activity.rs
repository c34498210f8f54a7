//! Activity log entity model and DTO.
//!
//! Activities are append-only: there is no update DTO.

use leadflow_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Kind of interaction recorded against a prospect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "activity_type", rename_all = "snake_case")]
pub enum ActivityType {
    Call,
    Email,
    Meeting,
    Note,
    StatusChange,
}

/// A row from the `activities` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Activity {
    pub id: DbId,
    pub prospect_id: DbId,
    pub activity_type: ActivityType,
    pub title: String,
    pub description: Option<String>,
    pub activity_date: Timestamp,
    pub created_at: Timestamp,
}

/// DTO for appending an activity to a prospect's log.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateActivity {
    pub activity_type: ActivityType,
    pub title: String,
    pub description: Option<String>,
    /// Defaults to the current time if omitted.
    pub activity_date: Option<Timestamp>,
}
