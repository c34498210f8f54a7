//! Photo metadata entity model and DTO.
//!
//! Photos are append-only: there is no update DTO.

use leadflow_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `photos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Photo {
    pub id: DbId,
    pub prospect_id: DbId,
    pub filename: String,
    pub original_name: String,
    pub mime_type: String,
    pub file_size: i64,
    pub file_path: String,
    pub uploaded_at: Timestamp,
}

/// DTO for recording an uploaded photo's metadata. The file bytes are
/// written elsewhere; only the resulting path and metadata are stored.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePhoto {
    pub filename: String,
    pub original_name: String,
    pub mime_type: String,
    pub file_size: i64,
    pub file_path: String,
}
