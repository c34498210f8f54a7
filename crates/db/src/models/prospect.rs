//! Prospect entity model and DTOs.

use leadflow_core::patch::Patch;
use leadflow_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::activity::Activity;
use crate::models::photo::Photo;

/// Sales pipeline stage of a prospect.
///
/// There is no enforced transition graph: any status may move to any other
/// via update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "prospect_status", rename_all = "snake_case")]
pub enum ProspectStatus {
    New,
    Contacted,
    Qualified,
    Proposal,
    Negotiation,
    ClosedWon,
    ClosedLost,
}

/// Follow-up priority of a prospect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "prospect_priority", rename_all = "snake_case")]
pub enum ProspectPriority {
    Low,
    Medium,
    High,
    Urgent,
}

/// A row from the `prospects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Prospect {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub position: Option<String>,
    pub status: ProspectStatus,
    pub priority: ProspectPriority,
    pub estimated_value: Option<f64>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A prospect together with its child records, as returned by the detail
/// endpoint.
#[derive(Debug, Serialize)]
pub struct ProspectWithDetails {
    #[serde(flatten)]
    pub prospect: Prospect,
    pub photos: Vec<Photo>,
    pub activities: Vec<Activity>,
}

/// DTO for creating a new prospect.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProspect {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub position: Option<String>,
    /// Defaults to `new` if omitted.
    pub status: Option<ProspectStatus>,
    /// Defaults to `medium` if omitted.
    pub priority: Option<ProspectPriority>,
    pub estimated_value: Option<f64>,
    pub notes: Option<String>,
}

/// DTO for partially updating a prospect.
///
/// Non-nullable columns use `Option` (absent or null means unchanged).
/// Nullable columns use [`Patch`] so an explicit `null` clears the column
/// while an absent key leaves it alone. `id` and `created_at` are
/// immutable and deliberately have no field here; `deny_unknown_fields`
/// rejects requests that try to supply them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateProspect {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Patch<String>,
    #[serde(default)]
    pub company: Patch<String>,
    #[serde(default)]
    pub position: Patch<String>,
    pub status: Option<ProspectStatus>,
    pub priority: Option<ProspectPriority>,
    #[serde(default)]
    pub estimated_value: Patch<f64>,
    #[serde(default)]
    pub notes: Patch<String>,
}

/// Optional filter predicates for listing prospects. All supplied
/// predicates combine with AND; absent predicates impose no constraint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProspectFilter {
    /// Exact status match.
    pub status: Option<ProspectStatus>,
    /// Exact priority match.
    pub priority: Option<ProspectPriority>,
    /// Exact company match.
    pub company: Option<String>,
    /// Case-insensitive substring over first_name, last_name, email, and
    /// company; a match on any of them qualifies.
    pub search: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
