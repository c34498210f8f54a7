//! Handlers for the prospect activity log.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use leadflow_core::activity::{validate_description, validate_title};
use leadflow_core::error::CoreError;
use leadflow_core::types::DbId;
use leadflow_db::models::activity::CreateActivity;
use leadflow_db::repositories::{ActivityRepo, ProspectRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

fn validation(msg: String) -> AppError {
    AppError::Core(CoreError::Validation(msg))
}

/// GET /prospects/{id}/activities
///
/// List a prospect's activities, most recent first.
pub async fn list_activities(
    State(state): State<AppState>,
    Path(prospect_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !ProspectRepo::exists(&state.pool, prospect_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Prospect",
            id: prospect_id,
        }));
    }

    let activities = ActivityRepo::list_by_prospect(&state.pool, prospect_id).await?;
    Ok(Json(DataResponse { data: activities }))
}

/// POST /prospects/{id}/activities
///
/// Append an activity to a prospect's log. `activity_date` defaults to
/// now when omitted.
pub async fn add_activity(
    State(state): State<AppState>,
    Path(prospect_id): Path<DbId>,
    Json(input): Json<CreateActivity>,
) -> AppResult<impl IntoResponse> {
    validate_title(&input.title).map_err(validation)?;
    if let Some(ref description) = input.description {
        validate_description(description).map_err(validation)?;
    }

    if !ProspectRepo::exists(&state.pool, prospect_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Prospect",
            id: prospect_id,
        }));
    }

    let activity = ActivityRepo::create(&state.pool, prospect_id, &input).await?;

    tracing::info!(
        prospect_id,
        activity_id = activity.id,
        activity_type = ?activity.activity_type,
        "Activity recorded"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: activity })))
}
