//! Handlers for prospect CRUD.
//!
//! Field validation happens here, before any repository call, and applies
//! the same rules on create and on each supplied update field. Enum
//! membership (status, priority) is enforced earlier still, when the JSON
//! body is deserialized into the closed DTO enums.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use leadflow_core::error::CoreError;
use leadflow_core::patch::Patch;
use leadflow_core::prospect::{validate_email, validate_estimated_value, validate_person_name};
use leadflow_core::types::DbId;
use leadflow_db::models::prospect::{
    CreateProspect, ProspectFilter, ProspectWithDetails, UpdateProspect,
};
use leadflow_db::repositories::{ActivityRepo, PhotoRepo, ProspectRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Wrap a field-level validation failure as a typed validation error.
fn validation(msg: String) -> AppError {
    AppError::Core(CoreError::Validation(msg))
}

fn validate_create(input: &CreateProspect) -> Result<(), AppError> {
    validate_person_name("first_name", &input.first_name).map_err(validation)?;
    validate_person_name("last_name", &input.last_name).map_err(validation)?;
    validate_email(&input.email).map_err(validation)?;
    if let Some(value) = input.estimated_value {
        validate_estimated_value(value).map_err(validation)?;
    }
    Ok(())
}

/// Re-apply creation rules to every field the update supplies. Absent
/// fields are not validated; an explicit null on `estimated_value` is a
/// clear, not a value, so it passes.
fn validate_update(input: &UpdateProspect) -> Result<(), AppError> {
    if let Some(ref first_name) = input.first_name {
        validate_person_name("first_name", first_name).map_err(validation)?;
    }
    if let Some(ref last_name) = input.last_name {
        validate_person_name("last_name", last_name).map_err(validation)?;
    }
    if let Some(ref email) = input.email {
        validate_email(email).map_err(validation)?;
    }
    if let Patch::Value(value) = input.estimated_value {
        validate_estimated_value(value).map_err(validation)?;
    }
    Ok(())
}

/// GET /prospects?status=&priority=&company=&search=&limit=&offset=
///
/// List prospects matching the given filter, newest first.
pub async fn list_prospects(
    State(state): State<AppState>,
    Query(filter): Query<ProspectFilter>,
) -> AppResult<impl IntoResponse> {
    let prospects = ProspectRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: prospects }))
}

/// POST /prospects
///
/// Create a new prospect.
pub async fn create_prospect(
    State(state): State<AppState>,
    Json(input): Json<CreateProspect>,
) -> AppResult<impl IntoResponse> {
    validate_create(&input)?;

    let prospect = ProspectRepo::create(&state.pool, &input).await?;

    tracing::info!(
        prospect_id = prospect.id,
        email = %prospect.email,
        "Prospect created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: prospect })))
}

/// GET /prospects/{id}
///
/// Get a single prospect with its photos and activities.
pub async fn get_prospect(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let prospect = ProspectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Prospect",
            id,
        }))?;

    let photos = PhotoRepo::list_by_prospect(&state.pool, id).await?;
    let activities = ActivityRepo::list_by_prospect(&state.pool, id).await?;

    Ok(Json(DataResponse {
        data: ProspectWithDetails {
            prospect,
            photos,
            activities,
        },
    }))
}

/// PUT /prospects/{id}
///
/// Partially update a prospect. Omitted fields are left unchanged; an
/// explicit null clears a nullable field. `updated_at` is refreshed even
/// when nothing visibly changes.
pub async fn update_prospect(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProspect>,
) -> AppResult<impl IntoResponse> {
    validate_update(&input)?;

    let prospect = ProspectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Prospect",
            id,
        }))?;

    tracing::info!(prospect_id = id, "Prospect updated");

    Ok(Json(DataResponse { data: prospect }))
}

/// DELETE /prospects/{id}
///
/// Delete a prospect. Photos and activities are not cascaded; if any
/// remain, the delete fails with a conflict.
pub async fn delete_prospect(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = match ProspectRepo::delete(&state.pool, id).await {
        Ok(deleted) => deleted,
        // FK violation: child rows still reference this prospect.
        Err(sqlx::Error::Database(db_err)) if db_err.code().as_deref() == Some("23503") => {
            return Err(AppError::Core(CoreError::Conflict(format!(
                "Prospect {id} still has photos or activities"
            ))));
        }
        Err(err) => return Err(err.into()),
    };

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Prospect",
            id,
        }));
    }

    tracing::info!(prospect_id = id, "Prospect deleted");

    Ok(StatusCode::NO_CONTENT)
}
