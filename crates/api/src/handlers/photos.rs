//! Handlers for prospect photos.
//!
//! Photos are metadata-only here: the upload endpoint records the path,
//! size, and mime type of a file some other component has already written.
//! File content is never validated.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use leadflow_core::error::CoreError;
use leadflow_core::photo::{validate_file_size, validate_photo_field};
use leadflow_core::types::DbId;
use leadflow_db::models::photo::CreatePhoto;
use leadflow_db::repositories::{PhotoRepo, ProspectRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

fn validation(msg: String) -> AppError {
    AppError::Core(CoreError::Validation(msg))
}

/// GET /prospects/{id}/photos
///
/// List a prospect's photos, newest first.
pub async fn list_photos(
    State(state): State<AppState>,
    Path(prospect_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !ProspectRepo::exists(&state.pool, prospect_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Prospect",
            id: prospect_id,
        }));
    }

    let photos = PhotoRepo::list_by_prospect(&state.pool, prospect_id).await?;
    Ok(Json(DataResponse { data: photos }))
}

/// POST /prospects/{id}/photos
///
/// Record an uploaded photo's metadata against a prospect.
pub async fn add_photo(
    State(state): State<AppState>,
    Path(prospect_id): Path<DbId>,
    Json(input): Json<CreatePhoto>,
) -> AppResult<impl IntoResponse> {
    validate_photo_field("filename", &input.filename).map_err(validation)?;
    validate_photo_field("original_name", &input.original_name).map_err(validation)?;
    validate_photo_field("mime_type", &input.mime_type).map_err(validation)?;
    validate_photo_field("file_path", &input.file_path).map_err(validation)?;
    validate_file_size(input.file_size).map_err(validation)?;

    if !ProspectRepo::exists(&state.pool, prospect_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Prospect",
            id: prospect_id,
        }));
    }

    let photo = PhotoRepo::create(&state.pool, prospect_id, &input).await?;

    tracing::info!(
        prospect_id,
        photo_id = photo.id,
        file_size = photo.file_size,
        "Photo recorded"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: photo })))
}

/// DELETE /photos/{id}
///
/// Delete a photo record. The stored file itself is not touched.
pub async fn delete_photo(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = PhotoRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Photo",
            id,
        }));
    }

    tracing::info!(photo_id = id, "Photo deleted");

    Ok(StatusCode::NO_CONTENT)
}
