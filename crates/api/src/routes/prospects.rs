//! Route definitions for prospects and their child records.

use axum::routing::get;
use axum::Router;

use crate::handlers::{activities, photos, prospects};
use crate::state::AppState;

/// Routes mounted at `/prospects`.
///
/// ```text
/// GET    /                  -> list_prospects (?status, priority, company, search, limit, offset)
/// POST   /                  -> create_prospect
/// GET    /{id}              -> get_prospect (with photos + activities)
/// PUT    /{id}              -> update_prospect
/// DELETE /{id}              -> delete_prospect
/// GET    /{id}/photos       -> list_photos
/// POST   /{id}/photos       -> add_photo
/// GET    /{id}/activities   -> list_activities
/// POST   /{id}/activities   -> add_activity
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(prospects::list_prospects).post(prospects::create_prospect),
        )
        .route(
            "/{id}",
            get(prospects::get_prospect)
                .put(prospects::update_prospect)
                .delete(prospects::delete_prospect),
        )
        .route(
            "/{id}/photos",
            get(photos::list_photos).post(photos::add_photo),
        )
        .route(
            "/{id}/activities",
            get(activities::list_activities).post(activities::add_activity),
        )
}
