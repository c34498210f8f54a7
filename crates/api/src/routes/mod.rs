pub mod health;
pub mod photos;
pub mod prospects;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /prospects                        list (filterable), create
/// /prospects/{id}                   get with details, update, delete
/// /prospects/{id}/photos            list, add metadata
/// /prospects/{id}/activities        list, add
/// /photos/{id}                      delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/prospects", prospects::router())
        .merge(photos::router())
}
