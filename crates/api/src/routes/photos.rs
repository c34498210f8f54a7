//! Route definitions for photos addressed by their own ID.
//!
//! Prospect-scoped photo routes are mounted via [`super::prospects::router`];
//! this module only provides the top-level `/photos/{id}` delete.

use axum::routing::delete;
use axum::Router;

use crate::handlers::photos;
use crate::state::AppState;

/// Routes mounted at the API root.
///
/// ```text
/// DELETE /photos/{id}   -> delete_photo
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/photos/{id}", delete(photos::delete_photo))
}
