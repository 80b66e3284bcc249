//! Route definitions for the `/locations` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::location;
use crate::state::AppState;

/// Routes mounted at `/locations`.
///
/// ```text
/// GET    /        -> list (with item counts)
/// POST   /        -> create
/// PATCH  /{id}    -> rename
/// DELETE /{id}    -> delete (refused while in use)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(location::list).post(location::create))
        .route("/{id}", patch(location::rename).delete(location::delete))
}
