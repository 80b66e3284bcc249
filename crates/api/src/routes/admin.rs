//! Route definitions for the `/admin` maintenance operations.

use axum::routing::post;
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// POST   /reset   -> delete all items, then all locations
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/reset", post(admin::reset))
}
