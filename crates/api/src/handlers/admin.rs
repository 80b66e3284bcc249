//! Handlers for the `/admin` maintenance operations.

use axum::extract::State;
use axum::Json;
use packrat_db::repositories::AdminRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::state::AppState;

/// Response body for `POST /admin/reset`.
#[derive(Debug, Serialize)]
pub struct ResetResponse {
    pub message: String,
    pub items_deleted: u64,
    pub locations_deleted: u64,
}

/// POST /api/v1/admin/reset
///
/// Deletes every item and location. Irreversible; any confirmation step
/// belongs to the caller, not this layer.
pub async fn reset(State(state): State<AppState>) -> AppResult<Json<ResetResponse>> {
    let counts = AdminRepo::reset_all(&state.pool).await?;
    tracing::info!(
        items = counts.items_deleted,
        locations = counts.locations_deleted,
        "Catalog reset"
    );
    Ok(Json(ResetResponse {
        message: "All items and locations deleted".to_string(),
        items_deleted: counts.items_deleted,
        locations_deleted: counts.locations_deleted,
    }))
}
