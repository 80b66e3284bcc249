//! Handlers for the `/locations` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use packrat_core::error::CoreError;
use packrat_core::location::normalize_name;
use packrat_core::types::DbId;
use packrat_db::models::location::{CreateLocation, Location, LocationWithCount, RenameLocation};
use packrat_db::repositories::LocationRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/v1/locations
///
/// Every location with its current linked-item count, name ascending.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<LocationWithCount>>> {
    let locations = LocationRepo::list_with_counts(&state.pool).await?;
    Ok(Json(locations))
}

/// POST /api/v1/locations
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateLocation>,
) -> AppResult<(StatusCode, Json<Location>)> {
    let name = normalize_name(&input.name, "Location name")?;

    // Friendly conflict message up front; the unique constraint still
    // backstops a concurrent create.
    if LocationRepo::find_by_name(&state.pool, name).await?.is_some() {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "A location named '{name}' already exists"
        ))));
    }

    let location = LocationRepo::create(&state.pool, name).await?;
    Ok((StatusCode::CREATED, Json(location)))
}

/// PATCH /api/v1/locations/{id}
pub async fn rename(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<RenameLocation>,
) -> AppResult<Json<Location>> {
    let name = normalize_name(&input.name, "Location name")?;

    LocationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Location",
            id,
        }))?;

    // Renaming a location to its own current name is a no-op, not a
    // conflict.
    if let Some(existing) = LocationRepo::find_by_name(&state.pool, name).await? {
        if existing.id != id {
            return Err(AppError::Core(CoreError::Conflict(format!(
                "A location named '{name}' already exists"
            ))));
        }
    }

    let location = LocationRepo::rename(&state.pool, id, name)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Location",
            id,
        }))?;
    Ok(Json(location))
}

/// DELETE /api/v1/locations/{id}
///
/// Refused while any item still links here; the conflict message carries
/// the blocking count.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let location = LocationRepo::find_with_count(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Location",
            id,
        }))?;

    if location.item_count > 0 {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Cannot delete location '{}': {} item(s) are still assigned to it",
            location.name, location.item_count
        ))));
    }

    LocationRepo::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
