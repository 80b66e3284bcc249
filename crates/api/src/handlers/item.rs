//! Handlers for the `/items` resource.
//!
//! Every response goes through [`ItemRecord::into_view`], so list, fetch,
//! create, and update all return the same shape: a resolved display
//! location string plus the raw link for clients that need it.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use packrat_core::error::CoreError;
use packrat_core::image::ImagePayload;
use packrat_core::location::matches_query;
use packrat_core::types::DbId;
use packrat_db::models::item::{ItemPatch, ItemRecord, ItemView, NewItem};
use packrat_db::repositories::{ItemRepo, LocationRepo};
use serde::{Deserialize, Deserializer};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /items`.
#[derive(Debug, Default, Deserialize)]
pub struct ListItemsQuery {
    /// Substring filter against item names and resolved locations.
    pub q: Option<String>,
}

/// Request body for `POST /items`.
#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    pub name: String,
    /// Link to a location. When set, `legacy_location` is never stored.
    pub location_id: Option<DbId>,
    /// Free-text location for records from before locations existed.
    pub legacy_location: Option<String>,
    /// Image as a `data:<content-type>;base64,<payload>` token.
    pub image: Option<String>,
}

/// Request body for `PATCH /items/{id}`.
///
/// Every field is independently optional; an absent field leaves the
/// stored value untouched. `location_id` is a three-way signal: absent =
/// untouched, `null` = disconnect, a value = relink.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateItemRequest {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub location_id: Option<Option<DbId>>,
    pub image: Option<String>,
    #[serde(default)]
    pub remove_image: bool,
}

/// Distinguish an explicit JSON `null` from an absent field.
///
/// Serde collapses both to `None` for a plain `Option`; wrapping the
/// present case in `Some` preserves the three-state signal.
fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(de).map(Some)
}

/// Unwrap a validation error into its bare message for collection.
fn violation_message(err: CoreError) -> String {
    match err {
        CoreError::Validation(msg) => msg,
        other => other.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/items?q=
///
/// Newest first. With `q`, case-insensitive substring match against the
/// name or the resolved display location; filtering preserves the order.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListItemsQuery>,
) -> AppResult<Json<Vec<ItemView>>> {
    let records = ItemRepo::list(&state.pool).await?;
    let query = params.q.unwrap_or_default();
    let items = records
        .into_iter()
        .map(ItemRecord::into_view)
        .filter(|item| matches_query(&item.name, &item.location, &query))
        .collect();
    Ok(Json(items))
}

/// GET /api/v1/items/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ItemView>> {
    let record = ItemRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Item", id }))?;
    Ok(Json(record.into_view()))
}

/// POST /api/v1/items
///
/// Validation collects every violation rather than stopping at the first.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateItemRequest>,
) -> AppResult<(StatusCode, Json<ItemView>)> {
    let mut violations = Vec::new();

    let name = input.name.trim().to_string();
    if name.is_empty() {
        violations.push("Item name is required".to_string());
    }

    let image = match input.image.as_deref() {
        Some(token) => match ImagePayload::from_data_uri(token) {
            Ok(payload) => Some(payload),
            Err(err) => {
                violations.push(violation_message(err));
                None
            }
        },
        None => None,
    };

    if let Some(location_id) = input.location_id {
        if LocationRepo::find_by_id(&state.pool, location_id)
            .await?
            .is_none()
        {
            violations.push(format!("Location {location_id} does not exist"));
        }
    }

    if !violations.is_empty() {
        return Err(AppError::Core(CoreError::Validation(violations.join("; "))));
    }

    // A linked item never stores legacy text; blank legacy text is unset.
    let legacy_location = if input.location_id.is_some() {
        None
    } else {
        input
            .legacy_location
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
    };

    let record = ItemRepo::create(
        &state.pool,
        &NewItem {
            name,
            location_id: input.location_id,
            legacy_location,
            image,
        },
    )
    .await?;
    Ok((StatusCode::CREATED, Json(record.into_view())))
}

/// PATCH /api/v1/items/{id}
///
/// Sparse partial update; the whole patch applies atomically or not at
/// all.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateItemRequest>,
) -> AppResult<Json<ItemView>> {
    // Empty-after-trim names are ignored rather than applied; the
    // name-required invariant holds on update too.
    let name = input
        .name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string);

    let image = match input.image.as_deref() {
        Some(token) if !input.remove_image => {
            Some(ImagePayload::from_data_uri(token).map_err(AppError::Core)?)
        }
        _ => None,
    };

    if let Some(Some(location_id)) = input.location_id {
        if LocationRepo::find_by_id(&state.pool, location_id)
            .await?
            .is_none()
        {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Location {location_id} does not exist"
            ))));
        }
    }

    let patch = ItemPatch {
        name,
        location: input.location_id,
        image,
        remove_image: input.remove_image,
    };

    let record = ItemRepo::update(&state.pool, id, &patch)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Item", id }))?;
    Ok(Json(record.into_view()))
}

/// DELETE /api/v1/items/{id}
///
/// No cascade: deleting an item never touches its location.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ItemRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Item", id }))
    }
}
