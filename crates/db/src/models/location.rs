//! Location entity model and DTOs.

use packrat_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A location row from the `locations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Location {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A location annotated with the number of items currently linked to it.
///
/// The count is computed per query, never stored.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LocationWithCount {
    pub id: DbId,
    pub name: String,
    pub item_count: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new location.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLocation {
    pub name: String,
}

/// DTO for renaming a location.
#[derive(Debug, Clone, Deserialize)]
pub struct RenameLocation {
    pub name: String,
}
