//! Repository for the `locations` table.

use packrat_core::types::DbId;
use sqlx::PgPool;

use crate::models::location::{Location, LocationWithCount};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_at, updated_at";

/// Column list for count-annotated queries (aliased to `l`, joined to `i`).
const COUNT_COLUMNS: &str =
    "l.id, l.name, COUNT(i.id) AS item_count, l.created_at, l.updated_at";

/// Provides CRUD operations for locations.
pub struct LocationRepo;

impl LocationRepo {
    /// Insert a new location, returning the created row.
    ///
    /// The caller trims the name first; a duplicate name surfaces as a
    /// unique-constraint violation on `uq_locations_name`.
    pub async fn create(pool: &PgPool, name: &str) -> Result<Location, sqlx::Error> {
        let query = format!("INSERT INTO locations (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Location>(&query)
            .bind(name)
            .fetch_one(pool)
            .await
    }

    /// Find a location by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Location>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM locations WHERE id = $1");
        sqlx::query_as::<_, Location>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a location by exact name. The match is case-sensitive, like
    /// the unique constraint it prechecks.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Location>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM locations WHERE name = $1");
        sqlx::query_as::<_, Location>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List all locations ordered by name ascending, each annotated with
    /// the number of items currently linked to it.
    pub async fn list_with_counts(pool: &PgPool) -> Result<Vec<LocationWithCount>, sqlx::Error> {
        let query = format!(
            "SELECT {COUNT_COLUMNS} FROM locations l
             LEFT JOIN items i ON i.location_id = l.id
             GROUP BY l.id
             ORDER BY l.name ASC"
        );
        sqlx::query_as::<_, LocationWithCount>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a single location with its current linked-item count.
    pub async fn find_with_count(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<LocationWithCount>, sqlx::Error> {
        let query = format!(
            "SELECT {COUNT_COLUMNS} FROM locations l
             LEFT JOIN items i ON i.location_id = l.id
             WHERE l.id = $1
             GROUP BY l.id"
        );
        sqlx::query_as::<_, LocationWithCount>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Rename a location. Returns `None` if no row with the given `id`
    /// exists. A colliding name surfaces as a unique-constraint violation.
    pub async fn rename(
        pool: &PgPool,
        id: DbId,
        name: &str,
    ) -> Result<Option<Location>, sqlx::Error> {
        let query = format!(
            "UPDATE locations SET name = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Location>(&query)
            .bind(id)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a location by ID. Returns `true` if a row was removed.
    ///
    /// `fk_items_location` is RESTRICT, so deleting a location that still
    /// has linked items fails at the database even if the caller skipped
    /// the in-use guard.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM locations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
