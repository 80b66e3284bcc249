//! Repository for the `items` table.
//!
//! Writes return the freshly joined record through a CTE so every path
//! (create, update, fetch, list) yields the same resolvable shape in a
//! single statement.

use packrat_core::types::DbId;
use sqlx::PgPool;

use crate::models::item::{ItemPatch, ItemRecord, NewItem};

/// Joined column list shared across queries (items aliased to `i`,
/// locations to `l`).
const COLUMNS: &str = "i.id, i.name, i.location_id, l.name AS location_name, \
    i.legacy_location, i.image_data, i.image_content_type, i.created_at, i.updated_at";

/// Raw item columns returned out of insert/update CTEs.
const ITEM_COLUMNS: &str = "id, name, location_id, legacy_location, \
    image_data, image_content_type, created_at, updated_at";

/// Provides CRUD operations for items.
pub struct ItemRepo;

impl ItemRepo {
    /// Insert a new item, returning the created row joined with its
    /// location name.
    pub async fn create(pool: &PgPool, input: &NewItem) -> Result<ItemRecord, sqlx::Error> {
        let query = format!(
            "WITH inserted AS (
                INSERT INTO items (name, location_id, legacy_location, image_data, image_content_type)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING {ITEM_COLUMNS}
             )
             SELECT {COLUMNS} FROM inserted i
             LEFT JOIN locations l ON l.id = i.location_id"
        );
        sqlx::query_as::<_, ItemRecord>(&query)
            .bind(&input.name)
            .bind(input.location_id)
            .bind(&input.legacy_location)
            .bind(input.image.as_ref().map(|img| img.data.as_slice()))
            .bind(input.image.as_ref().map(|img| img.content_type.as_str()))
            .fetch_one(pool)
            .await
    }

    /// Find an item by its internal ID, joined with its location name.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ItemRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM items i
             LEFT JOIN locations l ON l.id = i.location_id
             WHERE i.id = $1"
        );
        sqlx::query_as::<_, ItemRecord>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all items, newest first. Ties on the creation timestamp fall
    /// back to id so the order stays deterministic.
    pub async fn list(pool: &PgPool) -> Result<Vec<ItemRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM items i
             LEFT JOIN locations l ON l.id = i.location_id
             ORDER BY i.created_at DESC, i.id DESC"
        );
        sqlx::query_as::<_, ItemRecord>(&query).fetch_all(pool).await
    }

    /// Apply a sparse patch to an item in one atomic UPDATE.
    ///
    /// Field semantics:
    /// - `name`: replaces when set.
    /// - `location`: `Some(Some(id))` relinks, `Some(None)` disconnects;
    ///   either clears retained legacy text. `None` leaves all location
    ///   columns untouched.
    /// - `remove_image` clears the image and wins over a supplied `image`;
    ///   otherwise a supplied `image` replaces it.
    ///
    /// Returns `None` if no row with the given `id` exists. An empty patch
    /// is a plain read.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        patch: &ItemPatch,
    ) -> Result<Option<ItemRecord>, sqlx::Error> {
        if patch.is_empty() {
            return Self::find_by_id(pool, id).await;
        }

        let query = format!(
            "WITH updated AS (
                UPDATE items SET
                    name = COALESCE($2, name),
                    location_id = CASE WHEN $3 THEN $4 ELSE location_id END,
                    legacy_location = CASE WHEN $3 THEN NULL ELSE legacy_location END,
                    image_data = CASE
                        WHEN $5 THEN NULL
                        WHEN $6::bytea IS NOT NULL THEN $6
                        ELSE image_data
                    END,
                    image_content_type = CASE
                        WHEN $5 THEN NULL
                        WHEN $6::bytea IS NOT NULL THEN $7
                        ELSE image_content_type
                    END,
                    updated_at = NOW()
                WHERE id = $1
                RETURNING {ITEM_COLUMNS}
             )
             SELECT {COLUMNS} FROM updated i
             LEFT JOIN locations l ON l.id = i.location_id"
        );
        sqlx::query_as::<_, ItemRecord>(&query)
            .bind(id)
            .bind(&patch.name)
            .bind(patch.location.is_some())
            .bind(patch.location.flatten())
            .bind(patch.remove_image)
            .bind(patch.image.as_ref().map(|img| img.data.as_slice()))
            .bind(patch.image.as_ref().map(|img| img.content_type.as_str()))
            .fetch_optional(pool)
            .await
    }

    /// Delete an item by ID. Returns `true` if a row was removed. No
    /// cascade: the linked location, if any, is left untouched.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
