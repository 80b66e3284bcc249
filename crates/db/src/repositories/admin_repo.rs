//! Destructive maintenance operations.

use serde::Serialize;
use sqlx::PgPool;

/// Row counts removed by a full reset.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ResetCounts {
    pub items_deleted: u64,
    pub locations_deleted: u64,
}

/// Provides catalog-wide maintenance operations.
pub struct AdminRepo;

impl AdminRepo {
    /// Delete every item, then every location, in one transaction.
    ///
    /// Items go first: they hold the referencing side of
    /// `fk_items_location`, so the reverse order is rejected by the
    /// database. Trivially succeeds on an empty store.
    pub async fn reset_all(pool: &PgPool) -> Result<ResetCounts, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let items = sqlx::query("DELETE FROM items").execute(&mut *tx).await?;
        let locations = sqlx::query("DELETE FROM locations")
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(ResetCounts {
            items_deleted: items.rows_affected(),
            locations_deleted: locations.rows_affected(),
        })
    }
}
