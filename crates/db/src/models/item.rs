//! Item entity model and DTOs.
//!
//! Items carry a dual-mode location address: a link to a location row, or
//! free text retained from records that predate normalized locations. Every
//! read path resolves that address to a single display string through
//! [`packrat_core::location::resolve_display_location`], so the wire shape
//! never varies between list, fetch, create, and update responses.

use packrat_core::image::ImagePayload;
use packrat_core::location::{self, LocationAddress};
use packrat_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// An item row joined with the linked location's name (when any).
#[derive(Debug, Clone, FromRow)]
pub struct ItemRecord {
    pub id: DbId,
    pub name: String,
    pub location_id: Option<DbId>,
    /// Name of the linked location, from the join. Set iff `location_id` is.
    pub location_name: Option<String>,
    pub legacy_location: Option<String>,
    pub image_data: Option<Vec<u8>>,
    pub image_content_type: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ItemRecord {
    /// The item's location address as stored.
    pub fn address(&self) -> LocationAddress {
        LocationAddress::from_columns(self.location_id, self.legacy_location.as_deref())
    }

    /// Resolve into the wire shape shared by every read path.
    pub fn into_view(self) -> ItemView {
        let resolved =
            location::resolve_display_location(&self.address(), |_| self.location_name.clone());
        let image = match (self.image_data, self.image_content_type) {
            (Some(data), Some(content_type)) => Some(
                ImagePayload {
                    content_type,
                    data,
                }
                .to_data_uri(),
            ),
            _ => None,
        };
        ItemView {
            id: self.id,
            name: self.name,
            location: resolved,
            location_id: self.location_id,
            image,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// The wire representation of an item: one resolved display string for the
/// location, plus the raw link for clients that need the identifier.
#[derive(Debug, Clone, Serialize)]
pub struct ItemView {
    pub id: DbId,
    pub name: String,
    /// Resolved display location; never null.
    pub location: String,
    /// Raw reference when the item is linked to a location.
    pub location_id: Option<DbId>,
    /// Image as a `data:<content-type>;base64,<payload>` token.
    pub image: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Insert payload for a new item. Callers validate before constructing:
/// the name is trimmed and non-empty, and a linked item carries no legacy
/// text.
#[derive(Debug, Clone)]
pub struct NewItem {
    pub name: String,
    pub location_id: Option<DbId>,
    pub legacy_location: Option<String>,
    pub image: Option<ImagePayload>,
}

/// Sparse update payload. `None` fields leave the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct ItemPatch {
    /// Replacement name, already trimmed and non-empty.
    pub name: Option<String>,
    /// Three-state location signal: `None` = untouched, `Some(None)` =
    /// disconnect, `Some(Some(id))` = relink. Touching the location either
    /// way also clears retained legacy text.
    pub location: Option<Option<DbId>>,
    /// Replacement image. Ignored when `remove_image` is set.
    pub image: Option<ImagePayload>,
    /// Clear the stored image regardless of any supplied `image`.
    pub remove_image: bool,
}

impl ItemPatch {
    /// Whether the patch changes anything at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.location.is_none() && self.image.is_none() && !self.remove_image
    }
}
