//! Next-item ("up next" board card) models and DTOs.
//!
//! Next items are never hard-deleted: `deleted_at` soft-deletes and
//! `started_at` marks "in progress"; the visible set is rows with both
//! null. Patches must therefore distinguish an absent field from an
//! explicit null, which is what [`Patch`] encodes.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use dayroom_core::patch::Patch;
use dayroom_core::types::{NextItemSize, Timestamp};

/// A row from the `next_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NextItem {
    pub id: String,
    pub title: String,
    pub content: String,
    pub color: String,
    pub size: String,
    pub created_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
    pub started_at: Option<Timestamp>,
}

/// DTO for creating a next item.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNextItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub size: Option<NextItemSize>,
}

/// DTO for a partial next-item update.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNextItem {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub size: Option<NextItemSize>,
    /// Nullable gate field: `null` restores the item from the trash.
    #[serde(default)]
    pub deleted_at: Patch<Timestamp>,
    /// Nullable gate field: `null` moves the item back to "not started".
    #[serde(default)]
    pub started_at: Patch<Timestamp>,
}

impl UpdateNextItem {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.color.is_none()
            && self.size.is_none()
            && self.deleted_at.is_unset()
            && self.started_at.is_unset()
    }
}
