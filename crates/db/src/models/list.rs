//! List and list-item models and DTOs.
//!
//! Lists order among themselves with fractional string keys; items within a
//! list use a dense integer `position` maintained by whole-list replacement.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use dayroom_core::patch::Patch;
use dayroom_core::types::Timestamp;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `lists` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRow {
    pub id: String,
    pub title: String,
    pub color: String,
    pub created_at: Timestamp,
    pub order: Option<String>,
}

/// A row from the `list_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    pub id: String,
    pub list_id: String,
    pub text: String,
    pub completed: bool,
    pub created_at: Timestamp,
    pub position: i32,
}

/// A list together with its items, as served to clients.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListWithItems {
    #[serde(flatten)]
    pub list: ListRow,
    pub items: Vec<ListItem>,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a list.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateList {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub order: Option<String>,
}

/// One item in a whole-list item replacement; `position` is derived from
/// its index in the submitted sequence.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceListItem {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub completed: Option<bool>,
}

/// DTO for a partial list update, optionally replacing all items.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateList {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub order: Patch<String>,
    #[serde(default)]
    pub items: Option<Vec<ReplaceListItem>>,
}

impl UpdateList {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.color.is_none()
            && self.order.is_unset()
            && self.items.is_none()
    }
}
