//! Habit and habit-entry models and DTOs.
//!
//! Habits rank with a plain integer `order`, a separate scheme from the
//! fractional string keys tasks use.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use dayroom_core::patch::Patch;
use dayroom_core::types::{HabitTime, Timestamp};

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `habits` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: String,
    pub name: String,
    pub order: Option<i32>,
    pub default_time: Option<String>,
    pub active: bool,
    pub created_date: Option<NaiveDate>,
    pub comment: Option<String>,
}

/// A row from the `habit_entries` table: one habit's check-in for one date.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitEntry {
    pub entry_id: String,
    pub date: NaiveDate,
    pub habit_id: String,
    pub state: Option<i16>,
    pub timestamp: Option<Timestamp>,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a habit.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateHabit {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub order: Option<i32>,
    #[serde(default)]
    pub default_time: Option<HabitTime>,
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default)]
    pub comment: Option<String>,
}

/// DTO for a partial habit update.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHabit {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub order: Patch<i32>,
    #[serde(default)]
    pub default_time: Patch<HabitTime>,
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default)]
    pub comment: Patch<String>,
}

impl UpdateHabit {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.order.is_unset()
            && self.default_time.is_unset()
            && self.active.is_none()
            && self.comment.is_unset()
    }
}

/// DTO for upserting a habit entry (keyed by caller-supplied `entryId`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertHabitEntry {
    pub entry_id: String,
    pub date: NaiveDate,
    pub habit_id: String,
    #[serde(default)]
    pub state: Option<i16>,
    #[serde(default)]
    pub timestamp: Option<Timestamp>,
}
