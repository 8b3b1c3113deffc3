//! Diary entry models and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use dayroom_core::types::Timestamp;

/// A row from the `diary_entries` table: one answer to one question on one
/// date. Callers expect at most one entry per (date, question) pair, which
/// they maintain by upserting on a deterministic id.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiaryEntry {
    pub id: String,
    pub date: NaiveDate,
    pub question_id: String,
    pub answer: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating (upserting) a diary entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertDiaryEntry {
    pub id: String,
    pub date: NaiveDate,
    pub question_id: String,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

/// DTO for a partial diary entry update.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDiaryEntry {
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub question_id: Option<String>,
}

impl UpdateDiaryEntry {
    pub fn is_empty(&self) -> bool {
        self.answer.is_none() && self.date.is_none() && self.question_id.is_none()
    }
}
