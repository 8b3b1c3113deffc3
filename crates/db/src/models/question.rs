//! Diary question models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `questions` table.
///
/// Some questions are date-scoped; `date` is a plain `YYYY-MM-DD` string (or
/// empty) rather than a SQL date because it is only ever matched, never
/// computed with.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub text: String,
    pub order: i32,
    pub active: bool,
    pub date: Option<String>,
}

/// DTO for creating a question.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuestion {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub order: Option<i32>,
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default)]
    pub date: Option<String>,
}
