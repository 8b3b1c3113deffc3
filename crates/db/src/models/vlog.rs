//! Weekly vlog models and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `vlogs` table: one vlog per ISO week start, no history.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Vlog {
    pub week_start_date: NaiveDate,
    pub video_url: String,
    pub embed_html: String,
}

/// DTO for upserting a week's vlog.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertVlog {
    pub week_start_date: NaiveDate,
    pub video_url: String,
    pub embed_html: String,
}

/// Body of `POST /vlogs/batch`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchVlogsRequest {
    pub week_start_dates: Vec<NaiveDate>,
}
