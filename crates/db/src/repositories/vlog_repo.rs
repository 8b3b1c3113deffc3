//! Repository for the `vlogs` table.

use chrono::NaiveDate;
use sqlx::PgPool;

use crate::models::vlog::{UpsertVlog, Vlog};

/// Column list for `vlogs` queries.
const COLUMNS: &str = "week_start_date, video_url, embed_html";

/// Provides data access for weekly vlogs.
pub struct VlogRepo;

impl VlogRepo {
    pub async fn find_by_week(
        pool: &PgPool,
        week_start_date: NaiveDate,
    ) -> Result<Option<Vlog>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM vlogs WHERE week_start_date = $1");
        sqlx::query_as::<_, Vlog>(&query)
            .bind(week_start_date)
            .fetch_optional(pool)
            .await
    }

    /// Vlogs for any of the given week starts, oldest first.
    pub async fn list_by_weeks(
        pool: &PgPool,
        week_start_dates: &[NaiveDate],
    ) -> Result<Vec<Vlog>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM vlogs WHERE week_start_date = ANY($1) \
             ORDER BY week_start_date ASC"
        );
        sqlx::query_as::<_, Vlog>(&query)
            .bind(week_start_dates)
            .fetch_all(pool)
            .await
    }

    /// Insert or overwrite a week's vlog. One row per week, no history.
    pub async fn upsert(pool: &PgPool, dto: &UpsertVlog) -> Result<Vlog, sqlx::Error> {
        let query = format!(
            "INSERT INTO vlogs (week_start_date, video_url, embed_html) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (week_start_date) DO UPDATE SET \
                 video_url = EXCLUDED.video_url, \
                 embed_html = EXCLUDED.embed_html \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Vlog>(&query)
            .bind(dto.week_start_date)
            .bind(&dto.video_url)
            .bind(&dto.embed_html)
            .fetch_one(pool)
            .await
    }
}
