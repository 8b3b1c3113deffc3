//! Repository for the `habit_entries` table.

use chrono::NaiveDate;
use sqlx::PgPool;

use crate::models::habit::{HabitEntry, UpsertHabitEntry};

/// Column list for `habit_entries` queries.
const COLUMNS: &str = "entry_id, date, habit_id, state, \"timestamp\"";

/// Provides data access for habit check-ins.
pub struct HabitEntryRepo;

impl HabitEntryRepo {
    /// Entries with `start <= date <= end`.
    pub async fn list_in_range(
        pool: &PgPool,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<HabitEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM habit_entries WHERE date >= $1 AND date <= $2 \
             ORDER BY date ASC, habit_id ASC"
        );
        sqlx::query_as::<_, HabitEntry>(&query)
            .bind(start)
            .bind(end)
            .fetch_all(pool)
            .await
    }

    /// Insert or overwrite the entry identified by `entry_id`.
    ///
    /// Clients derive the id from (habit, date), so re-submitting the same
    /// check-in replaces the earlier state rather than duplicating it.
    pub async fn upsert(
        pool: &PgPool,
        dto: &UpsertHabitEntry,
    ) -> Result<HabitEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO habit_entries (entry_id, date, habit_id, state, \"timestamp\") \
             VALUES ($1, $2, $3, $4, $5) \
             ON CONFLICT (entry_id) DO UPDATE SET \
                 date = EXCLUDED.date, \
                 habit_id = EXCLUDED.habit_id, \
                 state = EXCLUDED.state, \
                 \"timestamp\" = EXCLUDED.\"timestamp\" \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HabitEntry>(&query)
            .bind(&dto.entry_id)
            .bind(dto.date)
            .bind(&dto.habit_id)
            .bind(dto.state)
            .bind(dto.timestamp)
            .fetch_one(pool)
            .await
    }

    /// Hard delete. Returns `false` when the id does not exist.
    pub async fn delete(pool: &PgPool, entry_id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM habit_entries WHERE entry_id = $1")
            .bind(entry_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
