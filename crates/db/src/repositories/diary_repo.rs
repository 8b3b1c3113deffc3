//! Repository for the `diary_entries` table.

use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::models::diary::{DiaryEntry, UpdateDiaryEntry, UpsertDiaryEntry};

/// Column list for `diary_entries` queries.
const COLUMNS: &str = "id, date, question_id, answer, created_at";

/// Provides data access for diary entries.
pub struct DiaryRepo;

impl DiaryRepo {
    /// Every diary entry, newest date first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<DiaryEntry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM diary_entries ORDER BY date DESC, created_at ASC");
        sqlx::query_as::<_, DiaryEntry>(&query).fetch_all(pool).await
    }

    /// Insert or overwrite the entry identified by `id`.
    ///
    /// Clients keep one entry per (date, question) by deriving the id from
    /// that pair, so a repeat save edits the answer in place.
    pub async fn upsert(pool: &PgPool, dto: &UpsertDiaryEntry) -> Result<DiaryEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO diary_entries (id, date, question_id, answer, created_at) \
             VALUES ($1, $2, $3, $4, COALESCE($5, now())) \
             ON CONFLICT (id) DO UPDATE SET \
                 date = EXCLUDED.date, \
                 question_id = EXCLUDED.question_id, \
                 answer = EXCLUDED.answer \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DiaryEntry>(&query)
            .bind(&dto.id)
            .bind(dto.date)
            .bind(&dto.question_id)
            .bind(&dto.answer)
            .bind(dto.created_at)
            .fetch_one(pool)
            .await
    }

    /// Apply a partial update; returns `None` when the id does not exist.
    pub async fn update(
        pool: &PgPool,
        id: &str,
        dto: &UpdateDiaryEntry,
    ) -> Result<Option<DiaryEntry>, sqlx::Error> {
        if dto.is_empty() {
            return Self::find_by_id(pool, id).await;
        }

        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE diary_entries SET ");
        {
            let mut sep = qb.separated(", ");
            if let Some(answer) = &dto.answer {
                sep.push("answer = ");
                sep.push_bind_unseparated(answer);
            }
            if let Some(date) = dto.date {
                sep.push("date = ");
                sep.push_bind_unseparated(date);
            }
            if let Some(question_id) = &dto.question_id {
                sep.push("question_id = ");
                sep.push_bind_unseparated(question_id);
            }
        }
        qb.push(" WHERE id = ");
        qb.push_bind(id);
        qb.push(format!(" RETURNING {COLUMNS}"));

        qb.build_query_as::<DiaryEntry>().fetch_optional(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<DiaryEntry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM diary_entries WHERE id = $1");
        sqlx::query_as::<_, DiaryEntry>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Hard delete. Returns `false` when the id does not exist.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM diary_entries WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
