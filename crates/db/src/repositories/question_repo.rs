//! Repository for the `questions` table.

use sqlx::PgPool;

use crate::models::question::{CreateQuestion, Question};

/// Column list for `questions` queries.
const COLUMNS: &str = "id, text, \"order\", active, date";

/// Provides data access for diary questions.
pub struct QuestionRepo;

impl QuestionRepo {
    /// Active questions in display order.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM questions WHERE active = true ORDER BY \"order\" ASC, id ASC"
        );
        sqlx::query_as::<_, Question>(&query).fetch_all(pool).await
    }

    pub async fn create(pool: &PgPool, dto: &CreateQuestion) -> Result<Question, sqlx::Error> {
        let query = format!(
            "INSERT INTO questions (id, text, \"order\", active, date) \
             VALUES ($1, $2, COALESCE($3, 999), COALESCE($4, true), $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(&dto.id)
            .bind(&dto.text)
            .bind(dto.order)
            .bind(dto.active)
            .bind(&dto.date)
            .fetch_one(pool)
            .await
    }
}
