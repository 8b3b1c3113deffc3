//! Repository for the `habits` table.

use sqlx::{PgPool, Postgres, QueryBuilder};

use dayroom_core::patch::Patch;

use crate::models::habit::{CreateHabit, Habit, UpdateHabit};

/// Column list for `habits` queries.
const COLUMNS: &str = "id, name, \"order\", default_time, active, created_date, comment";

/// Provides data access for habits.
pub struct HabitRepo;

impl HabitRepo {
    /// Active habits in rank order (unranked last, then by name).
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Habit>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM habits WHERE active = true \
             ORDER BY \"order\" ASC NULLS LAST, name ASC"
        );
        sqlx::query_as::<_, Habit>(&query).fetch_all(pool).await
    }

    pub async fn create(pool: &PgPool, dto: &CreateHabit) -> Result<Habit, sqlx::Error> {
        let query = format!(
            "INSERT INTO habits (id, name, \"order\", default_time, active, created_date, comment) \
             VALUES ($1, $2, $3, $4, COALESCE($5, true), CURRENT_DATE, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Habit>(&query)
            .bind(&dto.id)
            .bind(&dto.name)
            .bind(dto.order)
            .bind(dto.default_time.map(|t| t.as_str()))
            .bind(dto.active)
            .bind(&dto.comment)
            .fetch_one(pool)
            .await
    }

    /// Apply a partial update; returns `None` when the id does not exist.
    pub async fn update(
        pool: &PgPool,
        id: &str,
        dto: &UpdateHabit,
    ) -> Result<Option<Habit>, sqlx::Error> {
        if dto.is_empty() {
            return Self::find_by_id(pool, id).await;
        }

        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE habits SET ");
        {
            let mut sep = qb.separated(", ");
            if let Some(name) = &dto.name {
                sep.push("name = ");
                sep.push_bind_unseparated(name);
            }
            if let Some(active) = dto.active {
                sep.push("active = ");
                sep.push_bind_unseparated(active);
            }
            match &dto.order {
                Patch::Unset => {}
                Patch::Null => {
                    sep.push("\"order\" = NULL");
                }
                Patch::Value(order) => {
                    sep.push("\"order\" = ");
                    sep.push_bind_unseparated(*order);
                }
            }
            match &dto.default_time {
                Patch::Unset => {}
                Patch::Null => {
                    sep.push("default_time = NULL");
                }
                Patch::Value(time) => {
                    sep.push("default_time = ");
                    sep.push_bind_unseparated(time.as_str());
                }
            }
            match &dto.comment {
                Patch::Unset => {}
                Patch::Null => {
                    sep.push("comment = NULL");
                }
                Patch::Value(comment) => {
                    sep.push("comment = ");
                    sep.push_bind_unseparated(comment);
                }
            }
        }
        qb.push(" WHERE id = ");
        qb.push_bind(id);
        qb.push(format!(" RETURNING {COLUMNS}"));

        qb.build_query_as::<Habit>().fetch_optional(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Habit>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM habits WHERE id = $1");
        sqlx::query_as::<_, Habit>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
