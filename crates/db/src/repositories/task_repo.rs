//! Repository for the `tasks` table.
//!
//! Single-row operations follow the usual pool-per-call shape; the batch
//! operations (punt, fail, reorder) open one transaction each and roll back
//! on any per-row miss so a partial batch never commits.

use chrono::NaiveDate;
use sqlx::{PgPool, Postgres, QueryBuilder};

use dayroom_core::ordering;

use crate::models::task::{CreateTask, Task, TaskMove, UpdateTask};

/// Column list for `tasks` queries.
const COLUMNS: &str = "id, text, completed, date, created_at, category, state, \"order\"";

/// Provides data access for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// All tasks, optionally restricted to one category, ordered by date.
    ///
    /// Intra-date ordering is left to the caller: order keys compare with
    /// plain string comparison and tie-break on id in application code.
    pub async fn list(pool: &PgPool, category: Option<&str>) -> Result<Vec<Task>, sqlx::Error> {
        match category {
            Some(category) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM tasks WHERE category = $1 \
                     ORDER BY date ASC, created_at ASC"
                );
                sqlx::query_as::<_, Task>(&query)
                    .bind(category)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!("SELECT {COLUMNS} FROM tasks ORDER BY date ASC, created_at ASC");
                sqlx::query_as::<_, Task>(&query).fetch_all(pool).await
            }
        }
    }

    /// Tasks with `start <= date <= end`, ordered by date.
    pub async fn list_in_range(
        pool: &PgPool,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tasks WHERE date >= $1 AND date <= $2 \
             ORDER BY date ASC, created_at ASC"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(start)
            .bind(end)
            .fetch_all(pool)
            .await
    }

    /// Insert a task with an already-reconciled (`completed`, `state`) pair.
    pub async fn create(
        pool: &PgPool,
        dto: &CreateTask,
        completed: bool,
        state: &str,
    ) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks (id, text, completed, date, created_at, category, state, \"order\") \
             VALUES ($1, $2, $3, $4, COALESCE($5, now()), $6, $7, $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(&dto.id)
            .bind(&dto.text)
            .bind(completed)
            .bind(dto.date)
            .bind(dto.created_at)
            .bind(dto.category.map(|c| c.as_str()).unwrap_or("life"))
            .bind(state)
            .bind(&dto.order)
            .fetch_one(pool)
            .await
    }

    /// Apply a partial update; only provided fields are written.
    ///
    /// Returns `None` when the id does not exist. An empty patch reads the
    /// row back unchanged.
    pub async fn update(
        pool: &PgPool,
        id: &str,
        dto: &UpdateTask,
        completed: Option<bool>,
        state: Option<&str>,
    ) -> Result<Option<Task>, sqlx::Error> {
        if dto.is_empty() {
            return Self::find_by_id(pool, id).await;
        }

        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE tasks SET ");
        {
            let mut sep = qb.separated(", ");
            if let Some(text) = &dto.text {
                sep.push("text = ");
                sep.push_bind_unseparated(text);
            }
            if let Some(completed) = completed {
                sep.push("completed = ");
                sep.push_bind_unseparated(completed);
            }
            if let Some(state) = state {
                sep.push("state = ");
                sep.push_bind_unseparated(state);
            }
            if let Some(date) = dto.date {
                sep.push("date = ");
                sep.push_bind_unseparated(date);
            }
            if let Some(category) = dto.category {
                sep.push("category = ");
                sep.push_bind_unseparated(category.as_str());
            }
            match &dto.order {
                dayroom_core::patch::Patch::Unset => {}
                dayroom_core::patch::Patch::Null => {
                    sep.push("\"order\" = NULL");
                }
                dayroom_core::patch::Patch::Value(order) => {
                    sep.push("\"order\" = ");
                    sep.push_bind_unseparated(order);
                }
            }
        }
        qb.push(" WHERE id = ");
        qb.push_bind(id);
        qb.push(format!(" RETURNING {COLUMNS}"));

        qb.build_query_as::<Task>().fetch_optional(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = $1");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Hard delete. Returns `false` when the id does not exist.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Move a set of tasks from `source_date` to `target_date`.
    ///
    /// Each task is cloned to the target date with a fresh id and a fresh
    /// tail order key; the originals stay on the source date marked failed,
    /// preserving history. Returns `None` (rolled back) if any id is not a
    /// task on the source date.
    pub async fn batch_punt(
        pool: &PgPool,
        task_ids: &[String],
        source_date: NaiveDate,
        target_date: NaiveDate,
    ) -> Result<Option<Vec<Task>>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        // Duplicate ids in the request collapse to one move each.
        let mut ids = task_ids.to_vec();
        ids.sort_unstable();
        ids.dedup();

        let select = format!(
            "SELECT {COLUMNS} FROM tasks WHERE id = ANY($1) AND date = $2 \
             ORDER BY \"order\" ASC NULLS LAST, id ASC"
        );
        let originals = sqlx::query_as::<_, Task>(&select)
            .bind(&ids)
            .bind(source_date)
            .fetch_all(&mut *tx)
            .await?;
        if originals.len() != ids.len() {
            // Transaction dropped without commit: nothing changes.
            return Ok(None);
        }

        // Clones append after the target date's current tail.
        let max_order: Option<String> =
            sqlx::query_scalar("SELECT MAX(\"order\") FROM tasks WHERE date = $1")
                .bind(target_date)
                .fetch_one(&mut *tx)
                .await?;
        let anchor = max_order.filter(|key| {
            let valid = ordering::validate_key(key).is_ok();
            if !valid {
                tracing::warn!(%key, "Ignoring malformed order key as punt anchor");
            }
            valid
        });
        let keys = ordering::n_keys_between(anchor.as_deref(), None, originals.len())
            .map_err(|e| sqlx::Error::Protocol(e.to_string()))?;

        let insert = format!(
            "INSERT INTO tasks (id, text, completed, date, created_at, category, state, \"order\") \
             VALUES ($1, $2, false, $3, now(), $4, 'active', $5) \
             RETURNING {COLUMNS}"
        );
        let mut new_tasks = Vec::with_capacity(originals.len());
        for (original, key) in originals.iter().zip(&keys) {
            let new_task = sqlx::query_as::<_, Task>(&insert)
                .bind(uuid::Uuid::now_v7().to_string())
                .bind(&original.text)
                .bind(target_date)
                .bind(&original.category)
                .bind(key)
                .fetch_one(&mut *tx)
                .await?;
            new_tasks.push(new_task);
        }

        sqlx::query("UPDATE tasks SET state = 'failed', completed = false WHERE id = ANY($1) AND date = $2")
            .bind(&ids)
            .bind(source_date)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(new_tasks))
    }

    /// Mark a set of tasks failed in one transaction.
    ///
    /// Returns `false` (rolled back) if any id does not exist, so a partial
    /// batch never commits.
    pub async fn batch_fail(pool: &PgPool, task_ids: &[String]) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        // Duplicate ids in the request collapse to one update each.
        let mut ids = task_ids.to_vec();
        ids.sort_unstable();
        ids.dedup();

        let result =
            sqlx::query("UPDATE tasks SET state = 'failed', completed = false WHERE id = ANY($1)")
                .bind(&ids)
                .execute(&mut *tx)
                .await?;
        if result.rows_affected() as usize != ids.len() {
            return Ok(false);
        }

        tx.commit().await?;
        Ok(true)
    }

    /// Apply a set of reorder moves in one transaction.
    ///
    /// Each move writes a new order key and optionally re-buckets the task
    /// (date/category/state). Returns `false` (rolled back) if any id does
    /// not exist.
    pub async fn batch_reorder(pool: &PgPool, moves: &[TaskMove]) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        for task_move in moves {
            let result = sqlx::query(
                "UPDATE tasks SET \
                     \"order\" = $2, \
                     date = COALESCE($3, date), \
                     category = COALESCE($4, category), \
                     state = COALESCE($5, state), \
                     completed = COALESCE($6, completed) \
                 WHERE id = $1",
            )
            .bind(&task_move.id)
            .bind(&task_move.order)
            .bind(task_move.date)
            .bind(task_move.category.map(|c| c.as_str()))
            .bind(task_move.state.map(|s| s.as_str()))
            .bind(task_move.state.map(|s| s == dayroom_core::types::TaskState::Completed))
            .execute(&mut *tx)
            .await?;
            if result.rows_affected() == 0 {
                return Ok(false);
            }
        }

        tx.commit().await?;
        Ok(true)
    }
}
