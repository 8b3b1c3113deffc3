//! Repository for the `next_items` table.

use sqlx::{PgPool, Postgres, QueryBuilder};

use dayroom_core::patch::Patch;

use crate::models::next_item::{CreateNextItem, NextItem, UpdateNextItem};

/// Column list for `next_items` queries.
const COLUMNS: &str = "id, title, content, color, size, created_at, deleted_at, started_at";

/// Provides data access for "up next" board cards.
pub struct NextItemRepo;

impl NextItemRepo {
    /// Cards on the board: neither soft-deleted nor started.
    pub async fn list_visible(pool: &PgPool) -> Result<Vec<NextItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM next_items \
             WHERE deleted_at IS NULL AND started_at IS NULL \
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, NextItem>(&query).fetch_all(pool).await
    }

    pub async fn create(pool: &PgPool, dto: &CreateNextItem) -> Result<NextItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO next_items (id, title, content, color, size) \
             VALUES ($1, $2, COALESCE($3, ''), COALESCE($4, '#2D2D2D'), COALESCE($5, 'medium')) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, NextItem>(&query)
            .bind(&dto.id)
            .bind(&dto.title)
            .bind(&dto.content)
            .bind(&dto.color)
            .bind(dto.size.map(|s| s.as_str()))
            .fetch_one(pool)
            .await
    }

    /// Apply a partial update; returns `None` when the id does not exist.
    ///
    /// Soft-deleted rows remain updatable, which is how a trashed card gets
    /// restored (`deleted_at: null`).
    pub async fn update(
        pool: &PgPool,
        id: &str,
        dto: &UpdateNextItem,
    ) -> Result<Option<NextItem>, sqlx::Error> {
        if dto.is_empty() {
            return Self::find_by_id(pool, id).await;
        }

        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE next_items SET ");
        {
            let mut sep = qb.separated(", ");
            if let Some(title) = &dto.title {
                sep.push("title = ");
                sep.push_bind_unseparated(title);
            }
            if let Some(content) = &dto.content {
                sep.push("content = ");
                sep.push_bind_unseparated(content);
            }
            if let Some(color) = &dto.color {
                sep.push("color = ");
                sep.push_bind_unseparated(color);
            }
            if let Some(size) = dto.size {
                sep.push("size = ");
                sep.push_bind_unseparated(size.as_str());
            }
            match &dto.deleted_at {
                Patch::Unset => {}
                Patch::Null => {
                    sep.push("deleted_at = NULL");
                }
                Patch::Value(at) => {
                    sep.push("deleted_at = ");
                    sep.push_bind_unseparated(*at);
                }
            }
            match &dto.started_at {
                Patch::Unset => {}
                Patch::Null => {
                    sep.push("started_at = NULL");
                }
                Patch::Value(at) => {
                    sep.push("started_at = ");
                    sep.push_bind_unseparated(*at);
                }
            }
        }
        qb.push(" WHERE id = ");
        qb.push_bind(id);
        qb.push(format!(" RETURNING {COLUMNS}"));

        qb.build_query_as::<NextItem>().fetch_optional(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<NextItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM next_items WHERE id = $1");
        sqlx::query_as::<_, NextItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
