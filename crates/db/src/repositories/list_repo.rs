//! Repository for the `lists` and `list_items` tables.
//!
//! Items are maintained by whole-list replacement: an update that carries
//! `items` deletes the old rows and reinserts the submitted sequence with
//! dense positions, all inside one transaction.

use std::collections::HashMap;

use sqlx::{PgPool, Postgres, QueryBuilder, Transaction};

use dayroom_core::patch::Patch;

use crate::models::list::{CreateList, ListItem, ListRow, ListWithItems, ReplaceListItem, UpdateList};

/// Column list for `lists` queries.
const LIST_COLUMNS: &str = "id, title, color, created_at, \"order\"";

/// Column list for `list_items` queries.
const ITEM_COLUMNS: &str = "id, list_id, text, completed, created_at, position";

/// Provides data access for lists and their items.
pub struct ListRepo;

impl ListRepo {
    /// All lists with their items. Intra-collection ordering of the lists
    /// themselves is left to the caller (fractional keys compare in
    /// application code); items come back in position order.
    pub async fn list_with_items(pool: &PgPool) -> Result<Vec<ListWithItems>, sqlx::Error> {
        let lists_query = format!("SELECT {LIST_COLUMNS} FROM lists ORDER BY created_at ASC");
        let lists = sqlx::query_as::<_, ListRow>(&lists_query)
            .fetch_all(pool)
            .await?;

        let items_query = format!(
            "SELECT {ITEM_COLUMNS} FROM list_items ORDER BY list_id ASC, position ASC, created_at ASC"
        );
        let items = sqlx::query_as::<_, ListItem>(&items_query)
            .fetch_all(pool)
            .await?;

        let mut by_list: HashMap<String, Vec<ListItem>> = HashMap::new();
        for item in items {
            by_list.entry(item.list_id.clone()).or_default().push(item);
        }

        Ok(lists
            .into_iter()
            .map(|list| {
                let items = by_list.remove(&list.id).unwrap_or_default();
                ListWithItems { list, items }
            })
            .collect())
    }

    pub async fn create(pool: &PgPool, dto: &CreateList) -> Result<ListWithItems, sqlx::Error> {
        let query = format!(
            "INSERT INTO lists (id, title, color, \"order\") \
             VALUES ($1, $2, COALESCE($3, '#2D2D2D'), $4) \
             RETURNING {LIST_COLUMNS}"
        );
        let list = sqlx::query_as::<_, ListRow>(&query)
            .bind(&dto.id)
            .bind(&dto.title)
            .bind(&dto.color)
            .bind(&dto.order)
            .fetch_one(pool)
            .await?;
        Ok(ListWithItems {
            list,
            items: Vec::new(),
        })
    }

    /// Apply a partial update; returns `None` when the id does not exist.
    ///
    /// When `items` is present the existing rows are replaced wholesale with
    /// the submitted sequence. Everything runs in one transaction so a failed
    /// reinsert cannot leave the list half-emptied.
    pub async fn update(
        pool: &PgPool,
        id: &str,
        dto: &UpdateList,
    ) -> Result<Option<ListWithItems>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let list = if dto.title.is_none() && dto.color.is_none() && dto.order.is_unset() {
            let query = format!("SELECT {LIST_COLUMNS} FROM lists WHERE id = $1");
            sqlx::query_as::<_, ListRow>(&query)
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?
        } else {
            let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE lists SET ");
            {
                let mut sep = qb.separated(", ");
                if let Some(title) = &dto.title {
                    sep.push("title = ");
                    sep.push_bind_unseparated(title);
                }
                if let Some(color) = &dto.color {
                    sep.push("color = ");
                    sep.push_bind_unseparated(color);
                }
                match &dto.order {
                    Patch::Unset => {}
                    Patch::Null => {
                        sep.push("\"order\" = NULL");
                    }
                    Patch::Value(order) => {
                        sep.push("\"order\" = ");
                        sep.push_bind_unseparated(order);
                    }
                }
            }
            qb.push(" WHERE id = ");
            qb.push_bind(id);
            qb.push(format!(" RETURNING {LIST_COLUMNS}"));
            qb.build_query_as::<ListRow>().fetch_optional(&mut *tx).await?
        };
        let Some(list) = list else {
            return Ok(None);
        };

        let items = match &dto.items {
            Some(replacement) => Self::replace_items(&mut tx, id, replacement).await?,
            None => {
                let query = format!(
                    "SELECT {ITEM_COLUMNS} FROM list_items WHERE list_id = $1 \
                     ORDER BY position ASC, created_at ASC"
                );
                sqlx::query_as::<_, ListItem>(&query)
                    .bind(id)
                    .fetch_all(&mut *tx)
                    .await?
            }
        };

        tx.commit().await?;
        Ok(Some(ListWithItems { list, items }))
    }

    /// Hard delete; items go with the list via ON DELETE CASCADE.
    /// Returns `false` when the id does not exist.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM lists WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn replace_items(
        tx: &mut Transaction<'_, Postgres>,
        list_id: &str,
        replacement: &[ReplaceListItem],
    ) -> Result<Vec<ListItem>, sqlx::Error> {
        sqlx::query("DELETE FROM list_items WHERE list_id = $1")
            .bind(list_id)
            .execute(&mut **tx)
            .await?;

        let insert = format!(
            "INSERT INTO list_items (id, list_id, text, completed, position) \
             VALUES ($1, $2, $3, COALESCE($4, false), $5) \
             RETURNING {ITEM_COLUMNS}"
        );
        let mut items = Vec::with_capacity(replacement.len());
        for (position, item) in replacement.iter().enumerate() {
            let row = sqlx::query_as::<_, ListItem>(&insert)
                .bind(&item.id)
                .bind(list_id)
                .bind(&item.text)
                .bind(item.completed)
                .bind(position as i32)
                .fetch_one(&mut **tx)
                .await?;
            items.push(row);
        }
        Ok(items)
    }
}
