//! Handlers for the `/lists` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use dayroom_core::error::CoreError;
use dayroom_core::ordering;
use dayroom_db::models::list::{CreateList, ListWithItems, UpdateList};
use dayroom_db::repositories::ListRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /lists
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ListWithItems>>> {
    let mut lists = ListRepo::list_with_items(&state.pool).await?;
    lists.sort_by(|a, b| {
        ordering::cmp_keys(
            a.list.order.as_deref(),
            &a.list.id,
            b.list.order.as_deref(),
            &b.list.id,
        )
    });
    Ok(Json(lists))
}

/// POST /lists
pub async fn create(
    State(state): State<AppState>,
    crate::extract::Json(input): crate::extract::Json<CreateList>,
) -> AppResult<(StatusCode, Json<ListWithItems>)> {
    if let Some(order) = &input.order {
        ordering::validate_key(order)?;
    }
    let list = ListRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(list)))
}

/// PATCH /lists/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    crate::extract::Json(input): crate::extract::Json<UpdateList>,
) -> AppResult<Json<ListWithItems>> {
    if let Some(order) = input.order.as_write() {
        ordering::validate_key(order)?;
    }
    let list = ListRepo::update(&state.pool, &id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "List", id }))?;
    Ok(Json(list))
}

/// DELETE /lists/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<StatusCode> {
    let deleted = ListRepo::delete(&state.pool, &id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "List", id }))
    }
}
