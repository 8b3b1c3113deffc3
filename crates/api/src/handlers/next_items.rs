//! Handlers for the `/next` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use dayroom_core::error::CoreError;
use dayroom_db::models::next_item::{CreateNextItem, NextItem, UpdateNextItem};
use dayroom_db::repositories::NextItemRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /next
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<NextItem>>> {
    let items = NextItemRepo::list_visible(&state.pool).await?;
    Ok(Json(items))
}

/// POST /next
pub async fn create(
    State(state): State<AppState>,
    crate::extract::Json(input): crate::extract::Json<CreateNextItem>,
) -> AppResult<(StatusCode, Json<NextItem>)> {
    let item = NextItemRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// PATCH /next/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    crate::extract::Json(input): crate::extract::Json<UpdateNextItem>,
) -> AppResult<Json<NextItem>> {
    let item = NextItemRepo::update(&state.pool, &id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "NextItem",
            id,
        }))?;
    Ok(Json(item))
}
