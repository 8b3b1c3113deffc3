//! Handlers for the `/tasks` resource.

use std::collections::BTreeMap;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use dayroom_core::dates::{self, StateBuckets, StateCounts};
use dayroom_core::error::CoreError;
use dayroom_core::ordering;
use dayroom_core::types::Category;
use dayroom_db::models::task::{
    BatchFailRequest, BatchPuntRequest, BatchReorderRequest, CreateTask, Task, UpdateTask,
};
use dayroom_db::repositories::TaskRepo;

use crate::error::{AppError, AppResult};
use crate::query::{CategoryParams, RangeParams};
use crate::state::AppState;

/// `{ok: true}` acknowledgment for batch mutations.
#[derive(Serialize)]
pub struct OkResponse {
    pub ok: bool,
}

/// Response of `POST /tasks/batch/punt`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PuntResponse {
    pub ok: bool,
    pub new_tasks: Vec<Task>,
}

fn date_key(task: &Task) -> String {
    task.date.format("%Y-%m-%d").to_string()
}

/// Sort tasks the way clients display them: order key ascending, keyless
/// rows last, ties broken by id.
fn sort_by_order(tasks: &mut [Task]) {
    tasks.sort_by(|a, b| ordering::cmp_keys(a.order.as_deref(), &a.id, b.order.as_deref(), &b.id));
}

fn group_sorted(mut tasks: Vec<Task>) -> BTreeMap<String, Vec<Task>> {
    sort_by_order(&mut tasks);
    dates::group_by_date(tasks, date_key)
}

/// GET /tasks
pub async fn list_life(
    State(state): State<AppState>,
) -> AppResult<Json<BTreeMap<String, Vec<Task>>>> {
    let tasks = TaskRepo::list(&state.pool, Some(Category::Life.as_str())).await?;
    Ok(Json(group_sorted(tasks)))
}

/// GET /tasks/work
pub async fn list_work(
    State(state): State<AppState>,
) -> AppResult<Json<BTreeMap<String, Vec<Task>>>> {
    let tasks = TaskRepo::list(&state.pool, Some(Category::Work.as_str())).await?;
    Ok(Json(group_sorted(tasks)))
}

/// GET /tasks/week?start=&end=
pub async fn list_week(
    State(state): State<AppState>,
    Query(params): Query<RangeParams>,
) -> AppResult<Json<BTreeMap<String, Vec<Task>>>> {
    let (start, end) = params.resolve()?;
    let tasks = TaskRepo::list_in_range(&state.pool, start, end).await?;
    Ok(Json(group_sorted(tasks)))
}

/// GET /tasks/grouped?category=
pub async fn list_grouped(
    State(state): State<AppState>,
    Query(params): Query<CategoryParams>,
) -> AppResult<Json<BTreeMap<String, StateBuckets<Task>>>> {
    let mut tasks =
        TaskRepo::list(&state.pool, params.category.map(|c| c.as_str())).await?;
    sort_by_order(&mut tasks);
    let grouped = dates::group_by_date_and_state(tasks, date_key, |t| &t.state)?;
    Ok(Json(grouped))
}

/// GET /tasks/counts?category=
pub async fn counts(
    State(state): State<AppState>,
    Query(params): Query<CategoryParams>,
) -> AppResult<Json<BTreeMap<String, StateCounts>>> {
    let tasks = TaskRepo::list(&state.pool, params.category.map(|c| c.as_str())).await?;
    let counts = dates::counts_by_date(&tasks, date_key, |t| &t.state)?;
    Ok(Json(counts))
}

/// POST /tasks
pub async fn create(
    State(state): State<AppState>,
    crate::extract::Json(input): crate::extract::Json<CreateTask>,
) -> AppResult<(StatusCode, Json<Task>)> {
    let (completed, task_state) = input.reconcile_state()?;
    if let Some(order) = &input.order {
        ordering::validate_key(order)?;
    }
    let task = TaskRepo::create(&state.pool, &input, completed, task_state.as_str()).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// PATCH /tasks/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    crate::extract::Json(input): crate::extract::Json<UpdateTask>,
) -> AppResult<Json<Task>> {
    let (completed, task_state) = input.reconcile_state()?;
    if let Some(order) = input.order.as_write() {
        ordering::validate_key(order)?;
    }
    let task = TaskRepo::update(
        &state.pool,
        &id,
        &input,
        completed,
        task_state.map(|s| s.as_str()),
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound { entity: "Task", id }))?;
    Ok(Json(task))
}

/// DELETE /tasks/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<StatusCode> {
    let deleted = TaskRepo::delete(&state.pool, &id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Task", id }))
    }
}

/// POST /tasks/batch/punt
pub async fn batch_punt(
    State(state): State<AppState>,
    crate::extract::Json(input): crate::extract::Json<BatchPuntRequest>,
) -> AppResult<Json<PuntResponse>> {
    let new_tasks = TaskRepo::batch_punt(
        &state.pool,
        &input.task_ids,
        input.source_date,
        input.target_date,
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "Task",
        id: input.task_ids.join(", "),
    }))?;
    Ok(Json(PuntResponse {
        ok: true,
        new_tasks,
    }))
}

/// POST /tasks/batch/fail
pub async fn batch_fail(
    State(state): State<AppState>,
    crate::extract::Json(input): crate::extract::Json<BatchFailRequest>,
) -> AppResult<Json<OkResponse>> {
    let all_found = TaskRepo::batch_fail(&state.pool, &input.task_ids).await?;
    if !all_found {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Task",
            id: input.task_ids.join(", "),
        }));
    }
    Ok(Json(OkResponse { ok: true }))
}

/// POST /tasks/batch/reorder
pub async fn batch_reorder(
    State(state): State<AppState>,
    crate::extract::Json(input): crate::extract::Json<BatchReorderRequest>,
) -> AppResult<Json<OkResponse>> {
    for task_move in &input.moves {
        ordering::validate_key(&task_move.order)?;
    }
    let all_found = TaskRepo::batch_reorder(&state.pool, &input.moves).await?;
    if !all_found {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Task",
            id: input.moves.iter().map(|m| m.id.as_str()).collect::<Vec<_>>().join(", "),
        }));
    }
    Ok(Json(OkResponse { ok: true }))
}
