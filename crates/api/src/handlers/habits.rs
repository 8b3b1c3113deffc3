//! Handlers for the `/habits` and `/entries` resources.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use dayroom_core::error::CoreError;
use dayroom_db::models::habit::{CreateHabit, Habit, HabitEntry, UpdateHabit, UpsertHabitEntry};
use dayroom_db::repositories::{HabitEntryRepo, HabitRepo};

use crate::error::{AppError, AppResult};
use crate::query::RangeParams;
use crate::state::AppState;

/// GET /habits
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Habit>>> {
    let habits = HabitRepo::list_active(&state.pool).await?;
    Ok(Json(habits))
}

/// POST /habits
pub async fn create(
    State(state): State<AppState>,
    crate::extract::Json(input): crate::extract::Json<CreateHabit>,
) -> AppResult<(StatusCode, Json<Habit>)> {
    let habit = HabitRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(habit)))
}

/// PATCH /habits/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    crate::extract::Json(input): crate::extract::Json<UpdateHabit>,
) -> AppResult<Json<Habit>> {
    let habit = HabitRepo::update(&state.pool, &id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Habit",
            id,
        }))?;
    Ok(Json(habit))
}

/// GET /entries?start=&end=
pub async fn list_entries(
    State(state): State<AppState>,
    Query(params): Query<RangeParams>,
) -> AppResult<Json<Vec<HabitEntry>>> {
    let (start, end) = params.resolve()?;
    let entries = HabitEntryRepo::list_in_range(&state.pool, start, end).await?;
    Ok(Json(entries))
}

/// POST /entries
pub async fn upsert_entry(
    State(state): State<AppState>,
    crate::extract::Json(input): crate::extract::Json<UpsertHabitEntry>,
) -> AppResult<Json<HabitEntry>> {
    let entry = HabitEntryRepo::upsert(&state.pool, &input).await?;
    Ok(Json(entry))
}

/// DELETE /entries/{id}
pub async fn delete_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let deleted = HabitEntryRepo::delete(&state.pool, &id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "HabitEntry",
            id,
        }))
    }
}
