//! Handlers for the `/questions`, `/diary`, and `/diary-entries` resources.

use std::collections::BTreeMap;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use dayroom_core::dates;
use dayroom_core::error::CoreError;
use dayroom_db::models::diary::{DiaryEntry, UpdateDiaryEntry, UpsertDiaryEntry};
use dayroom_db::models::question::{CreateQuestion, Question};
use dayroom_db::repositories::{DiaryRepo, QuestionRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /questions
pub async fn list_questions(State(state): State<AppState>) -> AppResult<Json<Vec<Question>>> {
    let questions = QuestionRepo::list_active(&state.pool).await?;
    Ok(Json(questions))
}

/// POST /questions
pub async fn create_question(
    State(state): State<AppState>,
    crate::extract::Json(input): crate::extract::Json<CreateQuestion>,
) -> AppResult<(StatusCode, Json<Question>)> {
    let question = QuestionRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(question)))
}

/// GET /diary
pub async fn list_diary(
    State(state): State<AppState>,
) -> AppResult<Json<BTreeMap<String, Vec<DiaryEntry>>>> {
    let entries = DiaryRepo::list_all(&state.pool).await?;
    let grouped = dates::group_by_date(entries, |e| e.date.format("%Y-%m-%d").to_string());
    Ok(Json(grouped))
}

/// POST /diary-entries
pub async fn upsert_entry(
    State(state): State<AppState>,
    crate::extract::Json(input): crate::extract::Json<UpsertDiaryEntry>,
) -> AppResult<Json<DiaryEntry>> {
    let entry = DiaryRepo::upsert(&state.pool, &input).await?;
    Ok(Json(entry))
}

/// PATCH /diary-entries/{id}
pub async fn update_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
    crate::extract::Json(input): crate::extract::Json<UpdateDiaryEntry>,
) -> AppResult<Json<DiaryEntry>> {
    let entry = DiaryRepo::update(&state.pool, &id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "DiaryEntry",
            id,
        }))?;
    Ok(Json(entry))
}

/// DELETE /diary-entries/{id}
pub async fn delete_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let deleted = DiaryRepo::delete(&state.pool, &id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "DiaryEntry",
            id,
        }))
    }
}
