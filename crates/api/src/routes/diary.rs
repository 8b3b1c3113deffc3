//! Route definitions for diary questions and entries.

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::diary;
use crate::state::AppState;

/// Diary routes.
///
/// ```text
/// GET    /questions           -> list_questions (active, ordered)
/// POST   /questions           -> create_question
/// GET    /diary               -> list_diary (grouped by date)
/// POST   /diary-entries       -> upsert_entry
/// PATCH  /diary-entries/{id}  -> update_entry
/// DELETE /diary-entries/{id}  -> delete_entry
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/questions", get(diary::list_questions).post(diary::create_question))
        .route("/diary", get(diary::list_diary))
        .route("/diary-entries", post(diary::upsert_entry))
        .route(
            "/diary-entries/{id}",
            patch(diary::update_entry).delete(diary::delete_entry),
        )
}
