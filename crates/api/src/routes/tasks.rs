//! Route definitions for tasks.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::tasks;
use crate::state::AppState;

/// Task routes.
///
/// ```text
/// GET    /tasks                 -> list_life (grouped by date)
/// POST   /tasks                 -> create
/// GET    /tasks/work            -> list_work
/// GET    /tasks/week            -> list_week (?start=&end=)
/// GET    /tasks/grouped         -> list_grouped (?category=)
/// GET    /tasks/counts          -> counts (?category=)
/// PATCH  /tasks/{id}            -> update
/// DELETE /tasks/{id}            -> delete
/// POST   /tasks/batch/punt      -> batch_punt
/// POST   /tasks/batch/fail      -> batch_fail
/// POST   /tasks/batch/reorder   -> batch_reorder
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tasks", get(tasks::list_life).post(tasks::create))
        .route("/tasks/work", get(tasks::list_work))
        .route("/tasks/week", get(tasks::list_week))
        .route("/tasks/grouped", get(tasks::list_grouped))
        .route("/tasks/counts", get(tasks::counts))
        .route("/tasks/{id}", axum::routing::patch(tasks::update).delete(tasks::delete))
        .route("/tasks/batch/punt", post(tasks::batch_punt))
        .route("/tasks/batch/fail", post(tasks::batch_fail))
        .route("/tasks/batch/reorder", post(tasks::batch_reorder))
}
