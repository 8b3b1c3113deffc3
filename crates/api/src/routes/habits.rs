//! Route definitions for habits and habit entries.

use axum::routing::{delete, get, patch};
use axum::Router;

use crate::handlers::habits;
use crate::state::AppState;

/// Habit and habit-entry routes.
///
/// ```text
/// GET    /habits          -> list (active, ordered)
/// POST   /habits          -> create
/// PATCH  /habits/{id}     -> update
/// GET    /entries         -> list_entries (?start=&end=)
/// POST   /entries         -> upsert_entry
/// DELETE /entries/{id}    -> delete_entry
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/habits", get(habits::list).post(habits::create))
        .route("/habits/{id}", patch(habits::update))
        .route("/entries", get(habits::list_entries).post(habits::upsert_entry))
        .route("/entries/{id}", delete(habits::delete_entry))
}
