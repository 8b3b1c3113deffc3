//! Route definitions for lists.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::lists;
use crate::state::AppState;

/// List routes.
///
/// ```text
/// GET    /lists        -> list (with items, fractional order)
/// POST   /lists        -> create
/// PATCH  /lists/{id}   -> update (optional whole-item replacement)
/// DELETE /lists/{id}   -> delete (items cascade)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/lists", get(lists::list).post(lists::create))
        .route("/lists/{id}", patch(lists::update).delete(lists::delete))
}
