//! Route definitions for the "up next" board.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::next_items;
use crate::state::AppState;

/// Next-item routes.
///
/// ```text
/// GET    /next        -> list (visible cards)
/// POST   /next        -> create
/// PATCH  /next/{id}   -> update (gate fields restore / soft-delete / start)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/next", get(next_items::list).post(next_items::create))
        .route("/next/{id}", patch(next_items::update))
}
