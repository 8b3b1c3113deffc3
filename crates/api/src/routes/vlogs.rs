//! Route definitions for weekly vlogs.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::vlogs;
use crate::state::AppState;

/// Vlog routes.
///
/// ```text
/// POST   /vlogs                    -> upsert
/// POST   /vlogs/batch              -> batch (fetch by week starts)
/// GET    /vlogs/{weekStartDate}    -> get_by_week (vlog or null)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/vlogs", post(vlogs::upsert))
        .route("/vlogs/batch", post(vlogs::batch))
        .route("/vlogs/{week_start_date}", get(vlogs::get_by_week))
}
