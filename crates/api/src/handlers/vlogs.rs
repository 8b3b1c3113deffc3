//! Handlers for the `/vlogs` resource.

use std::collections::BTreeMap;

use axum::extract::{Path, State};
use axum::Json;

use dayroom_core::dates;
use dayroom_db::models::vlog::{BatchVlogsRequest, UpsertVlog, Vlog};
use dayroom_db::repositories::VlogRepo;

use crate::error::AppResult;
use crate::handlers::tasks::OkResponse;
use crate::state::AppState;

/// GET /vlogs/{weekStartDate}
///
/// Responds with the vlog or JSON `null`; a week without a vlog is a normal
/// outcome, not a 404.
pub async fn get_by_week(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> AppResult<Json<Option<Vlog>>> {
    let date = dates::parse_date(&date)?;
    let vlog = VlogRepo::find_by_week(&state.pool, date).await?;
    Ok(Json(vlog))
}

/// POST /vlogs
///
/// The stored key is snapped to the Monday of the submitted date's week, so
/// a mid-week date still lands on its week's row.
pub async fn upsert(
    State(state): State<AppState>,
    crate::extract::Json(mut input): crate::extract::Json<UpsertVlog>,
) -> AppResult<Json<OkResponse>> {
    input.week_start_date = dates::week_start(input.week_start_date);
    VlogRepo::upsert(&state.pool, &input).await?;
    Ok(Json(OkResponse { ok: true }))
}

/// POST /vlogs/batch
///
/// Returns a map keyed by week start date; weeks without a vlog are simply
/// absent from the map.
pub async fn batch(
    State(state): State<AppState>,
    crate::extract::Json(input): crate::extract::Json<BatchVlogsRequest>,
) -> AppResult<Json<BTreeMap<String, Vlog>>> {
    let vlogs = VlogRepo::list_by_weeks(&state.pool, &input.week_start_dates).await?;
    let by_week = vlogs
        .into_iter()
        .map(|v| (v.week_start_date.format("%Y-%m-%d").to_string(), v))
        .collect();
    Ok(Json(by_week))
}
