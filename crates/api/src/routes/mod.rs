pub mod diary;
pub mod habits;
pub mod health;
pub mod lists;
pub mod next_items;
pub mod tasks;
pub mod vlogs;

use axum::Router;

use crate::state::AppState;

/// Build the flat route tree.
///
/// Route hierarchy:
///
/// ```text
/// /tasks                        list life tasks grouped by date, create
/// /tasks/work                   work tasks grouped by date
/// /tasks/week                   date-range tasks grouped by date (?start=&end=)
/// /tasks/grouped                grouped by date and state (?category=)
/// /tasks/counts                 per-date state counts (?category=)
/// /tasks/{id}                   update, delete
/// /tasks/batch/punt             move tasks to another date (POST)
/// /tasks/batch/fail             mark tasks failed (POST)
/// /tasks/batch/reorder          apply reorder moves (POST)
///
/// /habits                       list active, create
/// /habits/{id}                  update
/// /entries                      habit entries in range (?start=&end=), upsert
/// /entries/{id}                 delete
///
/// /questions                    list active, create
/// /diary                        all entries grouped by date
/// /diary-entries                upsert (POST)
/// /diary-entries/{id}           update, delete
///
/// /next                         visible items, create
/// /next/{id}                    update
///
/// /lists                        lists with items, create
/// /lists/{id}                   update, delete
///
/// /vlogs                        upsert (POST)
/// /vlogs/batch                  fetch by week starts (POST)
/// /vlogs/{weekStartDate}        vlog or null (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(tasks::router())
        .merge(habits::router())
        .merge(diary::router())
        .merge(next_items::router())
        .merge(lists::router())
        .merge(vlogs::router())
}
