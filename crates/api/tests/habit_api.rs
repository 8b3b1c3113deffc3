//! HTTP-level integration tests for habits and habit entries.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, patch_json, post_json};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_and_list_habits_in_rank_order(pool: PgPool) {
    for (id, name, order) in [
        ("h1", "Stretch", Some(2)),
        ("h2", "Read", Some(1)),
        ("h3", "Unranked", None),
    ] {
        let app = common::build_test_app(pool.clone());
        let response = post_json(
            app,
            "/habits",
            serde_json::json!({"id": id, "name": name, "order": order}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/habits").await).await;
    let ids: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|h| h["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["h2", "h1", "h3"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_deactivated_habit_leaves_the_list(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(app, "/habits", serde_json::json!({"id": "h1", "name": "Floss"})).await;

    let app = common::build_test_app(pool.clone());
    let response = patch_json(app, "/habits/h1", serde_json::json!({"active": false})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/habits").await).await;
    assert_eq!(json.as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_patch_null_clears_comment_but_absent_keeps_it(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/habits",
        serde_json::json!({"id": "h1", "name": "Journal", "comment": "evenings only"}),
    )
    .await;

    // Renaming alone leaves the comment in place.
    let app = common::build_test_app(pool.clone());
    let json = body_json(
        patch_json(app, "/habits/h1", serde_json::json!({"name": "Diary"})).await,
    )
    .await;
    assert_eq!(json["comment"], "evenings only");

    // Explicit null clears it.
    let app = common::build_test_app(pool);
    let json = body_json(
        patch_json(app, "/habits/h1", serde_json::json!({"comment": null})).await,
    )
    .await;
    assert!(json["comment"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_unknown_default_time_is_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/habits",
        serde_json::json!({"id": "h1", "name": "Nap", "defaultTime": "midnight"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Entries
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_entry_upsert_replaces_by_entry_id(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(app, "/habits", serde_json::json!({"id": "h1", "name": "Run"})).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/entries",
        serde_json::json!({"entryId": "h1:2024-01-05", "date": "2024-01-05", "habitId": "h1", "state": 1}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // Same entry id, new state: overwrites rather than duplicating.
    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/entries",
        serde_json::json!({"entryId": "h1:2024-01-05", "date": "2024-01-05", "habitId": "h1", "state": 2}),
    )
    .await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/entries?start=2024-01-01&end=2024-01-07").await).await;
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["state"], 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_entry_for_missing_habit_is_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/entries",
        serde_json::json!({"entryId": "e1", "date": "2024-01-05", "habitId": "ghost"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_entry_range_filter_and_delete(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(app, "/habits", serde_json::json!({"id": "h1", "name": "Run"})).await;

    for (entry_id, date) in [("e1", "2024-01-05"), ("e2", "2024-02-05")] {
        let app = common::build_test_app(pool.clone());
        post_json(
            app,
            "/entries",
            serde_json::json!({"entryId": entry_id, "date": date, "habitId": "h1"}),
        )
        .await;
    }

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/entries?start=2024-01-01&end=2024-01-31").await).await;
    assert_eq!(json.as_array().unwrap().len(), 1);

    let app = common::build_test_app(pool.clone());
    let response = delete(app, "/entries/e1").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/entries?start=2024-01-01&end=2024-01-31").await).await;
    assert_eq!(json.as_array().unwrap().len(), 0);
}
