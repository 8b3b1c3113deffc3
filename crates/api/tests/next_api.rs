//! HTTP-level integration tests for the "up next" board.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, patch_json, post_json};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_applies_defaults(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/next",
        serde_json::json!({"id": "n1", "title": "Learn the accordion"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["content"], "");
    assert_eq!(json["color"], "#2D2D2D");
    assert_eq!(json["size"], "medium");
    assert!(json["deletedAt"].is_null());
    assert!(json["startedAt"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_unknown_size_is_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/next",
        serde_json::json!({"id": "n1", "title": "X", "size": "gigantic"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_soft_deleted_and_started_items_leave_the_board(pool: PgPool) {
    for id in ["n1", "n2", "n3"] {
        let app = common::build_test_app(pool.clone());
        post_json(app, "/next", serde_json::json!({"id": id, "title": id})).await;
    }

    let app = common::build_test_app(pool.clone());
    patch_json(
        app,
        "/next/n1",
        serde_json::json!({"deletedAt": "2024-01-05T10:00:00Z"}),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    patch_json(
        app,
        "/next/n2",
        serde_json::json!({"startedAt": "2024-01-05T10:00:00Z"}),
    )
    .await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/next").await).await;
    let ids: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["n3"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_patch_tri_state_gate_field(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(app, "/next", serde_json::json!({"id": "n1", "title": "Card"})).await;

    // Value: trash the card.
    let app = common::build_test_app(pool.clone());
    let json = body_json(
        patch_json(
            app,
            "/next/n1",
            serde_json::json!({"deletedAt": "2024-01-05T10:00:00Z"}),
        )
        .await,
    )
    .await;
    assert!(json["deletedAt"].is_string());

    // Absent: an unrelated patch must not restore it.
    let app = common::build_test_app(pool.clone());
    let json = body_json(
        patch_json(app, "/next/n1", serde_json::json!({"title": "Renamed"})).await,
    )
    .await;
    assert_eq!(json["title"], "Renamed");
    assert!(json["deletedAt"].is_string());

    // Explicit null: restore from the trash.
    let app = common::build_test_app(pool.clone());
    let json = body_json(
        patch_json(app, "/next/n1", serde_json::json!({"deletedAt": null})).await,
    )
    .await;
    assert!(json["deletedAt"].is_null());

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/next").await).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_patch_nonexistent_item_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = patch_json(app, "/next/ghost", serde_json::json!({"title": "X"})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
