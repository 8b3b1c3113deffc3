//! HTTP-level integration tests for lists and list items.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, patch_json, post_json};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_list_starts_empty(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/lists",
        serde_json::json!({"id": "l1", "title": "Groceries"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["title"], "Groceries");
    assert_eq!(json["color"], "#2D2D2D");
    assert_eq!(json["items"].as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_lists_sort_by_fractional_order(pool: PgPool) {
    for (id, order) in [("l1", Some("V")), ("l2", Some("G")), ("l3", None)] {
        let app = common::build_test_app(pool.clone());
        post_json(
            app,
            "/lists",
            serde_json::json!({"id": id, "title": id, "order": order}),
        )
        .await;
    }

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/lists").await).await;
    let ids: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["l2", "l1", "l3"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_item_replacement_assigns_dense_positions(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(app, "/lists", serde_json::json!({"id": "l1", "title": "Todo"})).await;

    let app = common::build_test_app(pool.clone());
    let response = patch_json(
        app,
        "/lists/l1",
        serde_json::json!({"items": [
            {"id": "i1", "text": "milk"},
            {"id": "i2", "text": "eggs", "completed": true}
        ]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let items = json["items"].as_array().unwrap();
    assert_eq!(items[0]["text"], "milk");
    assert_eq!(items[0]["position"], 0);
    assert_eq!(items[1]["position"], 1);
    assert_eq!(items[1]["completed"], true);

    // A second replacement drops rows that are no longer submitted.
    let app = common::build_test_app(pool);
    let json = body_json(
        patch_json(
            app,
            "/lists/l1",
            serde_json::json!({"items": [{"id": "i2", "text": "eggs"}]}),
        )
        .await,
    )
    .await;
    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], "i2");
    assert_eq!(items[0]["position"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_patch_title_leaves_items_alone(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(app, "/lists", serde_json::json!({"id": "l1", "title": "Todo"})).await;

    let app = common::build_test_app(pool.clone());
    patch_json(
        app,
        "/lists/l1",
        serde_json::json!({"items": [{"id": "i1", "text": "milk"}]}),
    )
    .await;

    let app = common::build_test_app(pool);
    let json = body_json(
        patch_json(app, "/lists/l1", serde_json::json!({"title": "Errands"})).await,
    )
    .await;
    assert_eq!(json["title"], "Errands");
    assert_eq!(json["items"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_cascades_items(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(app, "/lists", serde_json::json!({"id": "l1", "title": "Todo"})).await;

    let app = common::build_test_app(pool.clone());
    patch_json(
        app,
        "/lists/l1",
        serde_json::json!({"items": [{"id": "i1", "text": "milk"}]}),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, "/lists/l1").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/lists").await).await;
    assert_eq!(json.as_array().unwrap().len(), 0);

    // Items went with the list.
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM list_items")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}
