//! HTTP-level integration tests for the `/duties` endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_bytes, body_json, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

const REQUIRED_MESSAGE: &str = "Name is required and must be a non-empty string";
const TOO_LONG_MESSAGE: &str = "Name must be 255 characters or less";

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn create_duty(pool: &PgPool, name: &str) -> i64 {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/duties", json!({ "name": name })).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

async fn list_duties(pool: &PgPool) -> Vec<serde_json::Value> {
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/duties").await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await.as_array().unwrap().clone()
}

async fn row_count(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM duties")
        .fetch_one(pool)
        .await
        .unwrap()
}

// ---------------------------------------------------------------------------
// GET /duties
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_on_empty_table_returns_empty_array(pool: PgPool) {
    let duties = list_duties(&pool).await;
    assert!(duties.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_returns_only_id_and_name(pool: PgPool) {
    create_duty(&pool, "Water plants").await;

    let duties = list_duties(&pool).await;
    let object = duties[0].as_object().unwrap();
    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["id", "name"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_twice_returns_identical_results(pool: PgPool) {
    for name in ["One", "Two", "Three"] {
        create_duty(&pool, name).await;
    }

    assert_eq!(list_duties(&pool).await, list_duties(&pool).await);
}

// ---------------------------------------------------------------------------
// POST /duties
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_returns_201_and_appears_first_in_list(pool: PgPool) {
    create_duty(&pool, "Older duty").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/duties", json!({"name": "Wash dishes"})).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = body_json(response).await;
    assert!(created["id"].is_number());
    assert_eq!(created["name"], "Wash dishes");

    let duties = list_duties(&pool).await;
    assert_eq!(duties.len(), 2);
    assert_eq!(duties[0], created);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_trims_name(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/duties", json!({"name": "  Buy milk  "})).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["name"], "Buy milk");

    let stored: String = sqlx::query_scalar("SELECT name FROM duties")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(stored, "Buy milk");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_with_blank_name_returns_400_and_creates_nothing(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/duties", json!({"name": "   "})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, json!({"error": REQUIRED_MESSAGE}));
    assert_eq!(row_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_with_missing_or_non_string_name_returns_400(pool: PgPool) {
    for body in [json!({}), json!({"name": null}), json!({"name": 12})] {
        let app = common::build_test_app(pool.clone());
        let response = post_json(app, "/duties", body.clone()).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body {body}");
        assert_eq!(body_json(response).await["error"], REQUIRED_MESSAGE);
    }
    assert_eq!(row_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_with_256_char_name_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/duties", json!({"name": "a".repeat(256)})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, json!({"error": TOO_LONG_MESSAGE}));
    assert_eq!(row_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_with_255_multibyte_chars_is_accepted(pool: PgPool) {
    let name = "ü".repeat(255);
    let app = common::build_test_app(pool);
    let response = post_json(app, "/duties", json!({ "name": name })).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["name"], name);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_with_malformed_json_returns_400_json_error(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let request = Request::builder()
        .method(Method::POST)
        .uri("/duties")
        .header("content-type", "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();
    let response = common::send(app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, json!({"error": "Invalid JSON body"}));
    assert_eq!(row_count(&pool).await, 0);
}

async fn post_raw(
    pool: &PgPool,
    content_type: Option<&str>,
    body: &'static str,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(Method::POST).uri("/duties");
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }
    let request = builder.body(Body::from(body)).unwrap();

    let response = common::send(common::build_test_app(pool.clone()), request).await;
    let status = response.status();
    (status, body_json(response).await)
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_with_empty_or_blank_body_asks_for_name(pool: PgPool) {
    for body in ["", "  \n"] {
        let (status, json) = post_raw(&pool, Some("application/json"), body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "body {body:?}");
        assert_eq!(json, json!({"error": REQUIRED_MESSAGE}));
    }
    assert_eq!(row_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_without_json_content_type_asks_for_name(pool: PgPool) {
    let (status, json) = post_raw(&pool, None, "{\"name\": \"Ignored\"}").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, json!({"error": REQUIRED_MESSAGE}));

    let (status, json) = post_raw(&pool, Some("text/plain"), "Buy milk").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, json!({"error": REQUIRED_MESSAGE}));

    assert_eq!(row_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_accepts_json_content_type_with_charset(pool: PgPool) {
    let (status, json) = post_raw(
        &pool,
        Some("application/json; charset=utf-8"),
        "{\"name\": \"Mop floor\"}",
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["name"], "Mop floor");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_with_empty_body_returns_400_required(pool: PgPool) {
    let id = create_duty(&pool, "Keep").await;

    let request = Request::builder()
        .method(Method::PUT)
        .uri(format!("/duties/{id}"))
        .header("content-type", "application/json")
        .body(Body::empty())
        .unwrap();
    let response = common::send(common::build_test_app(pool.clone()), request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, json!({"error": REQUIRED_MESSAGE}));
    assert_eq!(list_duties(&pool).await[0]["name"], "Keep");
}

// ---------------------------------------------------------------------------
// PUT /duties/{id}
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_renames_and_trims(pool: PgPool) {
    let id = create_duty(&pool, "Original").await;

    let app = common::build_test_app(pool.clone());
    let response = put_json(app, &format!("/duties/{id}"), json!({"name": " Updated "})).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"id": id, "name": "Updated"}));

    let duties = list_duties(&pool).await;
    assert_eq!(duties[0]["name"], "Updated");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_nonexistent_returns_404(pool: PgPool) {
    let id = create_duty(&pool, "Untouched").await;
    let before = list_duties(&pool).await;

    let app = common::build_test_app(pool.clone());
    let response = put_json(app, "/duties/9999", json!({"name": "Valid name"})).await;
    assert_ne!(id, 9999);

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await, json!({"error": "Duty not found"}));
    assert_eq!(list_duties(&pool).await, before);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_with_invalid_name_returns_400_and_keeps_old_name(pool: PgPool) {
    let id = create_duty(&pool, "Keep").await;

    let app = common::build_test_app(pool.clone());
    let response = put_json(app, &format!("/duties/{id}"), json!({"name": "\t\n"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], REQUIRED_MESSAGE);

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/duties/{id}"),
        json!({"name": "b".repeat(300)}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], TOO_LONG_MESSAGE);

    assert_eq!(list_duties(&pool).await[0]["name"], "Keep");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_with_non_numeric_id_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json(app, "/duties/abc", json!({"name": "Valid"})).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await, json!({"error": "Duty not found"}));
}

// ---------------------------------------------------------------------------
// DELETE /duties/{id}
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_returns_204_and_removes_from_list(pool: PgPool) {
    let keep = create_duty(&pool, "Keep").await;
    let gone = create_duty(&pool, "Remove").await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/duties/{gone}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(response).await.is_empty());

    let ids: Vec<i64> = list_duties(&pool)
        .await
        .iter()
        .map(|d| d["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![keep]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_nonexistent_returns_404_and_changes_nothing(pool: PgPool) {
    create_duty(&pool, "Survivor").await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, "/duties/424242").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await, json!({"error": "Duty not found"}));
    assert_eq!(row_count(&pool).await, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_twice_returns_404_second_time(pool: PgPool) {
    let id = create_duty(&pool, "Once").await;

    let app = common::build_test_app(pool.clone());
    assert_eq!(
        delete(app, &format!("/duties/{id}")).await.status(),
        StatusCode::NO_CONTENT
    );

    let app = common::build_test_app(pool);
    assert_eq!(
        delete(app, &format!("/duties/{id}")).await.status(),
        StatusCode::NOT_FOUND
    );
}

// ---------------------------------------------------------------------------
// Storage failures
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn storage_failure_returns_sanitized_500(pool: PgPool) {
    sqlx::query("DROP TABLE duties")
        .execute(&pool)
        .await
        .unwrap();

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/duties").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await,
        json!({"error": "Internal server error"})
    );

    let app = common::build_test_app(pool);
    let response = post_json(app, "/duties", json!({"name": "Anything"})).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await.to_string();
    assert!(!body.contains("duties"), "SQL details leaked: {body}");
}
