//! HTTP-level integration tests for the grocery-kit catalogue and checkout.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, patch_json, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

async fn add_item(pool: &PgPool, name: &str, unit_price: f64) -> i64 {
    let item = common::create(
        pool,
        "/api/v1/grocery-items",
        json!({"name": name, "unit": "kg", "unit_price": unit_price}),
    )
    .await;
    item["id"].as_i64().unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn quote_prices_kit_from_catalogue(pool: PgPool) {
    let rice = add_item(&pool, "Rice", 60.0).await;
    let dal = add_item(&pool, "Toor Dal", 140.0).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/grocery-donations/quote",
        json!({"items": [
            {"item_id": rice, "quantity": 5},
            {"item_id": dal, "quantity": 2}
        ]}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let data = body_json(response).await["data"].clone();
    assert_eq!(data["subtotal"], 580.0);
    assert_eq!(data["platform_fee"], 0.0);
    assert_eq!(data["total"], 580.0);
    assert_eq!(data["items"][0]["name"], "Rice");
    assert_eq!(data["items"][0]["line_total"], 300.0);
    assert_eq!(data["items"][1]["line_total"], 280.0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn checkout_ignores_client_prices_and_applies_fee(pool: PgPool) {
    let rice = add_item(&pool, "Rice", 60.0).await;
    let mut config = common::test_config();
    config.grocery_fee_percent = 2.5;

    let app = common::build_test_app_with_config(pool.clone(), config);
    let response = post_json(
        app,
        "/api/v1/grocery-donations",
        json!({
            "donor_name": "Meera",
            "donor_email": "meera@example.org",
            "items": [{"item_id": rice, "quantity": 10, "unit_price": 1.0}],
            "total": 10.0
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let data = body_json(response).await["data"].clone();
    assert_eq!(data["subtotal"], 600.0);
    assert_eq!(data["platform_fee"], 15.0);
    assert_eq!(data["total"], 615.0);
    assert_eq!(data["payment_status"], "pending");
    assert_eq!(data["items"][0]["unit_price"], 60.0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn inactive_or_unknown_items_cannot_be_ordered(pool: PgPool) {
    let oil = add_item(&pool, "Oil", 180.0).await;
    let app = common::build_test_app(pool.clone());
    put_json(
        app,
        &format!("/api/v1/grocery-items/{oil}"),
        json!({"is_active": false}),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/grocery-donations/quote",
        json!({"items": [{"item_id": oil, "quantity": 1}]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/grocery-donations/quote",
        json!({"items": [{"item_id": 424242, "quantity": 1}]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/grocery-items?active_only=true").await).await;
    assert!(json["data"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_or_oversized_selection_is_rejected(pool: PgPool) {
    let rice = add_item(&pool, "Rice", 60.0).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/grocery-donations/quote", json!({"items": []})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/grocery-donations/quote",
        json!({"items": [{"item_id": rice, "quantity": 0}]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_item_name_returns_409(pool: PgPool) {
    add_item(&pool, "Sugar", 45.0).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/grocery-items",
        json!({"name": "Sugar", "unit": "kg", "unit_price": 50.0}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn grocery_donation_status_flow(pool: PgPool) {
    let rice = add_item(&pool, "Rice", 60.0).await;
    let donation = common::create(
        &pool,
        "/api/v1/grocery-donations",
        json!({
            "donor_name": "Meera",
            "donor_email": "meera@example.org",
            "items": [{"item_id": rice, "quantity": 1}]
        }),
    )
    .await;
    let id = donation["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = patch_json(
        app,
        &format!("/api/v1/grocery-donations/{id}/status"),
        json!({"status": "completed", "gateway_payment_id": "pay_1"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["payment_status"], "completed");

    let app = common::build_test_app(pool.clone());
    let response = patch_json(
        app,
        &format!("/api/v1/grocery-donations/{id}/status"),
        json!({"status": "failed"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/grocery-donations?status=completed").await).await;
    assert_eq!(json["total"], 1);

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/grocery-donations/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/grocery-donations/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
