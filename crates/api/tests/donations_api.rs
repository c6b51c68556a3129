//! HTTP-level integration tests for `/api/v1/donations`, including the
//! payment status flow, campaign crediting, and receipts.

mod common;

use axum::http::StatusCode;
use common::{body_json, body_text, delete, get, patch_json, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

async fn create_campaign(pool: &PgPool) -> i64 {
    let campaign = common::create(
        pool,
        "/api/v1/campaigns",
        json!({"title": "Annadaan", "goal_amount": 10000.0}),
    )
    .await;
    campaign["id"].as_i64().unwrap()
}

fn donation_body(campaign_id: Option<i64>, amount: f64) -> serde_json::Value {
    json!({
        "campaign_id": campaign_id,
        "donor_name": "Govind Rao",
        "donor_email": "govind@example.org",
        "pan_number": " abcde1234f ",
        "seva_type": "Annadaan Seva",
        "amount": amount,
        "gateway_order_id": "order_123"
    })
}

async fn set_status(pool: &PgPool, id: i64, status: &str) -> axum::http::Response<axum::body::Body> {
    let app = common::build_test_app(pool.clone());
    patch_json(
        app,
        &format!("/api/v1/donations/{id}/status"),
        json!({"status": status, "gateway_payment_id": "pay_789"}),
    )
    .await
}

async fn campaign_totals(pool: &PgPool, id: i64) -> (f64, i64) {
    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/api/v1/campaigns/{id}")).await).await;
    (
        json["data"]["raised_amount"].as_f64().unwrap(),
        json["data"]["donor_count"].as_i64().unwrap(),
    )
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_donation_starts_pending_with_normalized_pan(pool: PgPool) {
    let campaign_id = create_campaign(&pool).await;
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/donations", donation_body(Some(campaign_id), 1500.0)).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let data = body_json(response).await["data"].clone();
    assert_eq!(data["payment_status"], "pending");
    assert_eq!(data["pan_number"], "ABCDE1234F");
    assert_eq!(data["currency"], "INR");
    assert!(data["receipt_number"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_donation_validates_input(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let mut body = donation_body(None, 100.0);
    body["donor_email"] = json!("nope");
    body["amount"] = json!(-5.0);
    let response = post_json(app, "/api/v1/donations", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["fields"]["donor_email"].is_string());
    assert!(json["fields"]["amount"].is_string());

    let app = common::build_test_app(pool);
    let mut body = donation_body(None, 100.0);
    body["pan_number"] = json!("1234");
    let response = post_json(app, "/api/v1/donations", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn donation_to_unknown_or_inactive_campaign_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/donations", donation_body(Some(999_999), 100.0)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let campaign_id = create_campaign(&pool).await;
    let app = common::build_test_app(pool.clone());
    common::patch_empty(app, &format!("/api/v1/campaigns/{campaign_id}/toggle-active")).await;

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/donations", donation_body(Some(campaign_id), 100.0)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Campaign 'Annadaan' is not accepting donations");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn completing_a_donation_credits_the_campaign_once(pool: PgPool) {
    let campaign_id = create_campaign(&pool).await;
    let donation =
        common::create(&pool, "/api/v1/donations", donation_body(Some(campaign_id), 2500.0)).await;
    let id = donation["id"].as_i64().unwrap();

    let response = set_status(&pool, id, "completed").await;
    assert_eq!(response.status(), StatusCode::OK);
    let data = body_json(response).await["data"].clone();
    assert_eq!(data["payment_status"], "completed");
    assert_eq!(data["gateway_payment_id"], "pay_789");
    assert!(data["completed_at"].is_string());
    assert!(data["receipt_number"]
        .as_str()
        .unwrap()
        .ends_with(&format!("-{id:06}")));

    // A retried gateway callback must not credit twice.
    let response = set_status(&pool, id, "completed").await;
    assert_eq!(response.status(), StatusCode::OK);

    assert_eq!(campaign_totals(&pool, campaign_id).await, (2500.0, 1));

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/api/v1/campaigns/{campaign_id}")).await).await;
    assert_eq!(json["data"]["progress_percent"], 25.0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn refund_debits_the_campaign(pool: PgPool) {
    let campaign_id = create_campaign(&pool).await;
    let donation =
        common::create(&pool, "/api/v1/donations", donation_body(Some(campaign_id), 1000.0)).await;
    let id = donation["id"].as_i64().unwrap();

    set_status(&pool, id, "completed").await;
    let response = set_status(&pool, id, "refunded").await;
    assert_eq!(response.status(), StatusCode::OK);

    assert_eq!(campaign_totals(&pool, campaign_id).await, (0.0, 0));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn invalid_transitions_return_409(pool: PgPool) {
    let donation = common::create(&pool, "/api/v1/donations", donation_body(None, 500.0)).await;
    let id = donation["id"].as_i64().unwrap();

    let response = set_status(&pool, id, "refunded").await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = set_status(&pool, id, "unknown").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    set_status(&pool, id, "failed").await;
    let response = set_status(&pool, id, "pending").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn receipt_requires_completed_donation(pool: PgPool) {
    let campaign_id = create_campaign(&pool).await;
    let donation =
        common::create(&pool, "/api/v1/donations", donation_body(Some(campaign_id), 1500.0)).await;
    let id = donation["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/donations/{id}/receipt")).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    set_status(&pool, id, "completed").await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/donations/{id}/receipt")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));

    let html = body_text(response).await;
    assert!(html.contains("Hare Krishna Vidya"));
    assert!(html.contains("Govind Rao"));
    assert!(html.contains("ABCDE1234F"));
    assert!(html.contains("Annadaan"));
    assert!(html.contains("pay_789"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn stats_and_filters(pool: PgPool) {
    let first = common::create(&pool, "/api/v1/donations", donation_body(None, 1000.0)).await;
    common::create(&pool, "/api/v1/donations", donation_body(None, 300.0)).await;
    set_status(&pool, first["id"].as_i64().unwrap(), "completed").await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/donations/stats").await).await;
    assert_eq!(json["data"]["total_count"], 2);
    assert_eq!(json["data"]["completed_count"], 1);
    assert_eq!(json["data"]["pending_count"], 1);
    assert_eq!(json["data"]["total_amount"], 1000.0);

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/donations?status=pending").await).await;
    assert_eq!(json["total"], 1);
    assert_eq!(json["data"][0]["amount"], 300.0);

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/donations?status=lost").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_and_delete_donation(pool: PgPool) {
    let donation = common::create(&pool, "/api/v1/donations", donation_body(None, 750.0)).await;
    let id = donation["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/donations/{id}"),
        json!({"message": "In memory of my grandmother", "amount": 1.0}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let data = body_json(response).await["data"].clone();
    assert_eq!(data["message"], "In memory of my grandmother");
    assert_eq!(data["amount"], 750.0);

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/donations/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/donations/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
