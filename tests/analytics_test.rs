use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use remit_core::config::Config;
use remit_core::rates::RateTable;
use remit_core::store::memory::InMemoryStore;
use remit_core::{create_app, AppState};

const ADMIN_KEY: &str = "test-admin-key";

fn test_app() -> Router {
    let state = AppState {
        store: Arc::new(InMemoryStore::new()),
        rates: RateTable::builtin(),
        config: Config {
            server_port: 3001,
            admin_api_key: ADMIN_KEY.to_string(),
            cors_allowed_origins: None,
        },
    };

    create_app(state)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn create_transaction(app: &Router, country: &str, amount: f64) -> String {
    let res = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/transactions")
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({
                        "country": country,
                        "amountInGbp": amount,
                        "receiverName": "Abdi Ali",
                        "receiverPhone": "+252612345678"
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::CREATED);
    body_json(res).await["id"].as_str().unwrap().to_string()
}

async fn admin_patch(app: &Router, uri: &str) {
    let res = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PATCH")
                .uri(uri)
                .header("Authorization", format!("Bearer {}", ADMIN_KEY))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
}

async fn complete_transaction(app: &Router, id: &str) {
    let res = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PATCH")
                .uri(format!("/transactions/{}/proof", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    admin_patch(app, &format!("/admin/transactions/{}/confirm-funds", id)).await;
    admin_patch(app, &format!("/admin/transactions/{}/complete", id)).await;
}

async fn fetch_analytics(app: &Router) -> Value {
    let res = app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/admin/analytics")
                .header("Authorization", format!("Bearer {}", ADMIN_KEY))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    body_json(res).await
}

#[tokio::test]
async fn empty_store_reports_zeroes() {
    let app = test_app();
    let report = fetch_analytics(&app).await;

    assert_eq!(report["overview"]["totalTransactions"], 0);
    assert_eq!(report["overview"]["totalVolume"], 0.0);
    assert_eq!(report["overview"]["averageTransaction"], 0.0);
    assert_eq!(report["byStatus"]["CREATED"], 0);
}

#[tokio::test]
async fn overview_counts_only_completed() {
    let app = test_app();

    let completed_id = create_transaction(&app, "Somalia", 100.0).await;
    complete_transaction(&app, &completed_id).await;
    create_transaction(&app, "Ethiopia", 500.0).await;

    let report = fetch_analytics(&app).await;

    assert_eq!(report["overview"]["totalTransactions"], 1);
    assert_eq!(report["overview"]["totalVolume"], 100.0);
    assert_eq!(report["overview"]["totalFees"], 2.0);
    assert_eq!(report["overview"]["averageTransaction"], 100.0);
}

#[tokio::test]
async fn by_status_sums_to_total_count() {
    let app = test_app();

    let completed_id = create_transaction(&app, "Somalia", 100.0).await;
    complete_transaction(&app, &completed_id).await;
    create_transaction(&app, "Somalia", 10.0).await;
    create_transaction(&app, "Ethiopia", 20.0).await;

    let report = fetch_analytics(&app).await;
    let by_status = &report["byStatus"];
    let sum = by_status["CREATED"].as_u64().unwrap()
        + by_status["AWAITING_FUNDS_CHECK"].as_u64().unwrap()
        + by_status["PAID_IN"].as_u64().unwrap()
        + by_status["COMPLETED"].as_u64().unwrap();

    assert_eq!(sum, 3);
    assert_eq!(by_status["CREATED"], 2);
    assert_eq!(by_status["COMPLETED"], 1);
}

#[tokio::test]
async fn by_country_reports_completed_volume() {
    let app = test_app();

    let somalia = create_transaction(&app, "Somalia", 100.0).await;
    complete_transaction(&app, &somalia).await;
    let ethiopia = create_transaction(&app, "Ethiopia", 75.5).await;
    complete_transaction(&app, &ethiopia).await;

    let report = fetch_analytics(&app).await;

    assert_eq!(report["byCountry"]["Somalia"]["count"], 1);
    assert_eq!(report["byCountry"]["Somalia"]["volume"], 100.0);
    assert_eq!(report["byCountry"]["Ethiopia"]["count"], 1);
    assert_eq!(report["byCountry"]["Ethiopia"]["volume"], 75.5);
}

#[tokio::test]
async fn fresh_transactions_fall_in_today_window() {
    let app = test_app();

    let id = create_transaction(&app, "Somalia", 100.0).await;
    complete_transaction(&app, &id).await;

    let report = fetch_analytics(&app).await;

    assert_eq!(report["today"]["transactions"], 1);
    assert_eq!(report["today"]["volume"], 100.0);
    assert_eq!(report["thisMonth"]["transactions"], 1);
    assert_eq!(report["thisMonth"]["volume"], 100.0);
}

#[tokio::test]
async fn demo_generate_seeds_default_count() {
    let app = test_app();

    let res = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/admin/demo/generate")
                .header("Authorization", format!("Bearer {}", ADMIN_KEY))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body = body_json(res).await;
    assert_eq!(body["count"], 50);
    assert_eq!(body["message"], "Generated 50 demo transactions");

    let res = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/transactions")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let listed = body_json(res).await;
    assert_eq!(listed.as_array().unwrap().len(), 50);
}

#[tokio::test]
async fn demo_generate_honors_requested_count() {
    let app = test_app();

    let res = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/admin/demo/generate")
                .header("Authorization", format!("Bearer {}", ADMIN_KEY))
                .header("content-type", "application/json")
                .body(Body::from(json!({ "count": 7 }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body = body_json(res).await;
    assert_eq!(body["count"], 7);

    let report = fetch_analytics(&app).await;
    let by_status = &report["byStatus"];
    let sum = by_status["CREATED"].as_u64().unwrap()
        + by_status["AWAITING_FUNDS_CHECK"].as_u64().unwrap()
        + by_status["PAID_IN"].as_u64().unwrap()
        + by_status["COMPLETED"].as_u64().unwrap();
    assert_eq!(sum, 7);
}
