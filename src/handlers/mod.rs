pub mod admin;
pub mod export;
pub mod quotes;
pub mod transactions;

use axum::{response::IntoResponse, Json};
use serde_json::json;

pub async fn health() -> impl IntoResponse {
    Json(json!({ "ok": true }))
}
