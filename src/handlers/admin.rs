//! Operator-facing endpoints. The admin sub-router wraps these in the
//! bearer-key middleware; nothing here re-checks credentials.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use chrono::Local;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::domain::TransitionEvent;
use crate::error::AppError;
use crate::services::{analytics, demo};
use crate::AppState;

/// Operator confirmed the sender's funds arrived: -> PAID_IN.
pub async fn confirm_funds(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let tx = state
        .store
        .transition(id, TransitionEvent::FundsConfirmed)
        .await?;

    tracing::info!(transaction_id = %tx.id, "Funds confirmed");

    Ok(Json(tx))
}

/// Operator paid out to the receiver: -> COMPLETED.
pub async fn complete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let tx = state.store.transition(id, TransitionEvent::PaidOut).await?;

    tracing::info!(transaction_id = %tx.id, "Transaction completed");

    Ok(Json(tx))
}

pub async fn analytics(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let transactions = state.store.list_all().await?;
    let report = analytics::summarize(&transactions, Local::now());

    Ok(Json(report))
}

#[derive(Debug, Default, Deserialize)]
pub struct GenerateDemoRequest {
    pub count: Option<usize>,
}

/// Seed randomized transactions so the dashboard has something to show.
/// Body is optional; `{"count": n}` overrides the default of 50.
pub async fn generate_demo(
    State(state): State<AppState>,
    payload: Option<Json<GenerateDemoRequest>>,
) -> Result<impl IntoResponse, AppError> {
    let count = payload
        .and_then(|Json(p)| p.count)
        .unwrap_or(demo::DEFAULT_DEMO_COUNT);

    for tx in demo::generate_transactions(&state.rates, count) {
        state.store.insert(tx).await?;
    }

    tracing::info!(count, "Generated demo transactions");

    Ok(Json(json!({
        "message": format!("Generated {} demo transactions", count),
        "count": count,
    })))
}
