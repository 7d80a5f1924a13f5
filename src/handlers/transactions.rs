use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::{NewTransaction, Transaction, TransitionEvent};
use crate::error::AppError;
use crate::rates::Country;
use crate::validation::{
    require_field, validate_min_len, validate_positive_amount, validate_required,
    RECEIVER_PHONE_MIN_LEN,
};
use crate::AppState;

/// Raw creation payload, validated explicitly so malformed input reports as
/// 400 with the offending field named.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionRequest {
    pub country: Option<String>,
    pub amount_in_gbp: Option<f64>,
    pub receiver_name: Option<String>,
    pub receiver_phone: Option<String>,
}

pub async fn create_transaction(
    State(state): State<AppState>,
    Json(payload): Json<CreateTransactionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let country: Country = require_field("country", payload.country)?
        .parse()
        .map_err(|e: crate::rates::UnsupportedCountry| AppError::Validation(e.to_string()))?;

    let amount_in_gbp = require_field("amountInGbp", payload.amount_in_gbp)?;
    validate_positive_amount("amountInGbp", amount_in_gbp)?;

    let receiver_name = require_field("receiverName", payload.receiver_name)?;
    validate_required("receiverName", &receiver_name)?;
    let receiver_name = receiver_name.trim().to_string();

    let receiver_phone = require_field("receiverPhone", payload.receiver_phone)?;
    let receiver_phone = receiver_phone.trim().to_string();
    validate_min_len("receiverPhone", &receiver_phone, RECEIVER_PHONE_MIN_LEN)?;

    let tx = Transaction::create(
        &state.rates,
        NewTransaction {
            country,
            amount_in_gbp,
            receiver_name,
            receiver_phone,
        },
    );

    let inserted = state.store.insert(tx).await?;

    tracing::info!(
        transaction_id = %inserted.id,
        country = %inserted.country,
        amount_in_gbp = inserted.amount_in_gbp,
        "Transaction created"
    );

    Ok((StatusCode::CREATED, Json(inserted)))
}

pub async fn list_transactions(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let transactions = state.store.list_all().await?;

    Ok(Json(transactions))
}

pub async fn get_transaction(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let tx = state.store.get_by_id(id).await?;

    Ok(Json(tx))
}

/// Sender marks their bank transfer proof as uploaded, moving the
/// transaction to AWAITING_FUNDS_CHECK.
pub async fn upload_proof(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let tx = state
        .store
        .transition(id, TransitionEvent::ProofUploaded)
        .await?;

    Ok(Json(tx))
}
