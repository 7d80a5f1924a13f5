use axum::{extract::State, response::IntoResponse, Json};
use serde::Deserialize;

use crate::error::AppError;
use crate::quote::compute_quote;
use crate::rates::Country;
use crate::validation::{require_field, validate_positive_amount};
use crate::AppState;

/// Raw quote payload. Fields stay optional so that missing or unsupported
/// values surface as 400s with field-level messages.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub country: Option<String>,
    pub amount_in_gbp: Option<f64>,
}

pub async fn create_quote(
    State(state): State<AppState>,
    Json(payload): Json<QuoteRequest>,
) -> Result<impl IntoResponse, AppError> {
    let country: Country = require_field("country", payload.country)?
        .parse()
        .map_err(|e: crate::rates::UnsupportedCountry| AppError::Validation(e.to_string()))?;
    let amount_in_gbp = require_field("amountInGbp", payload.amount_in_gbp)?;
    validate_positive_amount("amountInGbp", amount_in_gbp)?;

    let quote = compute_quote(&state.rates, country, amount_in_gbp)?;

    Ok(Json(quote))
}
