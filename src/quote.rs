//! Quote computation.
//! A quote is a pure calculation over the rate table; it is never persisted
//! and does not bind the transaction created afterwards.

use serde::Serialize;

use crate::error::AppError;
use crate::rates::{Country, RateTable};

/// Minutes a quote is presented as valid to the client.
pub const QUOTE_EXPIRY_MINUTES: u32 = 10;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub country: Country,
    pub amount_in_gbp: f64,
    pub fee_gbp: f64,
    /// Fee as a percentage of the sent amount, e.g. 2.0 for 2%.
    pub fee_percentage: f64,
    pub rate: f64,
    pub amount_out: f64,
    pub expires_in_minutes: u32,
}

/// Round to two decimal places, ties away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compute fee and payout for sending `amount_in_gbp` to `country`.
pub fn compute_quote(
    rates: &RateTable,
    country: Country,
    amount_in_gbp: f64,
) -> Result<Quote, AppError> {
    if !amount_in_gbp.is_finite() || amount_in_gbp <= 0.0 {
        return Err(AppError::Validation(
            "amountInGbp must be a number greater than 0".to_string(),
        ));
    }

    let rate = rates.rate(country);
    let fee_gbp = round2(amount_in_gbp * rates.fee_percentage());
    let amount_after_fee = amount_in_gbp - fee_gbp;
    let amount_out = round2(amount_after_fee * rate);

    Ok(Quote {
        country,
        amount_in_gbp,
        fee_gbp,
        fee_percentage: rates.fee_percentage() * 100.0,
        rate,
        amount_out,
        expires_in_minutes: QUOTE_EXPIRY_MINUTES,
    })
}
