use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::IntoResponse,
};
use serde::Serialize;

use crate::domain::Transaction;
use crate::error::AppError;
use crate::AppState;

/// CSV column order, kept stable for downstream spreadsheet consumers.
const CSV_HEADERS: [&str; 15] = [
    "id",
    "createdAt",
    "country",
    "receiverName",
    "receiverPhone",
    "amountInGbp",
    "feeGbp",
    "feePercentage",
    "rate",
    "amountOut",
    "status",
    "bankReference",
    "proofUploadedAt",
    "fundsInAt",
    "paidOutAt",
];

/// CSV row representation - all fields pre-rendered to String so the writer
/// only has to quote and escape.
#[derive(Serialize)]
struct TransactionCsvRow {
    id: String,
    created_at: String,
    country: String,
    receiver_name: String,
    receiver_phone: String,
    amount_in_gbp: String,
    fee_gbp: String,
    fee_percentage: String,
    rate: String,
    amount_out: String,
    status: String,
    bank_reference: String,
    proof_uploaded_at: String,
    funds_in_at: String,
    paid_out_at: String,
}

impl From<&Transaction> for TransactionCsvRow {
    fn from(tx: &Transaction) -> Self {
        TransactionCsvRow {
            id: tx.id.to_string(),
            created_at: tx.created_at.to_rfc3339(),
            country: tx.country.to_string(),
            receiver_name: tx.receiver_name.clone(),
            receiver_phone: tx.receiver_phone.clone(),
            amount_in_gbp: format!("{:.2}", tx.amount_in_gbp),
            fee_gbp: format!("{:.2}", tx.fee_gbp),
            fee_percentage: tx.fee_percentage.to_string(),
            rate: tx.rate.to_string(),
            amount_out: format!("{:.2}", tx.amount_out),
            status: tx.status.to_string(),
            bank_reference: tx.bank_reference.clone(),
            proof_uploaded_at: tx.proof_uploaded_at.map(|t| t.to_rfc3339()).unwrap_or_default(),
            funds_in_at: tx.funds_in_at.map(|t| t.to_rfc3339()).unwrap_or_default(),
            paid_out_at: tx.paid_out_at.map(|t| t.to_rfc3339()).unwrap_or_default(),
        }
    }
}

fn render_csv(transactions: &[Transaction]) -> Result<String, AppError> {
    // Header row written explicitly so an empty store still exports one.
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(vec![]);
    wtr.write_record(CSV_HEADERS)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    for tx in transactions {
        wtr.serialize(TransactionCsvRow::from(tx))
            .map_err(|e| AppError::Internal(e.to_string()))?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Internal(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| AppError::Internal(e.to_string()))
}

/// Export every transaction as a CSV attachment.
pub async fn transactions_csv(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let transactions = state.store.list_all().await?;
    let body = render_csv(&transactions)?;

    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("text/csv"));
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_static("attachment; filename=transactions.csv"),
    );

    Ok((StatusCode::OK, headers, body))
}
