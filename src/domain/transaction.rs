//! Transaction domain entity and its status lifecycle.
//! Framework-agnostic: handlers and stores depend on this module, never the
//! other way around.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::quote::round2;
use crate::rates::{Country, RateTable};

/// Processing status of a transaction. Transitions move strictly forward:
/// CREATED -> AWAITING_FUNDS_CHECK -> PAID_IN -> COMPLETED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Created,
    AwaitingFundsCheck,
    PaidIn,
    Completed,
}

impl Status {
    pub const ALL: [Status; 4] = [
        Status::Created,
        Status::AwaitingFundsCheck,
        Status::PaidIn,
        Status::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Created => "CREATED",
            Status::AwaitingFundsCheck => "AWAITING_FUNDS_CHECK",
            Status::PaidIn => "PAID_IN",
            Status::Completed => "COMPLETED",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Evidence-bearing events that advance a transaction through its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionEvent {
    /// Sender uploaded proof of their bank transfer.
    ProofUploaded,
    /// An operator confirmed the funds arrived.
    FundsConfirmed,
    /// An operator paid out to the receiver.
    PaidOut,
}

impl TransitionEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionEvent::ProofUploaded => "proof-uploaded",
            TransitionEvent::FundsConfirmed => "funds-confirmed",
            TransitionEvent::PaidOut => "paid-out",
        }
    }
}

impl std::fmt::Display for TransitionEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rejected transition: the transaction was not in the required prior state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot apply {event} to a transaction in status {from}")]
pub struct TransitionError {
    pub from: Status,
    pub event: TransitionEvent,
}

/// Validated input for creating a transaction. Receiver fields arrive
/// already trimmed by the validation layer.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub country: Country,
    pub amount_in_gbp: f64,
    pub receiver_name: String,
    pub receiver_phone: String,
}

/// One money-transfer request and its processing state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: Uuid,
    pub country: Country,
    pub receiver_name: String,
    pub receiver_phone: String,
    pub amount_in_gbp: f64,
    pub fee_gbp: f64,
    pub fee_percentage: f64,
    /// Exchange rate snapshot taken at creation. Later rate table changes
    /// never touch existing transactions.
    pub rate: f64,
    pub amount_out: f64,
    pub status: Status,
    pub bank_reference: String,
    pub created_at: DateTime<Utc>,
    pub proof_uploaded_at: Option<DateTime<Utc>>,
    pub funds_in_at: Option<DateTime<Utc>>,
    pub paid_out_at: Option<DateTime<Utc>>,
}

impl Transaction {
    /// Create a new transaction in status CREATED, snapshotting the rate and
    /// fee from the current table.
    pub fn create(rates: &RateTable, new: NewTransaction) -> Self {
        let id = Uuid::new_v4();
        let rate = rates.rate(new.country);
        let fee_gbp = round2(new.amount_in_gbp * rates.fee_percentage());
        let amount_out = round2((new.amount_in_gbp - fee_gbp) * rate);

        Self {
            bank_reference: bank_reference(&id),
            id,
            country: new.country,
            receiver_name: new.receiver_name,
            receiver_phone: new.receiver_phone,
            amount_in_gbp: new.amount_in_gbp,
            fee_gbp,
            fee_percentage: rates.fee_percentage() * 100.0,
            rate,
            amount_out,
            status: Status::Created,
            created_at: Utc::now(),
            proof_uploaded_at: None,
            funds_in_at: None,
            paid_out_at: None,
        }
    }

    /// Advance the lifecycle. Each event is accepted from exactly one prior
    /// status and stamps its timestamp exactly once.
    pub fn apply(&mut self, event: TransitionEvent, at: DateTime<Utc>) -> Result<(), TransitionError> {
        match (self.status, event) {
            (Status::Created, TransitionEvent::ProofUploaded) => {
                self.status = Status::AwaitingFundsCheck;
                self.proof_uploaded_at = Some(at);
                Ok(())
            }
            (Status::AwaitingFundsCheck, TransitionEvent::FundsConfirmed) => {
                self.status = Status::PaidIn;
                self.funds_in_at = Some(at);
                Ok(())
            }
            (Status::PaidIn, TransitionEvent::PaidOut) => {
                self.status = Status::Completed;
                self.paid_out_at = Some(at);
                Ok(())
            }
            (from, event) => Err(TransitionError { from, event }),
        }
    }
}

/// Human-facing payment reference shown to the payer for reconciliation:
/// "TXN-" plus the first 8 hex characters of the id, uppercased.
fn bank_reference(id: &Uuid) -> String {
    format!("TXN-{}", id.to_string()[..8].to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn somali_transaction(amount: f64) -> Transaction {
        Transaction::create(
            &RateTable::builtin(),
            NewTransaction {
                country: Country::Somalia,
                amount_in_gbp: amount,
                receiver_name: "Ahmed Mohamed".to_string(),
                receiver_phone: "+252612345678".to_string(),
            },
        )
    }

    #[test]
    fn creation_snapshots_fee_and_rate() {
        let tx = somali_transaction(100.0);

        assert_eq!(tx.status, Status::Created);
        assert_eq!(tx.rate, 34.0);
        assert_eq!(tx.fee_gbp, 2.0);
        assert_eq!(tx.fee_percentage, 2.0);
        assert_eq!(tx.amount_out, 3332.0);
        assert!(tx.proof_uploaded_at.is_none());
        assert!(tx.funds_in_at.is_none());
        assert!(tx.paid_out_at.is_none());
    }

    #[test]
    fn creation_for_ethiopia() {
        let tx = Transaction::create(
            &RateTable::builtin(),
            NewTransaction {
                country: Country::Ethiopia,
                amount_in_gbp: 200.0,
                receiver_name: "Hawa Osman".to_string(),
                receiver_phone: "+251911234567".to_string(),
            },
        );

        assert_eq!(tx.fee_gbp, 4.0);
        assert_eq!(tx.amount_out, 9506.0);
    }

    #[test]
    fn bank_reference_derived_from_id() {
        let tx = somali_transaction(100.0);
        let expected = format!("TXN-{}", tx.id.to_string()[..8].to_uppercase());

        assert_eq!(tx.bank_reference, expected);
        assert!(tx.bank_reference.starts_with("TXN-"));
        assert_eq!(tx.bank_reference.len(), 12);
    }

    #[test]
    fn full_lifecycle_stamps_each_timestamp_once() {
        let mut tx = somali_transaction(100.0);
        let created = tx.created_at;

        tx.apply(TransitionEvent::ProofUploaded, Utc::now()).unwrap();
        assert_eq!(tx.status, Status::AwaitingFundsCheck);

        tx.apply(TransitionEvent::FundsConfirmed, Utc::now()).unwrap();
        assert_eq!(tx.status, Status::PaidIn);

        tx.apply(TransitionEvent::PaidOut, Utc::now()).unwrap();
        assert_eq!(tx.status, Status::Completed);

        assert!(tx.proof_uploaded_at.unwrap() >= created);
        assert!(tx.funds_in_at.unwrap() >= tx.proof_uploaded_at.unwrap());
        assert!(tx.paid_out_at.unwrap() >= tx.funds_in_at.unwrap());
    }

    #[test]
    fn rejects_skipping_ahead() {
        let mut tx = somali_transaction(100.0);

        let err = tx.apply(TransitionEvent::FundsConfirmed, Utc::now()).unwrap_err();
        assert_eq!(err.from, Status::Created);
        assert_eq!(err.event, TransitionEvent::FundsConfirmed);
        assert_eq!(tx.status, Status::Created);
        assert!(tx.funds_in_at.is_none());
    }

    #[test]
    fn rejects_replaying_a_transition() {
        let mut tx = somali_transaction(100.0);
        tx.apply(TransitionEvent::ProofUploaded, Utc::now()).unwrap();
        let first = tx.proof_uploaded_at;

        assert!(tx.apply(TransitionEvent::ProofUploaded, Utc::now()).is_err());
        assert_eq!(tx.proof_uploaded_at, first);
    }

    #[test]
    fn rejects_transition_on_completed() {
        let mut tx = somali_transaction(100.0);
        tx.apply(TransitionEvent::ProofUploaded, Utc::now()).unwrap();
        tx.apply(TransitionEvent::FundsConfirmed, Utc::now()).unwrap();
        tx.apply(TransitionEvent::PaidOut, Utc::now()).unwrap();

        assert!(tx.apply(TransitionEvent::FundsConfirmed, Utc::now()).is_err());
        assert_eq!(tx.status, Status::Completed);
    }

    #[test]
    fn status_serializes_screaming_snake() {
        assert_eq!(
            serde_json::to_string(&Status::AwaitingFundsCheck).unwrap(),
            "\"AWAITING_FUNDS_CHECK\""
        );
        assert_eq!(serde_json::to_string(&Status::PaidIn).unwrap(), "\"PAID_IN\"");
    }

    #[test]
    fn transaction_serializes_camel_case() {
        let tx = somali_transaction(100.0);
        let json = serde_json::to_value(&tx).unwrap();

        assert_eq!(json["amountInGbp"], 100.0);
        assert_eq!(json["feeGbp"], 2.0);
        assert_eq!(json["status"], "CREATED");
        assert_eq!(json["receiverName"], "Ahmed Mohamed");
        assert!(json["proofUploadedAt"].is_null());
        assert!(json["fundsInAt"].is_null());
        assert!(json["paidOutAt"].is_null());
    }
}
