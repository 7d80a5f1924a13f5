//! Full-scan analytics over the transaction collection.
//! Recomputed on every request; there is no cache to invalidate and the
//! store is small enough that a linear pass is the whole cost.

use chrono::{DateTime, Datelike, Local};
use serde::Serialize;

use crate::domain::{Status, Transaction};
use crate::quote::round2;
use crate::rates::Country;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub total_transactions: usize,
    pub total_volume: f64,
    pub total_fees: f64,
    pub average_transaction: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WindowStats {
    pub transactions: usize,
    pub volume: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CountryStats {
    pub count: usize,
    pub volume: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CountryBreakdown {
    #[serde(rename = "Somalia")]
    pub somalia: CountryStats,
    #[serde(rename = "Ethiopia")]
    pub ethiopia: CountryStats,
}

/// Counts across ALL transactions, not just completed ones. The rest of the
/// report scopes to COMPLETED; this one intentionally does not.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StatusBreakdown {
    #[serde(rename = "CREATED")]
    pub created: usize,
    #[serde(rename = "AWAITING_FUNDS_CHECK")]
    pub awaiting_funds_check: usize,
    #[serde(rename = "PAID_IN")]
    pub paid_in: usize,
    #[serde(rename = "COMPLETED")]
    pub completed: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    pub overview: Overview,
    pub today: WindowStats,
    pub this_month: WindowStats,
    pub by_country: CountryBreakdown,
    pub by_status: StatusBreakdown,
}

/// Build the report as of `now`. Calendar windows use the server's local
/// date, matching what the dashboard shows its operators.
pub fn summarize(transactions: &[Transaction], now: DateTime<Local>) -> AnalyticsReport {
    let completed: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| t.status == Status::Completed)
        .collect();

    let total_volume: f64 = completed.iter().map(|t| t.amount_in_gbp).sum();
    let total_fees: f64 = completed.iter().map(|t| t.fee_gbp).sum();
    let total_transactions = completed.len();

    let today = now.date_naive();
    let today_txns: Vec<&&Transaction> = completed
        .iter()
        .filter(|t| t.created_at.with_timezone(&Local).date_naive() == today)
        .collect();
    let today_volume: f64 = today_txns.iter().map(|t| t.amount_in_gbp).sum();

    let month_txns: Vec<&&Transaction> = completed
        .iter()
        .filter(|t| {
            let created = t.created_at.with_timezone(&Local);
            created.year() == now.year() && created.month() == now.month()
        })
        .collect();
    let month_volume: f64 = month_txns.iter().map(|t| t.amount_in_gbp).sum();

    let country_stats = |country: Country| {
        let for_country: Vec<&&Transaction> =
            completed.iter().filter(|t| t.country == country).collect();
        CountryStats {
            count: for_country.len(),
            volume: round2(for_country.iter().map(|t| t.amount_in_gbp).sum()),
        }
    };

    let status_count =
        |status: Status| transactions.iter().filter(|t| t.status == status).count();

    AnalyticsReport {
        overview: Overview {
            total_transactions,
            total_volume: round2(total_volume),
            total_fees: round2(total_fees),
            average_transaction: if total_transactions > 0 {
                round2(total_volume / total_transactions as f64)
            } else {
                0.0
            },
        },
        today: WindowStats {
            transactions: today_txns.len(),
            volume: round2(today_volume),
        },
        this_month: WindowStats {
            transactions: month_txns.len(),
            volume: round2(month_volume),
        },
        by_country: CountryBreakdown {
            somalia: country_stats(Country::Somalia),
            ethiopia: country_stats(Country::Ethiopia),
        },
        by_status: StatusBreakdown {
            created: status_count(Status::Created),
            awaiting_funds_check: status_count(Status::AwaitingFundsCheck),
            paid_in: status_count(Status::PaidIn),
            completed: status_count(Status::Completed),
        },
    }
}
