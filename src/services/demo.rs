//! Demo data seeding for the analytics dashboard.
//! Generates randomized transactions spread over the last 30 days, with
//! stage timestamps consistent with whatever status each one landed on.

use chrono::{Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Uuid;

use crate::domain::{Status, Transaction};
use crate::quote::round2;
use crate::rates::{Country, RateTable};

pub const DEFAULT_DEMO_COUNT: usize = 50;

const DEMO_NAMES: &[&str] = &[
    "Ahmed Mohamed",
    "Fatima Hassan",
    "Abdi Ali",
    "Hawa Osman",
    "Omar Ibrahim",
    "Amina Yusuf",
];

const DEMO_PHONES: &[&str] = &[
    "+252612345678",
    "+252613456789",
    "+251911234567",
    "+251912345678",
];

/// Build `count` randomized transactions. Amounts fall in 50..550 GBP,
/// countries split roughly evenly, statuses drawn uniformly.
pub fn generate_transactions(rates: &RateTable, count: usize) -> Vec<Transaction> {
    let mut rng = rand::thread_rng();

    (0..count)
        .map(|_| {
            let country = if rng.gen_bool(0.5) {
                Country::Somalia
            } else {
                Country::Ethiopia
            };
            let amount_in_gbp = round2(rng.gen_range(50.0..550.0));
            let rate = rates.rate(country);
            let fee_gbp = round2(amount_in_gbp * rates.fee_percentage());
            let amount_out = round2((amount_in_gbp - fee_gbp) * rate);

            let days_ago = rng.gen_range(0..30);
            let created_at = Utc::now() - Duration::days(days_ago);

            let status = *Status::ALL.choose(&mut rng).unwrap_or(&Status::Created);

            let id = Uuid::new_v4();
            Transaction {
                bank_reference: format!("TXN-{}", id.to_string()[..8].to_uppercase()),
                id,
                country,
                receiver_name: DEMO_NAMES
                    .choose(&mut rng)
                    .unwrap_or(&DEMO_NAMES[0])
                    .to_string(),
                receiver_phone: DEMO_PHONES
                    .choose(&mut rng)
                    .unwrap_or(&DEMO_PHONES[0])
                    .to_string(),
                amount_in_gbp,
                fee_gbp,
                fee_percentage: rates.fee_percentage() * 100.0,
                rate,
                amount_out,
                status,
                created_at,
                proof_uploaded_at: (status != Status::Created).then_some(created_at),
                funds_in_at: matches!(status, Status::PaidIn | Status::Completed)
                    .then_some(created_at),
                paid_out_at: (status == Status::Completed).then_some(created_at),
            }
        })
        .collect()
}
