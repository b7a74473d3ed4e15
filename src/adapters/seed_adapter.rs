//! Random trade generation for startup seeding.
//!
//! Generation is deterministic for a given seed so a deployment can be
//! reproduced, and ids are deduplicated up front because the store
//! rejects duplicates at construction.

use std::collections::HashSet;

use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::trade::{Side, Trade, TradeDetails};

const ASSET_CLASSES: &[&str] = &["Equity", "Bond", "FX"];
const COUNTERPARTIES: &[&str] = &["ABC Corporation", "XYZ Bank", "DEF Investments"];
const INSTRUMENTS: &[(&str, &str)] = &[
    ("AAPL", "Apple Inc."),
    ("TSLA", "Tesla Inc."),
    ("GOOGL", "Alphabet Inc."),
    ("AMZN", "Amazon.com Inc."),
];

/// Generate `count` random trades with unique six-digit ids.
pub fn generate_trades(count: usize, seed: u64) -> Vec<Trade> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut used_ids = HashSet::with_capacity(count);
    (0..count)
        .map(|_| generate_trade(&mut rng, &mut used_ids))
        .collect()
}

fn generate_trade(rng: &mut StdRng, used_ids: &mut HashSet<String>) -> Trade {
    let trade_id = loop {
        let candidate = rng.gen_range(100_000..=999_999).to_string();
        if used_ids.insert(candidate.clone()) {
            break candidate;
        }
    };

    let (instrument_id, instrument_name) = INSTRUMENTS[rng.gen_range(0..INSTRUMENTS.len())];
    let price = (rng.gen_range(10.0..=1000.0_f64) * 100.0).round() / 100.0;

    Trade {
        asset_class: Some(ASSET_CLASSES[rng.gen_range(0..ASSET_CLASSES.len())].to_string()),
        counterparty: Some(COUNTERPARTIES[rng.gen_range(0..COUNTERPARTIES.len())].to_string()),
        instrument_id: instrument_id.to_string(),
        instrument_name: instrument_name.to_string(),
        trade_date_time: random_datetime(rng),
        trade_details: TradeDetails {
            side: if rng.gen_bool(0.5) { Side::Buy } else { Side::Sell },
            price,
            quantity: rng.gen_range(1..=100),
        },
        trade_id,
        trader: random_trader(rng),
    }
}

/// A naive timestamp somewhere in calendar 2023.
fn random_datetime(rng: &mut StdRng) -> chrono::NaiveDateTime {
    let start = NaiveDate::from_ymd_opt(2023, 1, 1).expect("valid constant date");
    let date = start + Duration::days(rng.gen_range(0..364));
    date.and_hms_opt(
        rng.gen_range(0..24),
        rng.gen_range(0..60),
        rng.gen_range(0..60),
    )
    .expect("ranges are within bounds")
}

fn random_trader(rng: &mut StdRng) -> String {
    (0..5).map(|_| rng.gen_range(b'A'..=b'Z') as char).collect()
}
