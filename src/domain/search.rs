//! Free-text search stage.

use crate::domain::trade::Trade;

/// Keep trades where the query is a case-insensitive substring of any
/// searchable text field. An empty query passes everything through.
///
/// Runs after filtering, before sorting. An absent counterparty never
/// matches on that field.
pub fn search(trades: Vec<Trade>, query: &str) -> Vec<Trade> {
    if query.is_empty() {
        return trades;
    }
    let needle = query.to_lowercase();
    trades
        .into_iter()
        .filter(|t| matches(t, &needle))
        .collect()
}

fn matches(trade: &Trade, needle: &str) -> bool {
    trade
        .counterparty
        .as_deref()
        .is_some_and(|c| c.to_lowercase().contains(needle))
        || trade.instrument_id.to_lowercase().contains(needle)
        || trade.instrument_name.to_lowercase().contains(needle)
        || trade.trader.to_lowercase().contains(needle)
}
