//! Sort stage.
//!
//! The original protocol addressed sort keys by attribute name at
//! runtime; here that is a closed set of top-level fields mapped to
//! typed comparators. Nested trade-detail fields are not addressable.

use std::cmp::Ordering;

use crate::domain::error::BlotterError;
use crate::domain::trade::Trade;

/// A sortable top-level field of [`Trade`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    AssetClass,
    Counterparty,
    InstrumentId,
    InstrumentName,
    TradeDateTime,
    TradeId,
    Trader,
}

impl std::str::FromStr for SortField {
    type Err = BlotterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asset_class" => Ok(SortField::AssetClass),
            "counterparty" => Ok(SortField::Counterparty),
            "instrument_id" => Ok(SortField::InstrumentId),
            "instrument_name" => Ok(SortField::InstrumentName),
            "trade_date_time" => Ok(SortField::TradeDateTime),
            "trade_id" => Ok(SortField::TradeId),
            "trader" => Ok(SortField::Trader),
            other => Err(BlotterError::UnknownSortField {
                field: other.to_string(),
            }),
        }
    }
}

impl SortField {
    fn compare(self, a: &Trade, b: &Trade) -> Ordering {
        match self {
            // Absent optional values order before present ones.
            SortField::AssetClass => a.asset_class.cmp(&b.asset_class),
            SortField::Counterparty => a.counterparty.cmp(&b.counterparty),
            SortField::InstrumentId => a.instrument_id.cmp(&b.instrument_id),
            SortField::InstrumentName => a.instrument_name.cmp(&b.instrument_name),
            SortField::TradeDateTime => a.trade_date_time.cmp(&b.trade_date_time),
            SortField::TradeId => a.trade_id.cmp(&b.trade_id),
            SortField::Trader => a.trader.cmp(&b.trader),
        }
    }
}

/// Stable sort by `field`. Equal keys keep their input order, in both
/// directions.
pub fn sort(mut trades: Vec<Trade>, field: SortField, descending: bool) -> Vec<Trade> {
    trades.sort_by(|a, b| {
        let ord = field.compare(a, b);
        if descending { ord.reverse() } else { ord }
    });
    trades
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::trade::{Side, TradeDetails};
    use chrono::NaiveDate;

    fn trade(id: &str, instrument_id: &str, day: u32) -> Trade {
        Trade {
            asset_class: Some("Equity".into()),
            counterparty: Some("XYZ Bank".into()),
            instrument_id: instrument_id.to_string(),
            instrument_name: format!("{instrument_id} Inc."),
            trade_date_time: NaiveDate::from_ymd_opt(2023, 4, day)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
            trade_details: TradeDetails {
                side: Side::Sell,
                price: 50.0,
                quantity: 1,
            },
            trade_id: id.to_string(),
            trader: "TRADR".into(),
        }
    }

    fn ids(trades: &[Trade]) -> Vec<&str> {
        trades.iter().map(|t| t.trade_id.as_str()).collect()
    }

    #[test]
    fn parses_every_sortable_field_name() {
        for (name, field) in [
            ("asset_class", SortField::AssetClass),
            ("counterparty", SortField::Counterparty),
            ("instrument_id", SortField::InstrumentId),
            ("instrument_name", SortField::InstrumentName),
            ("trade_date_time", SortField::TradeDateTime),
            ("trade_id", SortField::TradeId),
            ("trader", SortField::Trader),
        ] {
            assert_eq!(name.parse::<SortField>().unwrap(), field);
        }
    }

    #[test]
    fn rejects_unknown_field_names() {
        for name in ["price", "quantity", "tradeId", ""] {
            assert!(matches!(
                name.parse::<SortField>(),
                Err(BlotterError::UnknownSortField { field }) if field == name
            ));
        }
    }

    #[test]
    fn sorts_ascending_by_instrument_id() {
        let trades = vec![trade("1", "TSLA", 1), trade("2", "AAPL", 2), trade("3", "GOOGL", 3)];
        let out = sort(trades, SortField::InstrumentId, false);
        assert_eq!(ids(&out), vec!["2", "3", "1"]);
    }

    #[test]
    fn sorts_descending_by_date() {
        let trades = vec![trade("1", "AAPL", 5), trade("2", "AAPL", 20), trade("3", "AAPL", 10)];
        let out = sort(trades, SortField::TradeDateTime, true);
        assert_eq!(ids(&out), vec!["2", "3", "1"]);
    }

    #[test]
    fn equal_keys_preserve_input_order() {
        let trades = vec![
            trade("1", "AAPL", 1),
            trade("2", "TSLA", 1),
            trade("3", "AAPL", 1),
            trade("4", "AAPL", 1),
        ];
        let out = sort(trades.clone(), SortField::InstrumentId, false);
        assert_eq!(ids(&out), vec!["1", "3", "4", "2"]);

        // Descending reverses keys, not the tie order.
        let out = sort(trades, SortField::InstrumentId, true);
        assert_eq!(ids(&out), vec!["2", "1", "3", "4"]);
    }

    #[test]
    fn absent_optional_field_orders_first() {
        let mut a = trade("1", "AAPL", 1);
        a.counterparty = None;
        let b = trade("2", "AAPL", 1);
        let out = sort(vec![b, a], SortField::Counterparty, false);
        assert_eq!(ids(&out), vec!["1", "2"]);
    }
}
