#![allow(dead_code)]

use blotter::adapters::memory_store::InMemoryStore;
use blotter::domain::trade::{Side, Trade, TradeDetails};
use chrono::{NaiveDate, NaiveDateTime};

pub fn datetime(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, 0, 0)
        .unwrap()
}

pub struct TradeBuilder {
    trade: Trade,
}

impl TradeBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            trade: Trade {
                asset_class: Some("Equity".to_string()),
                counterparty: Some("XYZ Bank".to_string()),
                instrument_id: "AAPL".to_string(),
                instrument_name: "Apple Inc.".to_string(),
                trade_date_time: datetime(2023, 6, 1, 10),
                trade_details: TradeDetails {
                    side: Side::Buy,
                    price: 100.0,
                    quantity: 10,
                },
                trade_id: id.to_string(),
                trader: "ALICE".to_string(),
            },
        }
    }

    pub fn asset_class(mut self, value: Option<&str>) -> Self {
        self.trade.asset_class = value.map(str::to_string);
        self
    }

    pub fn counterparty(mut self, value: Option<&str>) -> Self {
        self.trade.counterparty = value.map(str::to_string);
        self
    }

    pub fn instrument(mut self, id: &str, name: &str) -> Self {
        self.trade.instrument_id = id.to_string();
        self.trade.instrument_name = name.to_string();
        self
    }

    pub fn executed(mut self, y: i32, m: u32, d: u32, h: u32) -> Self {
        self.trade.trade_date_time = datetime(y, m, d, h);
        self
    }

    pub fn price(mut self, value: f64) -> Self {
        self.trade.trade_details.price = value;
        self
    }

    pub fn side(mut self, value: Side) -> Self {
        self.trade.trade_details.side = value;
        self
    }

    pub fn trader(mut self, value: &str) -> Self {
        self.trade.trader = value.to_string();
        self
    }

    pub fn build(self) -> Trade {
        self.trade
    }
}

/// A small fixed store exercising every filterable dimension.
pub fn sample_trades() -> Vec<Trade> {
    vec![
        TradeBuilder::new("100001")
            .asset_class(Some("Equity"))
            .instrument("AAPL", "Apple Inc.")
            .executed(2023, 1, 15, 9)
            .price(500.0)
            .side(Side::Buy)
            .trader("ALICE")
            .build(),
        TradeBuilder::new("100002")
            .asset_class(Some("Bond"))
            .counterparty(Some("ABC Corporation"))
            .instrument("TSLA", "Tesla Inc.")
            .executed(2023, 3, 10, 14)
            .price(250.5)
            .side(Side::Sell)
            .trader("BOB")
            .build(),
        TradeBuilder::new("100003")
            .asset_class(Some("Equity"))
            .counterparty(None)
            .instrument("GOOGL", "Alphabet Inc.")
            .executed(2023, 5, 20, 11)
            .price(0.0)
            .side(Side::Buy)
            .trader("CAROL")
            .build(),
        TradeBuilder::new("100004")
            .asset_class(Some("FX"))
            .counterparty(Some("DEF Investments"))
            .instrument("AMZN", "Amazon.com Inc.")
            .executed(2023, 8, 2, 16)
            .price(999.99)
            .side(Side::Sell)
            .trader("DAVE")
            .build(),
        TradeBuilder::new("100005")
            .asset_class(None)
            .instrument("TSLA", "Tesla Inc.")
            .executed(2023, 11, 30, 8)
            .price(77.25)
            .side(Side::Buy)
            .trader("ERIN")
            .build(),
    ]
}

pub fn sample_store() -> InMemoryStore {
    InMemoryStore::new(sample_trades()).unwrap()
}

pub fn ids(trades: &[Trade]) -> Vec<&str> {
    trades.iter().map(|t| t.trade_id.as_str()).collect()
}
