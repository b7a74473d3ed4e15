//! Trade record representation and wire format.
//!
//! Field names on the wire follow the established external protocol
//! (camelCase, `buySellIndicator` for the side) and must not change.

use serde::{Deserialize, Serialize};

use crate::domain::error::BlotterError;

/// Whether a trade was a purchase or a sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    #[serde(rename = "BUY")]
    Buy,
    #[serde(rename = "SELL")]
    Sell,
}

impl std::str::FromStr for Side {
    type Err = BlotterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BUY" => Ok(Side::Buy),
            "SELL" => Ok(Side::Sell),
            other => Err(BlotterError::InvalidSide {
                value: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Buy => write!(f, "BUY"),
            Side::Sell => write!(f, "SELL"),
        }
    }
}

/// Price and quantity details embedded in a [`Trade`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeDetails {
    #[serde(rename = "buySellIndicator")]
    pub side: Side,
    pub price: f64,
    pub quantity: u32,
}

/// A single executed trade.
///
/// `counterparty` may be absent; every consumer must treat `None` as
/// "not available" rather than an error. `trade_id` is unique within a
/// store for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    #[serde(rename = "assetClass")]
    pub asset_class: Option<String>,
    pub counterparty: Option<String>,
    #[serde(rename = "instrumentId")]
    pub instrument_id: String,
    #[serde(rename = "instrumentName")]
    pub instrument_name: String,
    #[serde(rename = "tradeDateTime")]
    pub trade_date_time: chrono::NaiveDateTime,
    #[serde(rename = "tradeDetails")]
    pub trade_details: TradeDetails,
    #[serde(rename = "tradeId")]
    pub trade_id: String,
    pub trader: String,
}
