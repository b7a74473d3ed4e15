//! Predicate filter stage.
//!
//! Every criterion is an `Option`: `None` imposes no constraint, `Some`
//! narrows the candidate set. Presence is always checked through the
//! option, never through truthiness of the value, so a bound of exactly
//! zero still filters.

use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::error::BlotterError;
use crate::domain::trade::{Side, Trade};

/// Filter criteria; present fields combine with logical AND.
#[derive(Debug, Clone, Default)]
pub struct Criteria {
    pub asset_class: Option<String>,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub side: Option<Side>,
}

impl Criteria {
    /// Build criteria from raw request inputs, failing fast on malformed
    /// dates or an unrecognized side rather than ignoring them.
    pub fn parse(
        asset_class: Option<&str>,
        start: Option<&str>,
        end: Option<&str>,
        min_price: Option<f64>,
        max_price: Option<f64>,
        side: Option<&str>,
    ) -> Result<Self, BlotterError> {
        Ok(Self {
            asset_class: asset_class.map(str::to_string),
            start: start.map(parse_date_bound).transpose()?,
            end: end.map(parse_date_bound).transpose()?,
            min_price,
            max_price,
            side: side.map(str::parse::<Side>).transpose()?,
        })
    }
}

/// Parse a `YYYY-MM-DD` bound as midnight of that calendar day.
///
/// The store holds naive timestamps, so no timezone conversion applies.
pub fn parse_date_bound(value: &str) -> Result<NaiveDateTime, BlotterError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|d| d.and_hms_opt(0, 0, 0).expect("midnight is always valid"))
        .map_err(|_| BlotterError::InvalidDate {
            value: value.to_string(),
        })
}

/// Apply all present criteria in one pass, preserving input order.
pub fn filter(trades: Vec<Trade>, criteria: &Criteria) -> Vec<Trade> {
    trades
        .into_iter()
        .filter(|t| matches(t, criteria))
        .collect()
}

fn matches(trade: &Trade, criteria: &Criteria) -> bool {
    if let Some(asset_class) = &criteria.asset_class {
        if trade.asset_class.as_deref() != Some(asset_class.as_str()) {
            return false;
        }
    }
    if let Some(start) = criteria.start {
        if trade.trade_date_time < start {
            return false;
        }
    }
    if let Some(end) = criteria.end {
        if trade.trade_date_time > end {
            return false;
        }
    }
    if let Some(min_price) = criteria.min_price {
        if trade.trade_details.price < min_price {
            return false;
        }
    }
    if let Some(max_price) = criteria.max_price {
        if trade.trade_details.price > max_price {
            return false;
        }
    }
    if let Some(side) = criteria.side {
        if trade.trade_details.side != side {
            return false;
        }
    }
    true
}
