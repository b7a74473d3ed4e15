//! In-memory trade store adapter.

use std::collections::HashSet;

use crate::domain::error::BlotterError;
use crate::domain::trade::Trade;
use crate::ports::store_port::TradeStore;

/// The whole collection, owned once, immutable after construction.
///
/// Construction is the only mutation point, so the trade-id uniqueness
/// invariant is enforced there and holds for the process lifetime.
/// Instances are independent; tests can build as many as they like.
pub struct InMemoryStore {
    trades: Vec<Trade>,
}

impl InMemoryStore {
    pub fn new(trades: Vec<Trade>) -> Result<Self, BlotterError> {
        let mut seen = HashSet::new();
        for trade in &trades {
            if !seen.insert(trade.trade_id.as_str()) {
                return Err(BlotterError::DuplicateTradeId {
                    id: trade.trade_id.clone(),
                });
            }
        }
        Ok(Self { trades })
    }

    pub fn len(&self) -> usize {
        self.trades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }
}

impl TradeStore for InMemoryStore {
    fn get_all(&self) -> Vec<Trade> {
        self.trades.clone()
    }

    fn get_by_id(&self, trade_id: &str) -> Option<Trade> {
        // Linear scan; the collection is small and unindexed.
        self.trades.iter().find(|t| t.trade_id == trade_id).cloned()
    }
}
