//! Trade store port trait.

use crate::domain::trade::Trade;

/// Read-only access to the trade collection.
///
/// The store is populated once at startup and never mutated, so
/// implementations need no interior locking; every call returns owned
/// copies and leaves the collection untouched.
pub trait TradeStore {
    /// All trades in insertion order.
    fn get_all(&self) -> Vec<Trade>;

    /// The unique trade with this id. `None` is a normal outcome.
    fn get_by_id(&self, trade_id: &str) -> Option<Trade>;
}
