//! Query facade.
//!
//! Orchestrates the pipeline in fixed order: resolve the all-trades
//! escape hatch, filter, search, sort, paginate. Sorting before
//! pagination keeps page boundaries stable across repeated calls
//! against the immutable store.

use crate::domain::error::BlotterError;
use crate::domain::filter::{filter, Criteria};
use crate::domain::paginate::paginate;
use crate::domain::search::search;
use crate::domain::sort::{sort, SortField};
use crate::domain::trade::Trade;
use crate::ports::store_port::TradeStore;

/// Sentinel asset class that bypasses the filter stage entirely.
///
/// Checked before any predicate is built, so other filter parameters
/// (including their validation) are ignored when it is present.
pub const ALL_TRADES: &str = "alltrade";

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PER_PAGE: i64 = 10;

/// All list-query parameters in one bundle.
///
/// Date, side, and sort-field inputs arrive as raw text and are
/// validated here, inside the core, so every boundary gets the same
/// fail-fast behavior.
#[derive(Debug, Clone)]
pub struct ListOptions {
    pub search: Option<String>,
    pub asset_class: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub side: Option<String>,
    pub page: i64,
    pub per_page: i64,
    pub sort_by: Option<String>,
    pub reverse_sort: bool,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            search: None,
            asset_class: None,
            start: None,
            end: None,
            min_price: None,
            max_price: None,
            side: None,
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
            sort_by: None,
            reverse_sort: false,
        }
    }
}

/// Look up a single trade by id. Absence is not an error.
pub fn get_trade(store: &dyn TradeStore, trade_id: &str) -> Option<Trade> {
    store.get_by_id(trade_id)
}

/// Run the full query pipeline over the store.
pub fn list_trades(
    store: &dyn TradeStore,
    options: &ListOptions,
) -> Result<Vec<Trade>, BlotterError> {
    if options.page <= 0 {
        return Err(BlotterError::InvalidPage { page: options.page });
    }
    if options.per_page <= 0 {
        return Err(BlotterError::InvalidPerPage {
            per_page: options.per_page,
        });
    }
    let sort_field = options
        .sort_by
        .as_deref()
        .map(str::parse::<SortField>)
        .transpose()?;

    let trades = store.get_all();

    let trades = if options.asset_class.as_deref() == Some(ALL_TRADES) {
        trades
    } else {
        let criteria = Criteria::parse(
            options.asset_class.as_deref(),
            options.start.as_deref(),
            options.end.as_deref(),
            options.min_price,
            options.max_price,
            options.side.as_deref(),
        )?;
        filter(trades, &criteria)
    };

    let trades = match options.search.as_deref() {
        Some(query) => search(trades, query),
        None => trades,
    };

    let trades = match sort_field {
        Some(field) => sort(trades, field, options.reverse_sort),
        None => trades,
    };

    paginate(trades, options.page, options.per_page)
}
