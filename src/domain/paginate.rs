//! Pagination stage.

use crate::domain::error::BlotterError;
use crate::domain::trade::Trade;

/// Slice out the 1-based `page` of `per_page` records.
///
/// The slice is `[(page-1)*per_page, +per_page)` clipped to the input
/// length; a page past the end is an empty sequence, not an error.
/// Non-positive `page` or `per_page` is rejected outright.
pub fn paginate(trades: Vec<Trade>, page: i64, per_page: i64) -> Result<Vec<Trade>, BlotterError> {
    if page <= 0 {
        return Err(BlotterError::InvalidPage { page });
    }
    if per_page <= 0 {
        return Err(BlotterError::InvalidPerPage { per_page });
    }

    let start = (page as usize - 1).saturating_mul(per_page as usize);
    if start >= trades.len() {
        return Ok(Vec::new());
    }
    let end = start.saturating_add(per_page as usize).min(trades.len());
    Ok(trades[start..end].to_vec())
}
