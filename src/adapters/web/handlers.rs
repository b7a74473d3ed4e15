//! HTTP request handlers for the web adapter.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;

use crate::domain::query::{self, ListOptions, DEFAULT_PAGE, DEFAULT_PER_PAGE};
use crate::domain::trade::Trade;

use super::{ApiError, AppState};

/// Query parameters for `GET /trades`, named as the external protocol
/// names them (`trade_type` carries the side indicator).
#[derive(Debug, serde::Deserialize)]
pub struct ListParams {
    pub search: Option<String>,
    pub asset_class: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub trade_type: Option<String>,
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_per_page")]
    pub per_page: i64,
    pub sort_by: Option<String>,
    #[serde(default)]
    pub reverse_sort: bool,
}

fn default_page() -> i64 {
    DEFAULT_PAGE
}

fn default_per_page() -> i64 {
    DEFAULT_PER_PAGE
}

impl From<ListParams> for ListOptions {
    fn from(params: ListParams) -> Self {
        ListOptions {
            search: params.search,
            asset_class: params.asset_class,
            start: params.start,
            end: params.end,
            min_price: params.min_price,
            max_price: params.max_price,
            side: params.trade_type,
            page: params.page,
            per_page: params.per_page,
            sort_by: params.sort_by,
            reverse_sort: params.reverse_sort,
        }
    }
}

pub async fn list_trades(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Trade>>, ApiError> {
    let options = ListOptions::from(params);
    let trades = query::list_trades(&*state.store, &options)?;
    tracing::debug!(returned = trades.len(), "list trades");
    Ok(Json(trades))
}

pub async fn get_trade(
    State(state): State<Arc<AppState>>,
    Path(trade_id): Path<String>,
) -> Response {
    match query::get_trade(&*state.store, &trade_id) {
        Some(trade) => Json(trade).into_response(),
        None => {
            tracing::debug!(%trade_id, "trade not found");
            (
                StatusCode::NOT_FOUND,
                Json(json!({ "message": "Trade not found" })),
            )
                .into_response()
        }
    }
}
