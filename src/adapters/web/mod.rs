//! Web server adapter.
//!
//! Axum router exposing the two read operations as a JSON API. The
//! store is shared behind an `Arc` with no locking; it is immutable
//! after startup, so concurrent requests are safe by construction.

mod error;
mod handlers;

pub use error::ApiError;
pub use handlers::*;

use axum::{routing::get, Router};
use std::sync::Arc;

use crate::ports::store_port::TradeStore;

pub struct AppState {
    pub store: Arc<dyn TradeStore + Send + Sync>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/trades", get(handlers::list_trades))
        .route("/trades/{trade_id}", get(handlers::get_trade))
        .with_state(Arc::new(state))
}
