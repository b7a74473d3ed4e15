//! HTTP error responses for the web adapter.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domain::error::BlotterError;

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

}

impl From<BlotterError> for ApiError {
    fn from(err: BlotterError) -> Self {
        let status = match &err {
            BlotterError::InvalidDate { .. }
            | BlotterError::InvalidSide { .. }
            | BlotterError::UnknownSortField { .. }
            | BlotterError::InvalidPage { .. }
            | BlotterError::InvalidPerPage { .. } => StatusCode::BAD_REQUEST,
            BlotterError::DuplicateTradeId { .. }
            | BlotterError::ConfigParse { .. }
            | BlotterError::ConfigInvalid { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(status, err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}
