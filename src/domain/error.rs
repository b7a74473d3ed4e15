//! Domain error types.
//!
//! A missing trade is not an error: lookups return `Option` and callers
//! decide what absence means at their boundary. The variants here cover
//! invalid caller input (rejected fast, never coerced) and startup
//! failures.

/// Top-level error type for blotter.
#[derive(Debug, Clone, thiserror::Error)]
pub enum BlotterError {
    #[error("invalid date \"{value}\": expected YYYY-MM-DD")]
    InvalidDate { value: String },

    #[error("invalid side \"{value}\": expected BUY or SELL")]
    InvalidSide { value: String },

    #[error("unknown sort field \"{field}\"")]
    UnknownSortField { field: String },

    #[error("page must be positive, got {page}")]
    InvalidPage { page: i64 },

    #[error("per_page must be positive, got {per_page}")]
    InvalidPerPage { per_page: i64 },

    #[error("duplicate trade id {id}")]
    DuplicateTradeId { id: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },
}

impl From<&BlotterError> for std::process::ExitCode {
    fn from(err: &BlotterError) -> Self {
        let code: u8 = match err {
            BlotterError::ConfigParse { .. } | BlotterError::ConfigInvalid { .. } => 2,
            BlotterError::DuplicateTradeId { .. } => 3,
            BlotterError::InvalidDate { .. }
            | BlotterError::InvalidSide { .. }
            | BlotterError::UnknownSortField { .. }
            | BlotterError::InvalidPage { .. }
            | BlotterError::InvalidPerPage { .. } => 4,
        };
        std::process::ExitCode::from(code)
    }
}
