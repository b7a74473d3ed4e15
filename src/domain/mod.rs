//! Core domain types and the query pipeline.

pub mod trade;
pub mod filter;
pub mod search;
pub mod sort;
pub mod paginate;
pub mod query;
pub mod error;
