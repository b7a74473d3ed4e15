//! Port traits at the domain boundary.

pub mod store_port;
pub mod config_port;
