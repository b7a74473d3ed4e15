//! Concrete adapter implementations for ports.

pub mod memory_store;
pub mod seed_adapter;
pub mod file_config_adapter;
pub mod web;
