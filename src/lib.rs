//! KV Cache - A lightweight in-memory key-value cache server
//!
//! Stores short string values by string key over a minimal HTTP API.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;

pub use api::AppState;
pub use config::Config;
