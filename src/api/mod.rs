//! API Module
//!
//! HTTP handlers and routing for the cache server API.
//!
//! # Endpoints
//! - `GET /get?key=<k>` - Retrieve a value by key
//! - `POST /put` - Store a key-value pair
//! - anything else - invalid endpoint error

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
