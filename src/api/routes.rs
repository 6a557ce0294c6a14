//! API Routes
//!
//! Configures the Axum router with all cache server endpoints.

use axum::{
    http::{header, HeaderValue},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use super::handlers::{get_handler, invalid_endpoint_handler, put_handler, AppState};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /get?key=<k>` - Retrieve a value by key
/// - `POST /put` - Store a key-value pair
/// - anything else - `{"status":"ERROR","message":"Invalid endpoint"}`
///
/// A wrong method on a known path falls through to the invalid-endpoint
/// handler, same as an unknown path. Every response carries
/// `Connection: close`; the contract is one response per connection.
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route("/get", get(get_handler).fallback(invalid_endpoint_handler))
        .route("/put", post(put_handler).fallback(invalid_endpoint_handler))
        .fallback(invalid_endpoint_handler)
        .layer(cors)
        .layer(SetResponseHeaderLayer::overriding(
            header::CONNECTION,
            HeaderValue::from_static("close"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
