//! Error types for the cache server
//!
//! Provides unified error handling using thiserror.
//!
//! Every logical failure is reported in the response body only: the HTTP
//! status stays 200 and the `status` field of the JSON body carries the
//! outcome. This mirrors the wire contract of the original service and is
//! deliberately not mapped onto HTTP status codes.

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ApiResponse;

// == Cache Error Enum ==
/// Unified error type for the cache server.
///
/// The `Display` string of each variant is the exact message clients see.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Key not found in cache
    #[error("Key not found")]
    KeyNotFound,

    /// Missing, empty, or oversized key or value
    #[error("Invalid key or value")]
    InvalidKeyOrValue,

    /// Unknown method/path combination
    #[error("Invalid endpoint")]
    InvalidEndpoint,
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        Json(ApiResponse::error(self.to_string())).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache server.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_match_wire_contract() {
        assert_eq!(CacheError::KeyNotFound.to_string(), "Key not found");
        assert_eq!(
            CacheError::InvalidKeyOrValue.to_string(),
            "Invalid key or value"
        );
        assert_eq!(CacheError::InvalidEndpoint.to_string(), "Invalid endpoint");
    }
}
