//! Request DTOs for the cache server API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.

use serde::Deserialize;

/// Request body for the PUT operation (POST /put)
///
/// # Fields
/// - `key`: The cache key to store the value under
/// - `value`: The value to store
///
/// Both fields are optional at the deserialization layer so that an absent
/// field surfaces as a validation error rather than a rejected request body.
#[derive(Debug, Clone, Deserialize)]
pub struct PutRequest {
    /// The cache key
    #[serde(default)]
    pub key: Option<String>,
    /// The value to store
    #[serde(default)]
    pub value: Option<String>,
}

/// Query parameters for the GET operation (GET /get?key=<k>)
///
/// A missing `key` parameter is treated as a validation failure, not a
/// routing failure.
#[derive(Debug, Clone, Deserialize)]
pub struct GetParams {
    /// The cache key to look up
    #[serde(default)]
    pub key: Option<String>,
}
