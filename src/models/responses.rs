//! Response DTOs for the cache server API
//!
//! Defines the structure of outgoing HTTP response bodies. All endpoints
//! share a single tagged result type: the `status` field in the body is the
//! sole success indicator, and the HTTP status is always 200.

use serde::Serialize;

/// Success message returned by the PUT operation.
pub const PUT_SUCCESS_MESSAGE: &str = "Key inserted/updated successfully";

/// Response body for every cache server endpoint.
///
/// Serializes as a flat JSON object tagged by `status`:
/// - `{"status":"OK","key":"<k>","value":"<v>"}` for a successful get
/// - `{"status":"OK","message":"..."}` for a successful put
/// - `{"status":"ERROR","message":"..."}` for any failure
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status")]
pub enum ApiResponse {
    /// Successful operation; fields absent from the outcome are omitted
    #[serde(rename = "OK")]
    Ok {
        #[serde(skip_serializing_if = "Option::is_none")]
        key: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        value: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// Failed operation with a human-readable message
    #[serde(rename = "ERROR")]
    Error { message: String },
}

impl ApiResponse {
    /// Response for a successful put.
    pub fn stored() -> Self {
        Self::Ok {
            key: None,
            value: None,
            message: Some(PUT_SUCCESS_MESSAGE.to_string()),
        }
    }

    /// Response for a successful get, echoing the key.
    pub fn found(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Ok {
            key: Some(key.into()),
            value: Some(value.into()),
            message: None,
        }
    }

    /// Response for any failed operation.
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }
}
