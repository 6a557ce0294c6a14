//! API Handlers
//!
//! HTTP request handlers for each cache server endpoint. Handlers are pure
//! routing: they validate parameters, call the store, and shape the result.
//! No session or per-connection state exists between calls.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::cache::CacheStore;
use crate::error::{CacheError, Result};
use crate::models::{ApiResponse, GetParams, PutRequest};

/// Application state shared across all handlers.
///
/// Holds the single cache store instance, built once at startup and passed
/// in explicitly. Wrapping it in `Arc<RwLock<>>` makes same-key writes
/// mutually exclusive with reads of that key; cross-key operations only
/// contend on the lock, never on each other's data.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe cache store
    pub cache: Arc<RwLock<CacheStore>>,
}

impl AppState {
    /// Creates a new AppState wrapping the given cache store.
    pub fn new(cache: CacheStore) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(CacheStore::new())
    }
}

/// Handler for GET /get?key=<k>
///
/// Retrieves a value from the cache by key. A missing or empty `key`
/// parameter is a validation failure, reported through the same error shape
/// as put's own validation.
pub async fn get_handler(
    State(state): State<AppState>,
    Query(params): Query<GetParams>,
) -> Result<Json<ApiResponse>> {
    let key = params
        .key
        .filter(|k| !k.is_empty())
        .ok_or(CacheError::InvalidKeyOrValue)?;

    let cache = state.cache.read().await;
    let value = cache.get(&key)?;

    Ok(Json(ApiResponse::found(key, value)))
}

/// Handler for POST /put
///
/// Stores a key-value pair in the cache. Absent fields in the request body
/// take the same validation path as empty or oversized ones.
pub async fn put_handler(
    State(state): State<AppState>,
    Json(req): Json<PutRequest>,
) -> Result<Json<ApiResponse>> {
    let (key, value) = match (req.key, req.value) {
        (Some(key), Some(value)) => (key, value),
        _ => return Err(CacheError::InvalidKeyOrValue),
    };

    let mut cache = state.cache.write().await;
    cache.put(key, value)?;

    Ok(Json(ApiResponse::stored()))
}

/// Fallback handler for any unknown method/path combination.
///
/// Never touches the store.
pub async fn invalid_endpoint_handler() -> CacheError {
    CacheError::InvalidEndpoint
}
