//! Cache Module
//!
//! Provides the in-memory key-value store used by the HTTP API.

mod entry;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use store::CacheStore;

// == Public Constants ==
/// Maximum allowed key length in characters
pub const MAX_KEY_LENGTH: usize = 256;

/// Maximum allowed value length in characters
pub const MAX_VALUE_LENGTH: usize = 256;
