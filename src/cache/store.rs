//! Cache Store Module
//!
//! Main cache engine: a HashMap-backed key-value store with bounded-size
//! validation on writes. Entries live until overwritten or the process ends;
//! there is no eviction, expiry, or delete operation.

use std::collections::HashMap;

use crate::cache::{CacheEntry, MAX_KEY_LENGTH, MAX_VALUE_LENGTH};
use crate::error::{CacheError, Result};

// == Cache Store ==
/// In-memory key-value storage.
///
/// The store itself is single-threaded; concurrent access goes through the
/// `Arc<RwLock<CacheStore>>` held in [`crate::api::AppState`]. Writes replace
/// the whole entry under the write lock, so a racing read observes either the
/// old or the new value in full, never a partial one.
#[derive(Debug, Default)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
}

impl CacheStore {
    // == Constructor ==
    /// Creates a new, empty CacheStore.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    // == Put ==
    /// Stores a key-value pair, replacing any existing entry for the key.
    ///
    /// Validation happens before any mutation: a rejected put leaves the
    /// mapping unchanged.
    ///
    /// # Errors
    /// Returns [`CacheError::InvalidKeyOrValue`] when the key or value is
    /// empty or longer than 256 characters.
    pub fn put(&mut self, key: String, value: String) -> Result<()> {
        if !within_limit(&key, MAX_KEY_LENGTH) || !within_limit(&value, MAX_VALUE_LENGTH) {
            return Err(CacheError::InvalidKeyOrValue);
        }

        self.entries.insert(key, CacheEntry::new(value));
        Ok(())
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// # Errors
    /// Returns [`CacheError::KeyNotFound`] when no entry exists for the key.
    pub fn get(&self, key: &str) -> Result<String> {
        self.entries
            .get(key)
            .map(|entry| entry.value().to_string())
            .ok_or(CacheError::KeyNotFound)
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A key or value is valid when it is non-empty and within its length limit.
///
/// Length is counted in characters, not bytes, so multibyte input is not
/// penalized for its encoding.
fn within_limit(s: &str, limit: usize) -> bool {
    let len = s.chars().count();
    len > 0 && len <= limit
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_new() {
        let store = CacheStore::new();
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_put_and_get() {
        let mut store = CacheStore::new();

        store.put("key1".to_string(), "value1".to_string()).unwrap();
        let value = store.get("key1").unwrap();

        assert_eq!(value, "value1");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_get_nonexistent() {
        let store = CacheStore::new();

        let result = store.get("nonexistent");
        assert!(matches!(result, Err(CacheError::KeyNotFound)));
    }

    #[test]
    fn test_store_overwrite() {
        let mut store = CacheStore::new();

        store.put("key1".to_string(), "value1".to_string()).unwrap();
        store.put("key1".to_string(), "value2".to_string()).unwrap();

        let value = store.get("key1").unwrap();
        assert_eq!(value, "value2");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_put_idempotent() {
        let mut store = CacheStore::new();

        for _ in 0..5 {
            store.put("key1".to_string(), "value1".to_string()).unwrap();
        }

        assert_eq!(store.get("key1").unwrap(), "value1");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_key_at_limit() {
        let mut store = CacheStore::new();
        let key = "k".repeat(MAX_KEY_LENGTH);
        let value = "v".repeat(MAX_VALUE_LENGTH);

        store.put(key.clone(), value.clone()).unwrap();
        assert_eq!(store.get(&key).unwrap(), value);
    }

    #[test]
    fn test_store_key_too_long() {
        let mut store = CacheStore::new();
        let long_key = "x".repeat(MAX_KEY_LENGTH + 1);

        let result = store.put(long_key.clone(), "value".to_string());
        assert!(matches!(result, Err(CacheError::InvalidKeyOrValue)));
        assert!(matches!(store.get(&long_key), Err(CacheError::KeyNotFound)));
    }

    #[test]
    fn test_store_value_too_long() {
        let mut store = CacheStore::new();
        let long_value = "x".repeat(MAX_VALUE_LENGTH + 1);

        let result = store.put("key".to_string(), long_value);
        assert!(matches!(result, Err(CacheError::InvalidKeyOrValue)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_empty_key_rejected() {
        let mut store = CacheStore::new();

        let result = store.put("".to_string(), "value".to_string());
        assert!(matches!(result, Err(CacheError::InvalidKeyOrValue)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_empty_value_rejected() {
        let mut store = CacheStore::new();

        let result = store.put("key".to_string(), "".to_string());
        assert!(matches!(result, Err(CacheError::InvalidKeyOrValue)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_failed_put_keeps_old_value() {
        let mut store = CacheStore::new();

        store.put("key1".to_string(), "value1".to_string()).unwrap();
        let result = store.put("key1".to_string(), "x".repeat(MAX_VALUE_LENGTH + 1));

        assert!(matches!(result, Err(CacheError::InvalidKeyOrValue)));
        assert_eq!(store.get("key1").unwrap(), "value1");
    }

    #[test]
    fn test_store_multibyte_length_counts_characters() {
        let mut store = CacheStore::new();

        // 256 multibyte characters exceed 256 bytes but stay within the limit
        let value = "é".repeat(MAX_VALUE_LENGTH);
        store.put("key".to_string(), value.clone()).unwrap();
        assert_eq!(store.get("key").unwrap(), value);
    }
}
