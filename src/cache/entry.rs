//! Cache Entry Module
//!
//! Defines the structure for individual cache entries.

// == Cache Entry ==
/// A single stored value.
///
/// Entries are immutable: an overwrite of the same key replaces the whole
/// entry rather than mutating the value in place. Callers receive clones of
/// the value, never a reference into the store.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored value
    value: String,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry holding the given value.
    pub fn new(value: String) -> Self {
        Self { value }
    }

    // == Value ==
    /// Returns the stored value.
    pub fn value(&self) -> &str {
        &self.value
    }
}
