//! Cache store port
//!
//! Backends store serialized annotation metadata keyed per class/member.
//! The memoization policy (what to cache, when to bypass in debug mode)
//! belongs to the cached reader, not to the store.

/// Key/value store for parsed annotation metadata
pub trait CacheStore: Send + Sync {
    /// Fetch a previously saved entry
    fn fetch(&self, key: &str) -> Option<String>;

    /// Save an entry, replacing any previous value
    fn save(&self, key: &str, value: String);

    /// Remove an entry; returns whether it existed
    fn delete(&self, key: &str) -> bool;

    /// Drop all entries
    fn clear(&self);

    /// Backend name for diagnostics
    fn backend_name(&self) -> &str;
}
