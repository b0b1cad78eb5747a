//! Void cache store
//!
//! A store that keeps nothing. Every fetch misses and every save is
//! accepted and discarded. Useful for tests and for disabling caching
//! while keeping the cached-reader wiring intact.

use annodi_domain::container::{Argument, ServiceDefinition};
use annodi_domain::ports::CacheStore;
use annodi_domain::registry::cache::{CacheServiceEntry, CacheServiceRequest, CACHE_SERVICES};

/// Cache store that doesn't store anything
#[derive(Debug, Clone, Copy, Default)]
pub struct VoidCacheStore;

impl VoidCacheStore {
    /// Create a new void store
    pub fn new() -> Self {
        Self
    }
}

impl CacheStore for VoidCacheStore {
    fn fetch(&self, _key: &str) -> Option<String> {
        None
    }

    fn save(&self, _key: &str, _value: String) {}

    fn delete(&self, _key: &str) -> bool {
        false
    }

    fn clear(&self) {}

    fn backend_name(&self) -> &str {
        "void"
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

#[linkme::distributed_slice(CACHE_SERVICES)]
static VOID_BACKEND: CacheServiceEntry = CacheServiceEntry {
    name: "void",
    description: "No-op store, disables caching",
    service: |request: &CacheServiceRequest| {
        ServiceDefinition::new(&request.service_id, "VoidCacheStore")
            .with_factory("VoidCacheStore", vec![])
            .with_autowired(false)
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn void_store_never_hits() {
        let store = VoidCacheStore::new();
        store.save("key", "value".to_string());
        assert_eq!(store.fetch("key"), None);
        assert!(!store.delete("key"));
    }

    #[test]
    fn backends_are_registered_in_the_slice() {
        let mut names: Vec<&str> = CACHE_SERVICES.iter().map(|entry| entry.name).collect();
        names.sort_unstable();
        assert_eq!(names, vec!["default", "memory", "void"]);
    }
}
