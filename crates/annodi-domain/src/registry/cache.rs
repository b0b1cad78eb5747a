//! Cache backend registry
//!
//! Auto-registration system for cache backends. Backends submit a
//! [`CacheServiceEntry`] via `linkme::distributed_slice` and are resolved
//! by name at configuration time. An entry does not construct a store; it
//! emits the declarative [`ServiceDefinition`] the hosting container will
//! construct the store from.

use crate::container::ServiceDefinition;
use crate::error::{Error, Result};

/// Everything a backend needs to emit its service record
#[derive(Debug, Clone)]
pub struct CacheServiceRequest {
    /// Service id the backend record must be registered under
    pub service_id: String,
    /// Key namespace isolating this consumer from other cache users
    pub namespace: String,
    /// Host debug flag; backends forward it to their store
    pub debug: bool,
}

impl CacheServiceRequest {
    /// Create a request for the given service id and namespace
    pub fn new(service_id: impl Into<String>, namespace: impl Into<String>, debug: bool) -> Self {
        Self {
            service_id: service_id.into(),
            namespace: namespace.into(),
            debug,
        }
    }
}

/// Registry entry for cache backends
#[derive(Debug)]
pub struct CacheServiceEntry {
    /// Unique backend name (e.g. "default", "memory", "void")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Emits the service record for this backend
    pub service: fn(&CacheServiceRequest) -> ServiceDefinition,
}

// Backends submit entries at compile time
#[linkme::distributed_slice]
pub static CACHE_SERVICES: [CacheServiceEntry] = [..];

/// Resolve a cache backend by name from the registry
///
/// # Errors
///
/// Returns [`Error::UnknownCache`] naming the registered backends when no
/// entry matches.
pub fn resolve_cache_entry(name: &str) -> Result<&'static CacheServiceEntry> {
    for entry in CACHE_SERVICES {
        if entry.name == name {
            return Ok(entry);
        }
    }

    let available = CACHE_SERVICES
        .iter()
        .map(|entry| entry.name.to_string())
        .collect();
    Err(Error::unknown_cache(name, available))
}

/// List all registered cache backends as (name, description) pairs
pub fn list_cache_services() -> Vec<(&'static str, &'static str)> {
    CACHE_SERVICES
        .iter()
        .map(|entry| (entry.name, entry.description))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // No backend crate is linked into the domain tests, so the slice is
    // empty here; backend resolution itself is covered in annodi-providers
    // and annodi-extension.
    #[test]
    fn unknown_backend_lists_available_names() {
        let err = resolve_cache_entry("nonexistent").unwrap_err();
        match err {
            Error::UnknownCache { name, .. } => assert_eq!(name, "nonexistent"),
            other => panic!("expected UnknownCache, got {other:?}"),
        }
    }
}
