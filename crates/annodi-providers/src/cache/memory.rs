//! In-memory cache store
//!
//! Process-local store backed by a `HashMap`. Keys are prefixed with the
//! configured namespace so several consumers can share one store type
//! without colliding.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use annodi_domain::container::{Argument, ServiceDefinition};
use annodi_domain::ports::CacheStore;
use annodi_domain::registry::cache::{CacheServiceEntry, CacheServiceRequest, CACHE_SERVICES};

/// In-memory cache store
#[derive(Debug, Default)]
pub struct MemoryCacheStore {
    namespace: String,
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryCacheStore {
    /// Create an empty store with the given key namespace
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            entries: Mutex::new(HashMap::new()),
        }
    }

    fn namespaced(&self, key: &str) -> String {
        format!("{}:{}", self.namespace, key)
    }
}

impl CacheStore for MemoryCacheStore {
    fn fetch(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&self.namespaced(key))
            .cloned()
    }

    fn save(&self, key: &str, value: String) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(self.namespaced(key), value);
    }

    fn delete(&self, key: &str) -> bool {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.namespaced(key))
            .is_some()
    }

    fn clear(&self) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn backend_name(&self) -> &str {
        "memory"
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

fn memory_service(request: &CacheServiceRequest) -> ServiceDefinition {
    ServiceDefinition::new(&request.service_id, "MemoryCacheStore")
        .with_factory(
            "MemoryCacheStore",
            vec![
                Argument::str(&request.namespace),
                Argument::Bool(request.debug),
            ],
        )
        .with_autowired(false)
}

#[linkme::distributed_slice(CACHE_SERVICES)]
static MEMORY_BACKEND: CacheServiceEntry = CacheServiceEntry {
    name: "memory",
    description: "Process-local in-memory store",
    service: memory_service,
};

#[linkme::distributed_slice(CACHE_SERVICES)]
static DEFAULT_BACKEND: CacheServiceEntry = CacheServiceEntry {
    name: "default",
    description: "Host default store (memory-backed)",
    service: memory_service,
};
