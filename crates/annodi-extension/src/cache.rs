//! Cache service resolution
//!
//! Maps a configured cache identifier onto a service record via the
//! backend registry. The record is returned for staged registration
//! instead of being added to the builder directly, so the extension can
//! commit all of its records atomically.

use tracing::debug;

use annodi_domain::container::Argument;
use annodi_domain::error::Result;
use annodi_domain::registry::cache::{resolve_cache_entry, CacheServiceRequest};
use annodi_domain::ServiceDefinition;

use crate::builder::ContainerBuilder;

/// Outcome of resolving a cache identifier
#[derive(Debug, Clone)]
pub struct ResolvedCache {
    /// Backend record to register; `None` when the service already exists
    pub definition: Option<ServiceDefinition>,
    /// Symbolic reference to the cache service
    pub reference: Argument,
}

/// Resolve `cache_id` to a cache service for the given namespace
///
/// The service id is derived from the extension name and namespace, so
/// repeated resolution within one build reuses the existing record.
///
/// # Errors
///
/// Returns [`Error::UnknownCache`] when no backend with that name is
/// registered.
///
/// [`Error::UnknownCache`]: annodi_domain::error::Error::UnknownCache
pub fn resolve_cache_service(
    builder: &ContainerBuilder,
    extension_name: &str,
    cache_id: &str,
    namespace: &str,
    debug_flag: bool,
) -> Result<ResolvedCache> {
    let service_id = format!("{extension_name}.cache.{namespace}");
    if builder.contains(&service_id) {
        return Ok(ResolvedCache {
            definition: None,
            reference: Argument::reference(service_id),
        });
    }

    let entry = resolve_cache_entry(cache_id)?;
    let request = CacheServiceRequest::new(&service_id, namespace, debug_flag);
    let definition = (entry.service)(&request);
    debug!(backend = entry.name, service = %service_id, "resolved cache backend");

    Ok(ResolvedCache {
        definition: Some(definition),
        reference: Argument::reference(service_id),
    })
}
