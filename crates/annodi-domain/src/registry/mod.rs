//! Process-wide registries
//!
//! Two registries live here:
//!
//! - [`loader`] — the annotation registry: globally ignored names and the
//!   idempotent loader hooks consulted when an annotation type must be
//!   resolved at parse time.
//! - [`cache`] — the cache-backend registry: backends submit
//!   [`cache::CacheServiceEntry`] values via `linkme::distributed_slice`
//!   and are resolved by name at configuration time.

pub mod cache;
pub mod loader;

pub use cache::{list_cache_services, resolve_cache_entry, CacheServiceEntry, CacheServiceRequest};
pub use loader::{AnnotationRegistry, Loader, TYPE_EXISTS};
