//! Shared identifiers and defaults
//!
//! Service id suffixes, external type names and configuration defaults
//! used by the extension when emitting service records.

/// Annotation names suppressed from parsing when the host configures none
pub const DEFAULT_IGNORED_ANNOTATIONS: [&str; 2] = ["persistent", "serializationVersion"];

/// Default cache backend identifier
pub const DEFAULT_CACHE: &str = "default";

/// Top-level section holding the deprecated legacy configuration
pub const LEGACY_SECTION: &str = "doctrine";

/// Deprecated key inside [`LEGACY_SECTION`] merged into `ignore`
pub const LEGACY_IGNORE_KEY: &str = "ignoredAnnotations";

/// Service id suffix for the raw reflection-based reader
pub const REFLECTION_READER_SERVICE: &str = "reflection_reader";

/// Service id suffix for the cached reader exposed to the host
pub const READER_SERVICE: &str = "reader";

/// Concrete type of the raw annotation reader
pub const ANNOTATION_READER_TYPE: &str = "AnnotationReader";

/// Port type the cached reader is exposed under
pub const READER_PORT_TYPE: &str = "Reader";

/// Concrete type of the caching decorator around the raw reader
pub const CACHED_READER_TYPE: &str = "CachedReader";

/// Setup method recorded per ignored annotation name
pub const ADD_GLOBAL_IGNORED_NAME: &str = "add_global_ignored_name";
