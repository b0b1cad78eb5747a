//! The annotations extension
//!
//! Translates a validated configuration into exactly two reader records
//! (raw reflection reader + cached decorator) plus the cache backend
//! record, applies the immediate process-wide suppressions, and installs
//! the global loader. Registration is all-or-nothing: every fallible step
//! runs before any record is committed to the builder.

use std::sync::Arc;

use serde_json::Value;
use tracing::info;

use annodi_domain::config::AnnotationsConfig;
use annodi_domain::constants::{
    ADD_GLOBAL_IGNORED_NAME, ANNOTATION_READER_TYPE, CACHED_READER_TYPE, READER_PORT_TYPE,
    READER_SERVICE, REFLECTION_READER_SERVICE,
};
use annodi_domain::container::{Argument, ServiceDefinition};
use annodi_domain::error::{Error, Result};
use annodi_domain::registry::loader::TYPE_EXISTS;
use annodi_domain::AnnotationRegistry;

use crate::bootstrap::BootstrapSequence;
use crate::builder::ContainerBuilder;
use crate::cache::resolve_cache_service;
use crate::config::{self, DeprecationNotice};

/// DI extension registering the annotation reader services
pub struct AnnotationsExtension {
    name: String,
    debug_mode: bool,
    registry: Arc<AnnotationRegistry>,
}

impl AnnotationsExtension {
    /// Create the extension against the process-wide annotation registry
    pub fn new(debug_mode: bool) -> Self {
        Self::with_registry(debug_mode, AnnotationRegistry::process())
    }

    /// Create the extension with an explicit registry
    ///
    /// Tests and hosts with their own lifecycle inject a fresh registry
    /// here instead of sharing the process-wide one.
    pub fn with_registry(debug_mode: bool, registry: Arc<AnnotationRegistry>) -> Self {
        Self {
            name: "annotations".to_string(),
            debug_mode,
            registry,
        }
    }

    /// Extension name; all service ids are prefixed with it
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The annotation registry this extension mutates
    pub fn registry(&self) -> &Arc<AnnotationRegistry> {
        &self.registry
    }

    /// Prefix a service id suffix with the extension name
    pub fn prefix(&self, suffix: &str) -> String {
        format!("{}.{}", self.name, suffix)
    }

    /// Resolve the effective configuration from the raw sections
    ///
    /// `local` is the extension's own section, `global` the full
    /// application tree (consulted only for the deprecated
    /// `doctrine.ignoredAnnotations` path).
    pub fn resolve_config(
        &self,
        local: &Value,
        global: &Value,
    ) -> Result<(AnnotationsConfig, Vec<DeprecationNotice>)> {
        config::resolve_config(&self.name, local, global, self.debug_mode)
    }

    /// Register the reader services for the given configuration
    ///
    /// Produces exactly one raw-reader record and one cached-reader record
    /// per invocation, deterministic for equal input. Each ignored name is
    /// both recorded as a setup call on the raw reader (re-applied on every
    /// construction) and applied immediately to the annotation registry,
    /// because some code paths consult the registry before the container
    /// finishes building.
    ///
    /// # Errors
    ///
    /// Fails without touching the builder when a reader service id is
    /// already taken or the cache backend is unknown.
    pub fn load_configuration(
        &self,
        builder: &mut ContainerBuilder,
        config: &AnnotationsConfig,
    ) -> Result<()> {
        let reflection_id = self.prefix(REFLECTION_READER_SERVICE);
        let reader_id = self.prefix(READER_SERVICE);
        for id in [&reflection_id, &reader_id] {
            if builder.contains(id) {
                return Err(Error::duplicate_service(id.clone()));
            }
        }

        let mut reflection =
            ServiceDefinition::new(&reflection_id, ANNOTATION_READER_TYPE).with_autowired(false);
        for name in &config.ignore {
            reflection.add_setup(ADD_GLOBAL_IGNORED_NAME, vec![Argument::str(name)]);
            self.registry.add_global_ignored_name(name);
        }

        let cache =
            resolve_cache_service(builder, &self.name, &config.cache, &self.name, config.debug)?;

        let reader = ServiceDefinition::new(&reader_id, READER_PORT_TYPE).with_factory(
            CACHED_READER_TYPE,
            vec![
                Argument::reference(&reflection_id),
                cache.reference,
                Argument::Bool(config.debug),
            ],
        );

        // every fallible step is behind us; commit the records together
        builder.add_definition(reflection)?;
        if let Some(definition) = cache.definition {
            builder.add_definition(definition)?;
        }
        builder.add_definition(reader)?;

        // for runtime
        self.install_global_loader();

        info!(
            ignored = config.ignore.len(),
            cache = %config.cache,
            debug = config.debug,
            "registered annotation reader services"
        );
        Ok(())
    }

    /// Install the global loader hook; returns whether this call did it
    ///
    /// Idempotent: invoked both at configuration time and again by the
    /// bootstrap step emitted for the compiled production path.
    pub fn install_global_loader(&self) -> bool {
        self.registry.register_unique_loader(TYPE_EXISTS)
    }

    /// Prepend the loader installation to an existing startup routine
    ///
    /// The returned sequence runs the loader installation first, then every
    /// step of `existing` in its original order.
    pub fn emit_bootstrap_hook(&self, existing: BootstrapSequence) -> BootstrapSequence {
        let registry = Arc::clone(&self.registry);
        let mut sequence = BootstrapSequence::new();
        sequence.push(self.prefix("install_loader"), move || {
            registry.register_unique_loader(TYPE_EXISTS);
        });
        sequence.extend(existing);
        sequence
    }
}

impl std::fmt::Debug for AnnotationsExtension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnnotationsExtension")
            .field("name", &self.name)
            .field("debug_mode", &self.debug_mode)
            .finish_non_exhaustive()
    }
}
