//! Annotation registry - globally ignored names and loader hooks
//!
//! Process-wide state of the annotation-parsing machinery. The ignored-name
//! list is monotonic (append-only, never reverts) and loader registration
//! is idempotent per key: the first registration wins, later ones are
//! no-ops. Both contracts hold under at-least-once invocation, which is all
//! a build-time host requires.
//!
//! The registry is an injectable value rather than ambient statics, so
//! tests construct fresh instances instead of resetting shared state. The
//! runtime path that cannot inject (compiled bootstrap) goes through
//! [`AnnotationRegistry::process`].

use std::sync::{Arc, Mutex, OnceLock, PoisonError};

/// Probe deciding whether an annotation type name is resolvable
pub type LoaderProbe = fn(&str) -> bool;

/// A keyed loader hook; uniqueness is enforced by key
#[derive(Debug, Clone, Copy)]
pub struct Loader {
    /// Registration key; registering the same key twice is a no-op
    pub key: &'static str,
    /// Existence probe invoked at annotation-parse time
    pub probe: LoaderProbe,
}

/// Annotation types known at link time
///
/// Crates shipping annotation types submit their names here; the
/// [`TYPE_EXISTS`] probe answers from this table. This is the link-time
/// rendition of a class-existence autoloader hook.
#[linkme::distributed_slice]
pub static ANNOTATION_TYPES: [&'static str] = [..];

fn type_exists(name: &str) -> bool {
    ANNOTATION_TYPES.iter().any(|registered| *registered == name)
}

/// The default loader: resolves names against [`ANNOTATION_TYPES`]
pub const TYPE_EXISTS: Loader = Loader {
    key: "type_exists",
    probe: type_exists,
};

/// Process-wide annotation registry
#[derive(Debug, Default)]
pub struct AnnotationRegistry {
    ignored: Mutex<Vec<String>>,
    loaders: Mutex<Vec<Loader>>,
}

impl AnnotationRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// The shared registry of this process
    ///
    /// Hosts that can inject should prefer passing an `Arc` explicitly;
    /// this accessor exists for the compiled-bootstrap path where the
    /// configuration step does not re-run.
    pub fn process() -> Arc<Self> {
        static PROCESS: OnceLock<Arc<AnnotationRegistry>> = OnceLock::new();
        Arc::clone(PROCESS.get_or_init(|| Arc::new(Self::new())))
    }

    /// Suppress an annotation name everywhere in this process
    ///
    /// Append-only; duplicate names are harmless.
    pub fn add_global_ignored_name(&self, name: impl Into<String>) {
        self.ignored
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(name.into());
    }

    /// Whether the name is globally suppressed
    pub fn is_ignored(&self, name: &str) -> bool {
        self.ignored
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .any(|ignored| ignored == name)
    }

    /// Snapshot of the ignored names in registration order
    pub fn ignored_names(&self) -> Vec<String> {
        self.ignored
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Register a loader hook; returns whether this call installed it
    ///
    /// Idempotent per [`Loader::key`]: the first registration wins and
    /// subsequent registrations of the same key return `false`.
    pub fn register_unique_loader(&self, loader: Loader) -> bool {
        let mut loaders = self.loaders.lock().unwrap_or_else(PoisonError::into_inner);
        if loaders.iter().any(|existing| existing.key == loader.key) {
            return false;
        }
        loaders.push(loader);
        true
    }

    /// Keys of all registered loaders, in registration order
    pub fn loader_keys(&self) -> Vec<&'static str> {
        self.loaders
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|loader| loader.key)
            .collect()
    }

    /// Resolve an annotation type name through the registered loaders
    pub fn resolve(&self, name: &str) -> bool {
        self.loaders
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .any(|loader| (loader.probe)(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[linkme::distributed_slice(ANNOTATION_TYPES)]
    static TEST_ANNOTATION: &str = "TestAnnotation";

    #[test]
    fn type_exists_answers_from_the_link_time_table() {
        assert!((TYPE_EXISTS.probe)("TestAnnotation"));
        assert!(!(TYPE_EXISTS.probe)("UnknownAnnotation"));
    }

    #[test]
    fn loader_registration_is_idempotent() {
        let registry = AnnotationRegistry::new();
        assert!(registry.register_unique_loader(TYPE_EXISTS));
        assert!(!registry.register_unique_loader(TYPE_EXISTS));
        assert_eq!(registry.loader_keys(), vec!["type_exists"]);
    }

    #[test]
    fn ignored_names_append_in_order_without_dedup() {
        let registry = AnnotationRegistry::new();
        registry.add_global_ignored_name("persistent");
        registry.add_global_ignored_name("author");
        registry.add_global_ignored_name("persistent");
        assert_eq!(
            registry.ignored_names(),
            vec!["persistent", "author", "persistent"]
        );
        assert!(registry.is_ignored("author"));
        assert!(!registry.is_ignored("todo"));
    }

    #[test]
    fn resolve_consults_registered_loaders() {
        let registry = AnnotationRegistry::new();
        assert!(!registry.resolve("anything"));

        fn accept_all(_name: &str) -> bool {
            true
        }
        registry.register_unique_loader(Loader {
            key: "accept_all",
            probe: accept_all,
        });
        assert!(registry.resolve("anything"));
    }

    #[test]
    fn process_registry_is_shared() {
        let first = AnnotationRegistry::process();
        let second = AnnotationRegistry::process();
        assert!(Arc::ptr_eq(&first, &second));
    }
}
