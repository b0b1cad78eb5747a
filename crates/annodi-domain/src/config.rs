//! Validated configuration value object

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CACHE, DEFAULT_IGNORED_ANNOTATIONS};

/// Effective configuration of the annotations extension
///
/// Produced by schema validation in `annodi-extension`; immutable once
/// validated. The `debug` default comes from the hosting environment's
/// debug flag, so [`Default`] uses `false` and hosts go through
/// [`AnnotationsConfig::with_debug`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationsConfig {
    /// Annotation names globally suppressed from parsing
    pub ignore: Vec<String>,
    /// Identifier passed to the cache backend registry
    pub cache: String,
    /// Weakens caching when true; policy lives in the cached reader
    pub debug: bool,
}

impl AnnotationsConfig {
    /// Default configuration with the given host debug flag
    pub fn with_debug(debug: bool) -> Self {
        Self {
            debug,
            ..Self::default()
        }
    }

    /// The default `ignore` list as owned strings
    pub fn default_ignore() -> Vec<String> {
        DEFAULT_IGNORED_ANNOTATIONS
            .iter()
            .map(|name| (*name).to_string())
            .collect()
    }
}

impl Default for AnnotationsConfig {
    fn default() -> Self {
        Self {
            ignore: Self::default_ignore(),
            cache: DEFAULT_CACHE.to_string(),
            debug: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_declared_schema() {
        let config = AnnotationsConfig::default();
        assert_eq!(config.ignore, vec!["persistent", "serializationVersion"]);
        assert_eq!(config.cache, "default");
        assert!(!config.debug);
    }

    #[test]
    fn with_debug_only_touches_debug() {
        let config = AnnotationsConfig::with_debug(true);
        assert!(config.debug);
        assert_eq!(config.ignore, AnnotationsConfig::default().ignore);
    }
}
