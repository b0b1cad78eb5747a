//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the annotation DI integration
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration does not match the declared schema
    #[error("Schema error at '{path}': {message}")]
    Schema {
        /// Path of the offending option (e.g. `ignore[2]`)
        path: String,
        /// Description of the schema violation
        message: String,
    },

    /// Cache identifier not known to the backend registry
    #[error("Unknown cache backend '{name}'. Available backends: {available:?}")]
    UnknownCache {
        /// The requested backend name
        name: String,
        /// Names of all registered backends
        available: Vec<String>,
    },

    /// A service with the same identifier is already registered
    #[error("Service '{id}' is already registered")]
    DuplicateService {
        /// The conflicting service identifier
        id: String,
    },

    /// A symbolic service reference points at no registered definition
    #[error("Service '{service}' references unknown service '{reference}'")]
    UnresolvedReference {
        /// The dangling reference target
        reference: String,
        /// The service holding the reference
        service: String,
    },

    /// Configuration tree ingestion error
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl Error {
    /// Create a schema error
    pub fn schema<P: Into<String>, S: Into<String>>(path: P, message: S) -> Self {
        Self::Schema {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an unknown cache backend error
    pub fn unknown_cache<S: Into<String>>(name: S, available: Vec<String>) -> Self {
        Self::UnknownCache {
            name: name.into(),
            available,
        }
    }

    /// Create a duplicate service error
    pub fn duplicate_service<S: Into<String>>(id: S) -> Self {
        Self::DuplicateService { id: id.into() }
    }

    /// Create an unresolved reference error
    pub fn unresolved_reference<R: Into<String>, S: Into<String>>(
        reference: R,
        service: S,
    ) -> Self {
        Self::UnresolvedReference {
            reference: reference.into(),
            service: service.into(),
        }
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn config_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
