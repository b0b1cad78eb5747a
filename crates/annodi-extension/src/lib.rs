//! # annodi-extension
//!
//! The DI integration for the external annotation reader: a single-pass,
//! build-time transform from a validated configuration into declarative
//! service records plus one idempotent process-wide side effect.
//!
//! ## Flow
//!
//! ```text
//! raw config tree → resolve_config (legacy merge + schema) → AnnotationsConfig
//!                                                                  ↓
//! AnnotationsExtension::load_configuration → ContainerBuilder records
//!                                                                  ↓
//! ContainerBuilder::build → symbolic references resolved, Container
//! ```
//!
//! The compiled-bootstrap path that does not re-run configuration goes
//! through [`AnnotationsExtension::emit_bootstrap_hook`], which prepends
//! the loader installation to the host's startup sequence.

// Linking the backend crate is what populates the CACHE_SERVICES slice
pub use annodi_providers as providers;

pub mod bootstrap;
pub mod builder;
pub mod cache;
pub mod config;
pub mod extension;

pub use annodi_domain::error::{Error, Result};
pub use bootstrap::{BootstrapSequence, InitStep};
pub use builder::{Container, ContainerBuilder};
pub use cache::{resolve_cache_service, ResolvedCache};
pub use config::{load_tree, DeprecationNotice};
pub use extension::AnnotationsExtension;
