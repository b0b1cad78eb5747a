//! # annodi-domain
//!
//! Domain layer for the annotation-reader DI integration. This crate holds
//! the pure types shared by the providers and extension crates:
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`error`] | Error taxonomy and `Result` alias |
//! | [`config`] | Validated configuration value object |
//! | [`container`] | Declarative service records |
//! | [`ports`] | Port traits implemented by backends |
//! | [`registry`] | Process-wide annotation registry and backend registry |
//!
//! No wiring logic lives here; registration policy is in `annodi-extension`
//! and backend implementations are in `annodi-providers`.

pub mod config;
pub mod constants;
pub mod container;
pub mod error;
pub mod ports;
pub mod registry;

pub use config::AnnotationsConfig;
pub use container::{Argument, Factory, ServiceDefinition, SetupCall};
pub use error::{Error, Result};
pub use registry::loader::AnnotationRegistry;
