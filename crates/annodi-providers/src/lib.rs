//! # annodi-providers
//!
//! Cache backend implementations for the annotation-reader integration.
//! Each backend implements the [`CacheStore`] port defined in
//! `annodi-domain` and registers itself into the `CACHE_SERVICES`
//! distributed slice, so it becomes resolvable by name without any
//! explicit registration call.
//!
//! Depending on this crate is what completes the registration: the
//! extension crate pulls it in so the slice is populated at link time.

pub use annodi_domain::error::{Error, Result};
pub use annodi_domain::ports::CacheStore;

/// Cache backend implementations
pub mod cache;
