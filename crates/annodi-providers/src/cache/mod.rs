//! Cache backend implementations
//!
//! ## Available backends
//!
//! | Backend | Name | Description |
//! |---------|------|-------------|
//! | [`MemoryCacheStore`] | `memory`, `default` | Process-local in-memory store |
//! | [`VoidCacheStore`] | `void` | No-op stub, disables caching |
//!
//! `default` is an alias onto the memory backend: it is what the host gets
//! when it configures nothing. `void` is useful for tests and for hosts
//! that want the cached-reader wiring without actual memoization.

pub mod memory;
pub mod void;

pub use memory::MemoryCacheStore;
pub use void::VoidCacheStore;
