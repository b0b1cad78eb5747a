//! Port traits implemented by backend crates

pub mod cache;

pub use cache::CacheStore;
