//! Buildpack acquisition and caching
//!
//! Buildpacks are arbitrary directories implementing the detect/compile/
//! release contract. This module downloads them once, caches them under a
//! name-derived md5 key, and enumerates the cache for staging runs.

pub mod fetch;
pub mod registry;
pub mod store;

pub use registry::{list, Buildpack};
pub use store::{buildpack_name_from_url, cache_key, AddOutcome, BuildpackStore};
