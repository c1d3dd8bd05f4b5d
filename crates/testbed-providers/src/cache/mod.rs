//! Cache Provider Implementations
//!
//! Only a disabled cache exists here: a test must never read a value a
//! previous test cached.

pub mod null;

pub use null::{NoAppCache, disabled_app_caches};
