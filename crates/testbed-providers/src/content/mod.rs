//! Content Providers
//!
//! URL segments, the published model factory stand-in, the built-in
//! persistence mappers and the discoverable component types this crate
//! registers.

pub mod mappers;
pub mod model_factory;
pub mod plugin_types;
pub mod url_segment;

pub use mappers::core_mappers;
pub use model_factory::NoopPublishedModelFactory;
pub use url_segment::DefaultUrlSegmentProvider;
