//! Composition Pipeline
//!
//! Populates a fresh container in a fixed order. Each stage declares the
//! capabilities it needs from earlier stages; the pipeline checks them
//! before running the stage, so a reordered or skipped stage fails with the
//! name of the stage and the missing capability.
//!
//! | # | Stage | Gated by | Registers |
//! |---|-------|----------|-----------|
//! | 1 | logging | `logger` | `Logger`, `Profiler`, `ProfilingLogger` |
//! | 2 | cache | - | `AppCaches`, `RuntimeCache` |
//! | 3 | mapping | `mapping` | `MappingProfile` collection, `MappingEngine` |
//! | 4 | plugins | `force_plugin_rescan` | `PluginManager` |
//! | 5 | persistence | `database` | `DatabaseFactory` |
//! | 6 | application | `application` | file systems, settings, collections, `ServiceContext` |
//!
//! Stages gated off register disabled markers instead of leaving the
//! capability unregistered.

pub mod application_stage;
pub mod cache_stage;
pub mod logging_stage;
pub mod mapping_stage;
pub mod persistence_stage;
pub mod pipeline;
pub mod plugin_stage;
pub mod service_layer;
pub mod stage;

pub use application_stage::ApplicationStage;
pub use cache_stage::CacheStage;
pub use logging_stage::LoggingStage;
pub use mapping_stage::MappingStage;
pub use persistence_stage::PersistenceStage;
pub use pipeline::{CompositionPipeline, CompositionReport};
pub use plugin_stage::PluginStage;
pub use stage::{CompositionContext, CompositionStage};
