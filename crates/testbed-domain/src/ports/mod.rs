//! Capability Ports
//!
//! Contracts a test container wires. Implementations live in
//! `testbed-providers`; each port has at least one inert stand-in and,
//! where a test needs real side effects, a real-backed variant.
//!
//! | Port | Stand-in | Real-backed |
//! |------|----------|-------------|
//! | [`Logger`] | `NullLogger`, `MockLogger` | `FileLogger` |
//! | [`Profiler`] | `VoidProfiler` | `LogProfiler` |
//! | [`RuntimeCache`] | `NoAppCache` | - |
//! | [`FileSystem`] | `NullFileSystem` | `PhysicalFileSystem` |
//! | [`DatabaseFactory`] | - | `FileDatabaseFactory` |

pub mod cache;
pub mod content;
pub mod filesystem;
pub mod lifecycle;
pub mod logging;
pub mod persistence;

pub use cache::{AppCaches, RuntimeCache};
pub use content::{PublishedModelFactory, UrlSegmentProvider};
pub use filesystem::FileSystem;
pub use lifecycle::Disposable;
pub use logging::{LogLevel, Logger, Profiler};
pub use persistence::DatabaseFactory;
