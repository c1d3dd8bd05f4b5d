//! Logger and Profiler Implementations
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | [`NullLogger`] | Disabled | Every level disabled, nothing written |
//! | [`MockLogger`] | Stand-in | Every level enabled, nothing recorded |
//! | [`FileLogger`] | Real | Writes through `tracing` into a log file |
//! | [`VoidProfiler`] | Stand-in | Records nothing |
//! | [`LogProfiler`] | Real | Writes timings through a logger |

pub mod file;
pub mod mock;
pub mod null;
pub mod profiler;

pub use file::FileLogger;
pub use mock::MockLogger;
pub use null::NullLogger;
pub use profiler::{LogProfiler, VoidProfiler};
