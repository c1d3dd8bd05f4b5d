//! File System Provider Implementations
//!
//! | Provider | Root | Description |
//! |----------|------|-------------|
//! | [`PhysicalFileSystem`] | Directory on disk | Real reads and writes |
//! | [`NullFileSystem`] | None | Writes dropped, reads report not found |
//!
//! The media role always gets the stand-in; the script, stylesheet and
//! partial view roles get physical stores under the test's working
//! directory.

pub mod null;
pub mod physical;

pub use null::NullFileSystem;
pub use physical::PhysicalFileSystem;
