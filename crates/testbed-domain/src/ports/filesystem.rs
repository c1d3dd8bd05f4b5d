//! File System Port
//!
//! Several roles share this contract and are told apart by a name
//! qualifier in the container (see [`crate::constants`]).

use crate::error::Result;
use std::path::Path;

/// A file store rooted somewhere (or nowhere, for stand-ins)
pub trait FileSystem: Send + Sync {
    /// On-disk root, `None` for stand-ins that never touch the disk
    fn root(&self) -> Option<&Path>;

    /// Write a file, creating parent directories as needed
    fn add_file(&self, path: &str, contents: &[u8]) -> Result<()>;

    /// Read a file
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;

    /// Whether a file exists
    fn file_exists(&self, path: &str) -> bool;

    /// Relative paths of every stored file
    fn files(&self) -> Result<Vec<String>>;

    /// Delete a file; deleting a missing file is not an error
    fn delete_file(&self, path: &str) -> Result<()>;
}
