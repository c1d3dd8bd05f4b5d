//! Inert file system stand-in

use std::path::Path;
use testbed_domain::error::{Error, Result};
use testbed_domain::ports::FileSystem;

/// File system that never touches the disk
#[derive(Debug, Clone, Copy, Default)]
pub struct NullFileSystem;

impl NullFileSystem {
    /// Create a new stand-in
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for NullFileSystem {
    fn root(&self) -> Option<&Path> {
        None
    }

    fn add_file(&self, _path: &str, _contents: &[u8]) -> Result<()> {
        Ok(())
    }

    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        Err(Error::not_found(path))
    }

    fn file_exists(&self, _path: &str) -> bool {
        false
    }

    fn files(&self) -> Result<Vec<String>> {
        Ok(Vec::new())
    }

    fn delete_file(&self, _path: &str) -> Result<()> {
        Ok(())
    }
}
