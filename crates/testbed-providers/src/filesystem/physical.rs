//! Physical file system
//!
//! Stores files under a root directory. Relative paths use `/` separators
//! regardless of platform; paths escaping the root are rejected.

use std::path::{Component, Path, PathBuf};
use testbed_domain::error::{Error, Result};
use testbed_domain::ports::FileSystem;
use walkdir::WalkDir;

/// File system rooted in a directory on disk
#[derive(Debug, Clone)]
pub struct PhysicalFileSystem {
    root: PathBuf,
}

impl PhysicalFileSystem {
    /// Create a file system rooted at `root`
    ///
    /// The directory is not created until the first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn full_path(&self, path: &str) -> Result<PathBuf> {
        let relative = Path::new(path);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes || path.is_empty() {
            return Err(Error::io(format!(
                "Path '{path}' is not relative to {}",
                self.root.display()
            )));
        }
        Ok(self.root.join(relative))
    }
}

impl FileSystem for PhysicalFileSystem {
    fn root(&self) -> Option<&Path> {
        Some(&self.root)
    }

    fn add_file(&self, path: &str, contents: &[u8]) -> Result<()> {
        let full = self.full_path(path)?;
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                Error::io_with_source(format!("Failed to create {}", parent.display()), e)
            })?;
        }
        std::fs::write(&full, contents)
            .map_err(|e| Error::io_with_source(format!("Failed to write {}", full.display()), e))
    }

    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full = self.full_path(path)?;
        std::fs::read(&full).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::not_found(path),
            _ => Error::io_with_source(format!("Failed to read {}", full.display()), e),
        })
    }

    fn file_exists(&self, path: &str) -> bool {
        self.full_path(path).is_ok_and(|full| full.is_file())
    }

    fn files(&self) -> Result<Vec<String>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&self.root) {
            let entry = entry.map_err(|e| {
                Error::io_with_source(format!("Failed to walk {}", self.root.display()), e)
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            if let Ok(relative) = entry.path().strip_prefix(&self.root) {
                let parts: Vec<String> = relative
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy().into_owned())
                    .collect();
                files.push(parts.join("/"));
            }
        }
        files.sort();
        Ok(files)
    }

    fn delete_file(&self, path: &str) -> Result<()> {
        let full = self.full_path(path)?;
        match std::fs::remove_file(&full) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::io_with_source(
                format!("Failed to delete {}", full.display()),
                e,
            )),
        }
    }
}
