//! Virtual path resolution
//!
//! Virtual paths (`~/css`) resolve against a base directory. Tests override
//! the base with their fixture working directory; without an override the
//! current directory is used.

use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

static BASE_OVERRIDE: RwLock<Option<PathBuf>> = RwLock::new(None);

/// Override the base directory
pub fn set_base(base: impl Into<PathBuf>) {
    *BASE_OVERRIDE
        .write()
        .unwrap_or_else(PoisonError::into_inner) = Some(base.into());
}

/// The override, if set
pub fn base_override() -> Option<PathBuf> {
    BASE_OVERRIDE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// The effective base directory
pub fn base() -> PathBuf {
    base_override()
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Resolve `virtual_path` against the effective base
///
/// Leading `~` and `/` are stripped; remaining segments are joined onto the
/// base one by one.
pub fn map(virtual_path: &str) -> PathBuf {
    map_onto(&base(), virtual_path)
}

fn map_onto(base: &Path, virtual_path: &str) -> PathBuf {
    virtual_path
        .trim_start_matches('~')
        .split(['/', '\\'])
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .fold(base.to_path_buf(), |path, segment| path.join(segment))
}

/// Remove the override
pub fn reset() {
    *BASE_OVERRIDE
        .write()
        .unwrap_or_else(PoisonError::into_inner) = None;
}
