//! Persistence Port

use crate::error::Result;
use std::path::Path;

/// Access to the per-test database
pub trait DatabaseFactory: Send + Sync {
    /// Location of the database on disk
    fn database_path(&self) -> &Path;

    /// Table names currently defined in the schema
    fn tables(&self) -> Result<Vec<String>>;

    /// Whether a schema has been installed
    fn has_schema(&self) -> Result<bool> {
        Ok(!self.tables()?.is_empty())
    }

    /// Whether the database handle is still open
    fn is_open(&self) -> bool;
}
