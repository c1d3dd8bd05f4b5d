//! File-backed database factory
//!
//! Owns an open handle on the database file for as long as the container
//! lives. Disposing the factory closes the handle; afterwards the file can
//! be deleted by the environment cleanup.

use super::schema::DatabaseSchema;
use std::fs::File;
use std::io::{BufReader, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use testbed_domain::error::{Error, Result};
use testbed_domain::ports::{DatabaseFactory, Disposable};
use tracing::debug;

/// Database stored as a schema document in a single file
pub struct FileDatabaseFactory {
    path: PathBuf,
    handle: Mutex<Option<File>>,
}

impl FileDatabaseFactory {
    /// Create the database file with `schema` installed and open it
    ///
    /// An existing file at `path` is overwritten.
    pub fn create_with_schema(path: &Path, schema: &DatabaseSchema) -> Result<Self> {
        Self::write_document(path, schema)?;
        debug!(path = %path.display(), tables = schema.tables.len(), "Created database with schema");
        Self::open(path)
    }

    /// Create an empty database file and open it
    pub fn create_empty(path: &Path) -> Result<Self> {
        Self::write_document(path, &DatabaseSchema::empty())?;
        debug!(path = %path.display(), "Created empty database");
        Self::open(path)
    }

    /// Open an existing database file
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| {
            Error::io_with_source(format!("Failed to open database {}", path.display()), e)
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            handle: Mutex::new(Some(file)),
        })
    }

    fn write_document(path: &Path, schema: &DatabaseSchema) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                Error::io_with_source(format!("Failed to create {}", parent.display()), e)
            })?;
        }
        let json = serde_json::to_vec_pretty(schema)?;
        std::fs::write(path, json).map_err(|e| {
            Error::io_with_source(format!("Failed to write database {}", path.display()), e)
        })
    }

    /// Read the schema document through the open handle
    pub fn schema(&self) -> Result<DatabaseSchema> {
        let mut guard = self.handle.lock().unwrap_or_else(PoisonError::into_inner);
        let file = guard.as_mut().ok_or_else(|| {
            Error::io(format!("Database {} is closed", self.path.display()))
        })?;
        file.seek(SeekFrom::Start(0))?;
        let schema = serde_json::from_reader(BufReader::new(&*file))?;
        Ok(schema)
    }
}

impl DatabaseFactory for FileDatabaseFactory {
    fn database_path(&self) -> &Path {
        &self.path
    }

    fn tables(&self) -> Result<Vec<String>> {
        Ok(self
            .schema()?
            .tables
            .into_iter()
            .map(|table| table.name)
            .collect())
    }

    fn is_open(&self) -> bool {
        self.handle
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}

impl Disposable for FileDatabaseFactory {
    fn dispose(&self) -> Result<()> {
        let handle = self
            .handle
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if handle.is_some() {
            debug!(path = %self.path.display(), "Closed database");
        }
        Ok(())
    }

    fn resource_name(&self) -> &str {
        "database"
    }
}

impl std::fmt::Debug for FileDatabaseFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileDatabaseFactory")
            .field("path", &self.path)
            .field("open", &self.is_open())
            .finish()
    }
}
