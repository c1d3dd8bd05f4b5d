//! Context for foreign errors
//!
//! Lifts `std::io`, figment and serializer errors into the domain error
//! while naming the file or document involved.

use std::fmt::Display;
use testbed_domain::error::{Error, Result};

/// Attach a message to a foreign error and convert it
///
/// ```ignore
/// std::fs::write(&settings_file, document)
///     .io_context(format!("Failed to write {}", settings_file.display()))?;
/// ```
pub trait ErrorContext<T> {
    /// Convert into [`Error::Internal`]
    fn context(self, message: impl Display) -> Result<T>;

    /// Convert into [`Error::Io`], keeping the source
    fn io_context(self, message: impl Display) -> Result<T>;

    /// Convert into [`Error::Configuration`], keeping the source
    fn config_context(self, message: impl Display) -> Result<T>;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, message: impl Display) -> Result<T> {
        self.map_err(|err| Error::internal(format!("{message}: {err}")))
    }

    fn io_context(self, message: impl Display) -> Result<T> {
        self.map_err(|err| Error::io_with_source(format!("{message}: {err}"), err))
    }

    fn config_context(self, message: impl Display) -> Result<T> {
        self.map_err(|err| Error::configuration_with_source(format!("{message}: {err}"), err))
    }
}
