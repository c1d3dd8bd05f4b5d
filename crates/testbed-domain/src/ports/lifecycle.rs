//! Resource ownership port

use crate::error::Result;

/// A singleton that holds resources which must be released when its
/// container is disposed (file handles, flush guards, connections)
pub trait Disposable: Send + Sync {
    /// Release owned resources. Calling this twice must be harmless.
    fn dispose(&self) -> Result<()>;

    /// Resource name for diagnostics
    fn resource_name(&self) -> &str;
}
