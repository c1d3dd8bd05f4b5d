//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the test environment lifecycle
///
/// Every fatal variant names the stage, step or resource responsible so a
/// failing set-up never surfaces as a generic failure.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (simple form)
    #[error("I/O error: {source}")]
    IoSimple {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// I/O operation error (with context)
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Configuration-related error, including unresolvable test identities
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A composition stage needed a capability no earlier stage registered
    #[error("Composition stage '{stage}' requires '{capability}', which no earlier stage registered")]
    CompositionOrder {
        /// Stage that declared the requirement
        stage: String,
        /// Missing capability
        capability: String,
    },

    /// A composition stage failed while registering capabilities
    #[error("Composition stage '{stage}' failed: {source}")]
    Stage {
        /// Stage name
        stage: String,
        /// Underlying failure
        #[source]
        source: Box<Error>,
    },

    /// An initialization step failed
    #[error("Initialization step '{step}' failed: {source}")]
    Initialization {
        /// Step name
        step: String,
        /// Underlying failure
        #[source]
        source: Box<Error>,
    },

    /// A container was created while another one was still live
    #[error("Container {id} is still live; it must be disposed before another container is created")]
    ContainerAlreadyLive {
        /// Identifier of the live container
        id: String,
    },

    /// The container was used after disposal
    #[error("Container {id} has been disposed")]
    ContainerDisposed {
        /// Identifier of the disposed container
        id: String,
    },

    /// Registration attempted after the container was sealed
    #[error("Container {id} is sealed; '{capability}' cannot be registered after initialization")]
    ContainerSealed {
        /// Identifier of the sealed container
        id: String,
        /// Capability that was being registered
        capability: String,
    },

    /// Resolution of a capability nobody registered
    #[error("Capability '{capability}' is not registered")]
    CapabilityNotRegistered {
        /// Missing capability
        capability: String,
    },

    /// Resolution of a capability intentionally absent for the running test
    #[error("Capability '{capability}' is disabled for this test: {reason}")]
    CapabilityDisabled {
        /// Disabled capability
        capability: String,
        /// Why it is absent
        reason: String,
    },

    /// The same capability key was registered twice without an explicit override
    #[error("Capability '{capability}' is already registered; use an explicit replacement to override it")]
    DuplicateRegistration {
        /// Capability registered twice
        capability: String,
    },

    /// Mapping engine configuration or execution error
    #[error("Mapping error: {message}")]
    Mapping {
        /// Description of the mapping error
        message: String,
    },

    /// Resource not found error
    #[error("Not found: {resource}")]
    NotFound {
        /// The resource that was not found
        resource: String,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Basic error creation methods
impl Error {
    /// Create a not found error
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Create a mapping error
    pub fn mapping<S: Into<String>>(message: S) -> Self {
        Self::Mapping {
            message: message.into(),
        }
    }
}

// I/O error creation methods
impl Error {
    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Lifecycle error creation methods
impl Error {
    /// Wrap a failure with the composition stage that produced it
    pub fn stage<S: Into<String>>(stage: S, source: Error) -> Self {
        Self::Stage {
            stage: stage.into(),
            source: Box::new(source),
        }
    }

    /// Wrap a failure with the initialization step that produced it
    pub fn initialization<S: Into<String>>(step: S, source: Error) -> Self {
        Self::Initialization {
            step: step.into(),
            source: Box::new(source),
        }
    }

    /// Create a disabled capability error
    pub fn capability_disabled<C: Into<String>, R: Into<String>>(capability: C, reason: R) -> Self {
        Self::CapabilityDisabled {
            capability: capability.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error (or the error it wraps) reports an intentionally absent capability
    pub fn is_capability_disabled(&self) -> bool {
        match self {
            Self::CapabilityDisabled { .. } => true,
            Self::Stage { source, .. } | Self::Initialization { source, .. } => {
                source.is_capability_disabled()
            }
            _ => false,
        }
    }
}
