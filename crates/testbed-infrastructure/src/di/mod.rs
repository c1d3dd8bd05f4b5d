//! Capability Container
//!
//! ```text
//! ContainerLifecycle (process-wide slot, at most one live container)
//!     |
//!     v
//! Container
//!     +-- registrations: CapabilityKey -> Instance | Lazy | Factory | Disabled
//!     +-- collections:   CapabilityKey -> [instances]
//!     +-- disposables:   released in reverse order on dispose
//!     +-- overrides:     explicit replacements, for diagnostics
//! ```
//!
//! Capabilities are keyed by the type identity of their contract plus an
//! optional name qualifier, so several file systems can be registered under
//! `dyn FileSystem` with different roles.

pub mod container;
pub mod lifecycle;

pub use container::{CapabilityKey, Container, OverrideRecord, RegistrationKind};
pub use lifecycle::ContainerLifecycle;
