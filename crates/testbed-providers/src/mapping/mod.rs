//! Mapping Profiles
//!
//! Profiles the mapping stage registers into the container. The
//! initialization step resolves all of them and builds the engine once per
//! test.

pub mod content_type;
pub mod user;

pub use content_type::{ContentTypeProfile, DEFAULT_CONTENT_TYPE_ICON};
pub use user::UserProfile;

use std::sync::Arc;
use testbed_application::ports::MappingProfile;

/// Every built-in mapping profile
pub fn default_mapping_profiles() -> Vec<Arc<dyn MappingProfile>> {
    vec![Arc::new(ContentTypeProfile), Arc::new(UserProfile)]
}
