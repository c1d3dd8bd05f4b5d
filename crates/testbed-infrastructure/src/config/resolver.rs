//! Configuration resolver
//!
//! Merges fixture-level and method-level options into the effective options
//! of one test. Method values win; fields unset at both levels fall back to
//! the global defaults.

use super::catalog::OptionsSource;
use super::options::TestOptions;
use testbed_domain::error::{Error, Result};
use tracing::debug;

/// Which test is about to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestIdentity {
    /// Fixture (test class) name
    pub fixture: String,
    /// Method (test) name, `None` when the runner could not provide one
    pub method: Option<String>,
}

impl TestIdentity {
    /// Identity of `method` in `fixture`
    pub fn new(fixture: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            fixture: fixture.into(),
            method: Some(method.into()),
        }
    }

    /// Identity without a method name
    pub fn fixture_only(fixture: impl Into<String>) -> Self {
        Self {
            fixture: fixture.into(),
            method: None,
        }
    }
}

/// Resolve the effective options of `identity`
///
/// A blank fixture or a missing method name is a setup error.
pub fn resolve_options(identity: &TestIdentity, source: &dyn OptionsSource) -> Result<TestOptions> {
    if identity.fixture.trim().is_empty() {
        return Err(Error::configuration(
            "Cannot resolve test options: fixture name is empty",
        ));
    }
    let method = identity
        .method
        .as_deref()
        .filter(|m| !m.trim().is_empty())
        .ok_or_else(|| {
            Error::configuration(format!(
                "Cannot resolve test options for fixture '{}': method name is missing",
                identity.fixture
            ))
        })?;

    let fixture_level = source.fixture_options(&identity.fixture).unwrap_or_default();
    let method_level = source
        .method_options(&identity.fixture, method)
        .unwrap_or_default();
    let options = method_level.over(fixture_level).resolve();

    debug!(
        fixture = %identity.fixture,
        method,
        ?options,
        "Resolved test options"
    );
    Ok(options)
}
