//! Options catalog
//!
//! Where fixture and method options are declared. A catalog is either built
//! in code or loaded from a TOML document:
//!
//! ```toml
//! [fixtures.ContentServiceTests]
//! mapping = true
//! database = "create"
//!
//! [fixtures.ContentServiceTests.methods.saves_without_database]
//! database = "none"
//! ```

use super::options::TestOptionsOverride;
use crate::error_ext::ErrorContext;
use figment::Figment;
use figment::providers::{Format, Toml};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use testbed_domain::error::{Error, Result};

/// Anything the resolver can read declared options from
pub trait OptionsSource: Send + Sync {
    /// Options declared on the fixture
    fn fixture_options(&self, fixture: &str) -> Option<TestOptionsOverride>;

    /// Options declared on one method of the fixture
    fn method_options(&self, fixture: &str, method: &str) -> Option<TestOptionsOverride>;
}

/// Options of one fixture and its methods
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureOptions {
    /// Fixture-level options
    #[serde(flatten)]
    pub options: TestOptionsOverride,

    /// Method-level options by method name
    #[serde(default)]
    pub methods: HashMap<String, TestOptionsOverride>,
}

/// In-memory options source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionsCatalog {
    #[serde(default)]
    fixtures: HashMap<String, FixtureOptions>,
}

impl OptionsCatalog {
    /// Empty catalog; every test resolves to the defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare fixture-level options
    pub fn with_fixture(mut self, fixture: &str, options: TestOptionsOverride) -> Self {
        self.fixtures.entry(fixture.to_string()).or_default().options = options;
        self
    }

    /// Declare method-level options
    pub fn with_method(mut self, fixture: &str, method: &str, options: TestOptionsOverride) -> Self {
        self.fixtures
            .entry(fixture.to_string())
            .or_default()
            .methods
            .insert(method.to_string(), options);
        self
    }

    /// Parse a catalog from a TOML document
    pub fn from_toml_str(document: &str) -> Result<Self> {
        Figment::from(Toml::string(document))
            .extract()
            .config_context("Failed to parse options document")
    }

    /// Load a catalog from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::configuration(format!(
                "Options file not found: {}",
                path.display()
            )));
        }
        Figment::from(Toml::file(path))
            .extract()
            .config_context(format!("Failed to load options from {}", path.display()))
    }

    /// Names of the fixtures with declared options
    pub fn fixture_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.fixtures.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl OptionsSource for OptionsCatalog {
    fn fixture_options(&self, fixture: &str) -> Option<TestOptionsOverride> {
        self.fixtures.get(fixture).map(|f| f.options)
    }

    fn method_options(&self, fixture: &str, method: &str) -> Option<TestOptionsOverride> {
        self.fixtures
            .get(fixture)
            .and_then(|f| f.methods.get(method))
            .copied()
    }
}
