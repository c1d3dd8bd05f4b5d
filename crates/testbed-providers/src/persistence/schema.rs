//! Database schema document

use serde::{Deserialize, Serialize};

/// Version written into every schema document
pub const SCHEMA_VERSION: u32 = 1;

/// A table and its columns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDefinition {
    /// Table name
    pub name: String,
    /// Column names in declaration order
    pub columns: Vec<String>,
}

impl TableDefinition {
    /// Create a table definition
    pub fn new(name: &str, columns: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            columns: columns.iter().map(|c| (*c).to_string()).collect(),
        }
    }
}

/// The document stored in the database file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseSchema {
    /// Schema document version
    pub version: u32,
    /// Installed tables, empty for a database without schema
    #[serde(default)]
    pub tables: Vec<TableDefinition>,
}

impl DatabaseSchema {
    /// A schema document with no tables
    pub fn empty() -> Self {
        Self {
            version: SCHEMA_VERSION,
            tables: Vec::new(),
        }
    }
}

/// Schema installed for `create` database mode
pub fn default_schema() -> DatabaseSchema {
    DatabaseSchema {
        version: SCHEMA_VERSION,
        tables: vec![
            TableDefinition::new("nodes", &["id", "parent_id", "level", "path", "sort_order", "text"]),
            TableDefinition::new("content_types", &["node_id", "alias", "icon"]),
            TableDefinition::new("property_types", &["id", "content_type_id", "alias", "editor_alias", "mandatory"]),
            TableDefinition::new("users", &["id", "name", "email", "state"]),
            TableDefinition::new("key_value", &["key", "value", "updated"]),
            TableDefinition::new("locks", &["id", "name", "value"]),
        ],
    }
}
