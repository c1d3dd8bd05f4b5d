//! Persistence Provider Implementations
//!
//! The per-test database is a JSON document on disk holding the installed
//! schema. A test either gets a freshly installed schema, an empty database
//! or no database at all; the mode is decided by the test options.

pub mod file_database;
pub mod schema;

pub use file_database::FileDatabaseFactory;
pub use schema::{DatabaseSchema, SCHEMA_VERSION, TableDefinition, default_schema};
