//! Domain shapes
//!
//! Source and display shapes converted by the mapping engine, plus the
//! descriptors held by the collection builders.

use serde::{Deserialize, Serialize};

/// A property on a content type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyType {
    /// Property alias
    pub alias: String,
    /// Human-readable name
    pub name: String,
    /// Alias of the property editor used to edit it
    pub editor_alias: String,
    /// Whether a value is mandatory
    pub mandatory: bool,
}

/// A content type definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentType {
    /// Unique alias
    pub alias: String,
    /// Human-readable name
    pub name: String,
    /// Icon, `None` for the default icon
    pub icon: Option<String>,
    /// Properties in display order
    pub property_types: Vec<PropertyType>,
}

/// Display shape of a property
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyTypeDisplay {
    /// Property alias
    pub alias: String,
    /// Label, mandatory properties carry a trailing `*`
    pub label: String,
    /// Editor alias
    pub editor: String,
}

/// Display shape of a content type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentTypeDisplay {
    /// Unique alias
    pub alias: String,
    /// Human-readable name
    pub name: String,
    /// Icon, never empty
    pub icon: String,
    /// Mapped properties
    pub properties: Vec<PropertyTypeDisplay>,
}

/// Account state of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserState {
    /// Can log in
    Active,
    /// Disabled by an administrator
    Disabled,
    /// Invited, never logged in
    Invited,
}

/// A back-office user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Numeric id
    pub id: i32,
    /// Full name
    pub name: String,
    /// E-mail address
    pub email: String,
    /// Account state
    pub state: UserState,
}

/// Display shape of a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDisplay {
    /// Numeric id
    pub id: i32,
    /// Full name
    pub name: String,
    /// Lowercased e-mail address
    pub email: String,
    /// Initials for the avatar
    pub initials: String,
    /// State label
    pub state: String,
}

/// A property editor known to the editor collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyEditorDescriptor {
    /// Editor alias
    pub alias: String,
    /// Human-readable name
    pub name: String,
    /// Numeric id used by legacy lookups
    pub legacy_id: Option<i32>,
}

/// A persistence mapper known to the mapper collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapperDescriptor {
    /// Entity the mapper handles
    pub entity: String,
    /// Backing table
    pub table: String,
}
