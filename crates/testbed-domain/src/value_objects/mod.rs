//! Value Objects

pub mod content;
pub mod plugin;
pub mod settings;

pub use content::{
    ContentType, ContentTypeDisplay, MapperDescriptor, PropertyEditorDescriptor, PropertyType,
    PropertyTypeDisplay, User, UserDisplay, UserState,
};
pub use plugin::PluginKind;
pub use settings::Settings;
