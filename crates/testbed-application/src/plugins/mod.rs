//! Plugin discovery

pub mod manager;

pub use manager::PluginManager;
