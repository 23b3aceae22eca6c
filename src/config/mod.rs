//! Configuration for action tables
//!
//! The built-in table needs no configuration. A replacement table can be read
//! from a TOML or JSON file through [`RegistryConfig`].

pub mod registry_config;

pub use registry_config::RegistryConfig;
