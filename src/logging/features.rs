//! Feature-specific logging macros
//!
//! Each feature logs under its own target so output can be filtered with
//! `RUST_LOG`, e.g. `RUST_LOG=resource_permissions::permissions=debug`.

/// Feature categories for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFeature {
    Permissions,
    Registry,
    Config,
}

impl LogFeature {
    /// Get the target string for this feature
    pub fn target(&self) -> &'static str {
        match self {
            LogFeature::Permissions => "resource_permissions::permissions",
            LogFeature::Registry => "resource_permissions::registry",
            LogFeature::Config => "resource_permissions::config",
        }
    }
}

// Permission resolution logging macros
#[macro_export]
macro_rules! log_permissions_debug {
    ($($arg:tt)*) => {
        log::debug!(target: $crate::logging::LogFeature::Permissions.target(), $($arg)*)
    };
}

#[macro_export]
macro_rules! log_permissions_info {
    ($($arg:tt)*) => {
        log::info!(target: $crate::logging::LogFeature::Permissions.target(), $($arg)*)
    };
}

#[macro_export]
macro_rules! log_permissions_warn {
    ($($arg:tt)*) => {
        log::warn!(target: $crate::logging::LogFeature::Permissions.target(), $($arg)*)
    };
}

// Registry construction logging macros
#[macro_export]
macro_rules! log_registry_debug {
    ($($arg:tt)*) => {
        log::debug!(target: $crate::logging::LogFeature::Registry.target(), $($arg)*)
    };
}

#[macro_export]
macro_rules! log_registry_error {
    ($($arg:tt)*) => {
        log::error!(target: $crate::logging::LogFeature::Registry.target(), $($arg)*)
    };
}

// Table loading logging macros
#[macro_export]
macro_rules! log_config_info {
    ($($arg:tt)*) => {
        log::info!(target: $crate::logging::LogFeature::Config.target(), $($arg)*)
    };
}

#[macro_export]
macro_rules! log_config_warn {
    ($($arg:tt)*) => {
        log::warn!(target: $crate::logging::LogFeature::Config.target(), $($arg)*)
    };
}
