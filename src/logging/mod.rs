//! # Logging
//!
//! Thin setup around `env_logger` plus the feature-targeted macros in
//! [`features`]. Library code only ever talks to the `log` facade; installing
//! a logger is left to binaries and tests.

pub mod features;

pub use features::LogFeature;

use std::sync::Once;

static TEST_INIT: Once = Once::new();

/// Parse a level name the way `RUST_LOG` spells it
pub fn parse_level(level: &str) -> Result<log::LevelFilter, LoggingError> {
    match level.to_ascii_uppercase().as_str() {
        "OFF" => Ok(log::LevelFilter::Off),
        "TRACE" => Ok(log::LevelFilter::Trace),
        "DEBUG" => Ok(log::LevelFilter::Debug),
        "INFO" => Ok(log::LevelFilter::Info),
        "WARN" => Ok(log::LevelFilter::Warn),
        "ERROR" => Ok(log::LevelFilter::Error),
        _ => Err(LoggingError::Config(format!("Invalid log level: {}", level))),
    }
}

/// Install the process logger at the given default level.
///
/// `RUST_LOG` still takes precedence for any target it names.
pub fn init_logging(default_level: &str) -> Result<(), LoggingError> {
    let level_filter = parse_level(default_level)?;
    env_logger::Builder::new()
        .filter_level(level_filter)
        .parse_default_env()
        .try_init()
        .map_err(|_| LoggingError::AlreadyInitialized)
}

/// Initialize logging for tests; safe to call from every test
pub fn init_test_logging() {
    TEST_INIT.call_once(|| {
        env_logger::builder()
            .filter_level(log::LevelFilter::Debug)
            .is_test(true)
            .try_init()
            .unwrap_or(()); // Ignore if already initialized
    });
}

/// Logging setup errors
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Logging system already initialized")]
    AlreadyInitialized,
    #[error("Configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level_is_case_insensitive() {
        assert_eq!(parse_level("debug").unwrap(), log::LevelFilter::Debug);
        assert_eq!(parse_level("WARN").unwrap(), log::LevelFilter::Warn);
        assert!(parse_level("verbose").is_err());
    }

    #[test]
    fn test_feature_targets() {
        assert_eq!(
            LogFeature::Permissions.target(),
            "resource_permissions::permissions"
        );
        assert_eq!(LogFeature::Registry.target(), "resource_permissions::registry");
        assert_eq!(LogFeature::Config.target(), "resource_permissions::config");
    }

    #[test]
    fn test_feature_macros_log_under_their_targets() {
        init_test_logging();
        crate::log_permissions_debug!("debug {}", 1);
        crate::log_permissions_info!("info {}", 2);
        crate::log_permissions_warn!("warn {}", 3);
        crate::log_registry_debug!("registry {}", 4);
        crate::log_config_info!("config {}", 5);
    }
}
