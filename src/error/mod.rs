//! Error types for building and loading action registries
//!
//! Queries against a registry never fail. Everything here is raised while a
//! table is being constructed or read from disk, and indicates a defect in the
//! table rather than bad caller input.

/// Errors raised while building or loading an action registry
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// A bit value does not have exactly one bit set
    #[error("Action {action} of {resource_type} has bit value {bit_value}, which is not a power of two")]
    NotPowerOfTwo {
        resource_type: String,
        action: String,
        bit_value: u64,
    },

    /// A bit value above the highest bit a table may use
    #[error("Action {action} of {resource_type} has bit value {bit_value}, above the maximum of {max}")]
    BitOutOfRange {
        resource_type: String,
        action: String,
        bit_value: u64,
        max: u64,
    },

    /// Two actions of one resource type share a bit position
    #[error("Actions {existing} and {duplicate} of {resource_type} share bit value {bit_value}")]
    DuplicateBit {
        resource_type: String,
        existing: String,
        duplicate: String,
        bit_value: u64,
    },

    /// A record with an empty resource type or action name
    #[error("Invalid action record {id}: {message}")]
    InvalidRecord { id: u64, message: String },

    /// An action name that the resource type does not declare
    #[error("Unknown action {action} for {resource_type}")]
    UnknownAction {
        resource_type: String,
        action: String,
    },

    /// IO errors while reading a table file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML table parsing errors
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML table serialization errors
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// JSON table parsing errors
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors that fit no other variant
    #[error("Configuration error: {0}")]
    Config(String),
}

impl RegistryError {
    /// Create a configuration error with context
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create an invalid record error
    pub fn invalid_record<S: Into<String>>(id: u64, msg: S) -> Self {
        Self::InvalidRecord {
            id,
            message: msg.into(),
        }
    }

    /// Whether this error comes from the table contents rather than from
    /// reading or parsing it
    pub fn is_integrity_violation(&self) -> bool {
        matches!(
            self,
            Self::NotPowerOfTwo { .. }
                | Self::BitOutOfRange { .. }
                | Self::DuplicateBit { .. }
                | Self::InvalidRecord { .. }
        )
    }
}

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;
