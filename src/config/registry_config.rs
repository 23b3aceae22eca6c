//! Loading action tables from TOML or JSON documents
//!
//! A table file lists records in declaration order:
//!
//! ```toml
//! [[actions]]
//! id = 417
//! resource_type = "com.liferay.bookmarks.model.BookmarksFolder"
//! action = "VIEW"
//! bit_value = 1
//! ```

use crate::error::{RegistryError, RegistryResult};
use crate::permissions::builtin_table::builtin_records;
use crate::permissions::{ActionRecord, ActionRegistry};
use crate::{log_config_info, log_config_warn};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Serializable form of an action table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Records in declaration order
    #[serde(default)]
    pub actions: Vec<ActionRecord>,
}

impl RegistryConfig {
    /// The table shipped with the crate
    pub fn builtin() -> Self {
        Self {
            actions: builtin_records(),
        }
    }

    /// Load a table file. `.json` files are read as JSON, `.toml` files and
    /// files without an extension as TOML. Any other extension is rejected.
    pub fn from_file<P: AsRef<Path>>(path: P) -> RegistryResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        let config = match extension.as_deref() {
            Some("json") => Self::from_json_str(&content)?,
            Some("toml") | None => Self::from_toml_str(&content)?,
            Some(other) => {
                return Err(RegistryError::config(format!(
                    "Unsupported action table format '{}' for {}",
                    other,
                    path.display()
                )))
            }
        };

        if config.actions.is_empty() {
            log_config_warn!("Action table {} declares no actions", path.display());
        }
        log_config_info!(
            "Loaded {} action records from {}",
            config.actions.len(),
            path.display()
        );
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> RegistryResult<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> RegistryResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> RegistryResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn to_json_string(&self) -> RegistryResult<String> {
        serde_json::to_string_pretty(self).map_err(RegistryError::from)
    }

    /// Validate the table and build a registry from it
    pub fn into_registry(self) -> RegistryResult<ActionRegistry> {
        ActionRegistry::new(self.actions)
    }
}
