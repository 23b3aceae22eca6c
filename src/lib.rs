//! Resolve composite permission values into named resource actions.
//!
//! Each resource type declares a set of actions, and each action owns one bit
//! of that resource type's namespace. A composite permission is the OR of the
//! bits of every granted action; [`PermissionResolver::find_permitted_actions`]
//! turns it back into action names.
//!
//! ```
//! use resource_permissions::{ActionRegistry, PermissionResolver};
//! use std::sync::Arc;
//!
//! let registry = Arc::new(ActionRegistry::builtin()?);
//! let resolver = PermissionResolver::new(registry);
//! assert_eq!(
//!     resolver.find_permitted_actions("bookmarks-folder", 144),
//!     vec!["ADD_SUBFOLDER", "ACCESS"]
//! );
//! # Ok::<(), resource_permissions::RegistryError>(())
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod permissions;

pub use config::RegistryConfig;
pub use error::{RegistryError, RegistryResult};
pub use permissions::{
    ActionRecord, ActionRegistry, CompositePermission, PermissionResolver,
};
