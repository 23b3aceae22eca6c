// permissions module

pub mod action_registry;
pub mod builtin_table;
pub mod permission_resolver;
pub mod types;
pub use action_registry::ActionRegistry;
pub use permission_resolver::PermissionResolver;
pub use types::{ActionRecord, CompositePermission};
