//! Common test utilities and fixtures for resolver tests

use resource_permissions::logging::init_test_logging;
use resource_permissions::{ActionRegistry, PermissionResolver};
use std::sync::Arc;

/// Resolver over the built-in table, with test logging installed
pub fn builtin_resolver() -> PermissionResolver {
    init_test_logging();
    let registry = ActionRegistry::builtin().expect("built-in table should be valid");
    PermissionResolver::new(Arc::new(registry))
}

/// Every composite that fits in the low `bits` bits
pub fn all_composites(bits: u32) -> impl Iterator<Item = u64> {
    0..(1u64 << bits)
}
