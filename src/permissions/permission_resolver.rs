use crate::error::{RegistryError, RegistryResult};
use crate::{log_permissions_debug, log_permissions_info, log_permissions_warn};
use crate::permissions::action_registry::ActionRegistry;
use crate::permissions::types::CompositePermission;
use std::sync::Arc;

/// Decodes composite permission values against an action registry.
///
/// Every query is a pure function of its inputs and the registry: an unknown
/// resource type, a zero composite and bits no action claims all produce an
/// empty or partial answer rather than an error.
///
/// Resource types are matched through
/// [`ActionRegistry::canonical_resource_type`], so the short aliases work
/// unless the table itself declares that name.
#[derive(Debug, Clone)]
pub struct PermissionResolver {
    registry: Arc<ActionRegistry>,
}

impl PermissionResolver {
    /// Creates a resolver over an already validated registry.
    #[must_use]
    pub fn new(registry: Arc<ActionRegistry>) -> Self {
        log_permissions_info!(
            "Permission resolver ready over {} action records",
            registry.len()
        );
        Self { registry }
    }

    pub fn registry(&self) -> &ActionRegistry {
        &self.registry
    }

    /// Names of the actions granted by `composite`, in declaration order.
    ///
    /// An action is granted when its whole bit value is a submask of
    /// `composite`.
    ///
    /// # Arguments
    ///
    /// * `resource_type` - Resource type whose action namespace to decode against
    /// * `composite` - Bitwise OR of the granted actions' bit values
    #[must_use]
    pub fn find_permitted_actions(
        &self,
        resource_type: &str,
        composite: CompositePermission,
    ) -> Vec<String> {
        let resource_type = self.registry.canonical_resource_type(resource_type);

        let permitted: Vec<String> = self
            .registry
            .records_for_resource_type(resource_type)
            .filter(|record| record.is_granted_by(composite))
            .map(|record| record.action.clone())
            .collect();

        let unknown = self.unknown_bits(resource_type, composite);
        if unknown != 0 {
            log_permissions_debug!(
                "Ignoring bits {:#b} of {} not mapped to any action of {}",
                unknown,
                composite,
                resource_type
            );
        }
        log_permissions_debug!(
            "Resolved {} for {}: {:?}",
            composite,
            resource_type,
            permitted
        );

        permitted
    }

    /// Whether `composite` grants the named action.
    #[must_use]
    pub fn is_permitted(
        &self,
        resource_type: &str,
        composite: CompositePermission,
        action: &str,
    ) -> bool {
        self.registry
            .records_for_resource_type(resource_type)
            .any(|record| record.action == action && record.is_granted_by(composite))
    }

    /// Bits of `composite` that no action of the resource type claims.
    #[must_use]
    pub fn unknown_bits(
        &self,
        resource_type: &str,
        composite: CompositePermission,
    ) -> CompositePermission {
        composite & !self.registry.full_mask(resource_type)
    }

    /// Composite value granting exactly the named actions.
    ///
    /// Fails with [`RegistryError::UnknownAction`] when a name is not declared
    /// for the resource type.
    pub fn encode_actions<S: AsRef<str>>(
        &self,
        resource_type: &str,
        actions: &[S],
    ) -> RegistryResult<CompositePermission> {
        let resource_type = self.registry.canonical_resource_type(resource_type);

        actions.iter().try_fold(0, |composite, action| {
            let action = action.as_ref();
            self.registry
                .bit_value_of(resource_type, action)
                .map(|bit| composite | bit)
                .ok_or_else(|| {
                    log_permissions_warn!("Cannot encode unknown action {} of {}", action, resource_type);
                    RegistryError::UnknownAction {
                        resource_type: resource_type.to_string(),
                        action: action.to_string(),
                    }
                })
        })
    }
}
