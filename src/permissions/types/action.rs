use serde::{Deserialize, Serialize};

/// Bitwise OR of the bit values of every action granted on one resource type.
pub type CompositePermission = u64;

/// One action a resource type exposes, with the bit that encodes it.
///
/// `id` is informational and plays no part in resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub id: u64,
    pub resource_type: String,
    pub action: String,
    pub bit_value: u64,
}

impl ActionRecord {
    pub fn new(id: u64, resource_type: &str, action: &str, bit_value: u64) -> Self {
        Self {
            id,
            resource_type: resource_type.to_string(),
            action: action.to_string(),
            bit_value,
        }
    }

    /// Whether every bit of this action is present in `composite`.
    ///
    /// Written as a submask test so an action spanning several bits is only
    /// granted when all of them are set.
    #[must_use]
    pub fn is_granted_by(&self, composite: CompositePermission) -> bool {
        composite & self.bit_value == self.bit_value
    }
}
