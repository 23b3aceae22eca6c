use crate::constants::{resolve_resource_type, MAX_BIT_VALUE, MAX_RECORD_ID};
use crate::error::{RegistryError, RegistryResult};
use crate::permissions::builtin_table::builtin_records;
use crate::permissions::types::{ActionRecord, CompositePermission};
use crate::{log_registry_debug, log_registry_error};
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::sync::Arc;

static SHARED_BUILTIN: OnceCell<Arc<ActionRegistry>> = OnceCell::new();

/// Immutable, ordered table of the actions each resource type exposes.
///
/// The registry is validated once when it is built:
/// - every bit value has exactly one bit set, at most bit 62
/// - ids fit a signed 64-bit integer
/// - no two actions of one resource type share a bit
/// - resource types and action names are non-empty
///
/// Once built it never changes, so it can be shared between threads behind an
/// `Arc` without locking.
#[derive(Debug, Clone)]
pub struct ActionRegistry {
    records: Vec<ActionRecord>,
}

impl ActionRegistry {
    /// Builds a registry from records in declaration order, rejecting any
    /// table that breaks the bit invariants.
    pub fn new(records: Vec<ActionRecord>) -> RegistryResult<Self> {
        if let Err(e) = Self::validate(&records) {
            log_registry_error!("Rejected action table: {}", e);
            return Err(e);
        }
        log_registry_debug!("Built action registry with {} records", records.len());
        Ok(Self { records })
    }

    /// Builds the table shipped with the crate.
    pub fn builtin() -> RegistryResult<Self> {
        Self::new(builtin_records())
    }

    /// Process-wide instance of the built-in table, built on first use.
    pub fn shared_builtin() -> RegistryResult<Arc<Self>> {
        SHARED_BUILTIN
            .get_or_try_init(|| Self::builtin().map(Arc::new))
            .map(Arc::clone)
    }

    fn validate(records: &[ActionRecord]) -> RegistryResult<()> {
        let mut seen: HashMap<(&str, u64), &str> = HashMap::new();

        for record in records {
            if record.id > MAX_RECORD_ID {
                return Err(RegistryError::invalid_record(record.id, "id does not fit a signed 64-bit integer"));
            }
            if record.resource_type.is_empty() {
                return Err(RegistryError::invalid_record(record.id, "empty resource type"));
            }
            if record.action.is_empty() {
                return Err(RegistryError::invalid_record(record.id, "empty action name"));
            }
            if !record.bit_value.is_power_of_two() {
                return Err(RegistryError::NotPowerOfTwo {
                    resource_type: record.resource_type.clone(),
                    action: record.action.clone(),
                    bit_value: record.bit_value,
                });
            }
            if record.bit_value > MAX_BIT_VALUE {
                return Err(RegistryError::BitOutOfRange {
                    resource_type: record.resource_type.clone(),
                    action: record.action.clone(),
                    bit_value: record.bit_value,
                    max: MAX_BIT_VALUE,
                });
            }
            if let Some(existing) = seen.insert(
                (record.resource_type.as_str(), record.bit_value),
                record.action.as_str(),
            ) {
                return Err(RegistryError::DuplicateBit {
                    resource_type: record.resource_type.clone(),
                    existing: existing.to_string(),
                    duplicate: record.action.clone(),
                    bit_value: record.bit_value,
                });
            }
        }

        Ok(())
    }

    /// Resource type a lookup for `name` matches against.
    ///
    /// A name the table declares is used as is. Otherwise a short alias from
    /// [`crate::constants::RESOURCE_TYPE_ALIASES`] is expanded, and anything
    /// else passes through unchanged.
    pub fn canonical_resource_type<'a>(&'a self, name: &'a str) -> &'a str {
        if self.records.iter().any(|record| record.resource_type == name) {
            name
        } else {
            resolve_resource_type(name)
        }
    }

    /// Records of one resource type in declaration order. An unknown resource
    /// type yields nothing.
    pub fn records_for_resource_type<'a>(
        &'a self,
        resource_type: &'a str,
    ) -> impl Iterator<Item = &'a ActionRecord> + 'a {
        let resource_type = self.canonical_resource_type(resource_type);
        self.records
            .iter()
            .filter(move |record| record.resource_type == resource_type)
    }

    /// Distinct resource types in the order they first appear.
    pub fn resource_types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = Vec::new();
        for record in &self.records {
            if !types.contains(&record.resource_type.as_str()) {
                types.push(&record.resource_type);
            }
        }
        types
    }

    /// Bit value of a named action, if the resource type declares it.
    pub fn bit_value_of(&self, resource_type: &str, action: &str) -> Option<u64> {
        self.records_for_resource_type(resource_type)
            .find(|record| record.action == action)
            .map(|record| record.bit_value)
    }

    /// Composite granting every action of the resource type.
    pub fn full_mask(&self, resource_type: &str) -> CompositePermission {
        self.records_for_resource_type(resource_type)
            .fold(0, |mask, record| mask | record.bit_value)
    }

    /// All records in declaration order.
    pub fn records(&self) -> &[ActionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;

    #[test]
    fn test_builtin_table_is_valid() {
        let registry = ActionRegistry::builtin().unwrap();
        assert_eq!(registry.len(), 18);
        assert_eq!(
            registry.resource_types(),
            vec![MDL_BOOKMARKS, MDL_BOOKMARKS_ENTRY, MDL_BOOKMARKS_FOLDER]
        );
    }

    #[test]
    fn test_records_keep_declaration_order() {
        let registry = ActionRegistry::builtin().unwrap();
        let actions: Vec<&str> = registry
            .records_for_resource_type(MDL_BOOKMARKS_ENTRY)
            .map(|record| record.action.as_str())
            .collect();
        assert_eq!(
            actions,
            vec![PRM_VIEW, PRM_DELETE, PRM_PERMISSIONS, PRM_UPDATE, PRM_SUBSCRIBE]
        );
    }

    #[test]
    fn test_unknown_resource_type_has_no_records() {
        let registry = ActionRegistry::builtin().unwrap();
        assert_eq!(registry.records_for_resource_type("unknown-type").count(), 0);
        assert_eq!(registry.full_mask("unknown-type"), 0);
    }

    #[test]
    fn test_lookup_helpers() {
        let registry = ActionRegistry::builtin().unwrap();
        assert_eq!(registry.bit_value_of(MDL_BOOKMARKS_FOLDER, PRM_ACCESS), Some(128));
        assert_eq!(registry.bit_value_of(MDL_BOOKMARKS, PRM_ACCESS), None);
        assert_eq!(registry.full_mask(MDL_BOOKMARKS_FOLDER), 255);
        assert_eq!(registry.full_mask(MDL_BOOKMARKS), 31);
    }

    #[test]
    fn test_rejects_non_power_of_two() {
        let err = ActionRegistry::new(vec![ActionRecord::new(1, "model", "VIEW", 3)]).unwrap_err();
        assert!(matches!(err, RegistryError::NotPowerOfTwo { bit_value: 3, .. }));

        let err = ActionRegistry::new(vec![ActionRecord::new(1, "model", "VIEW", 0)]).unwrap_err();
        assert!(matches!(err, RegistryError::NotPowerOfTwo { bit_value: 0, .. }));
    }

    #[test]
    fn test_rejects_bit_63() {
        let err = ActionRegistry::new(vec![ActionRecord::new(1, "doc", "TOP", 1 << 63)]).unwrap_err();
        assert!(matches!(err, RegistryError::BitOutOfRange { bit_value, .. } if bit_value == 1 << 63));

        let registry = ActionRegistry::new(vec![ActionRecord::new(1, "doc", "TOP", 1 << 62)]).unwrap();
        assert_eq!(registry.full_mask("doc"), MAX_BIT_VALUE);
    }

    #[test]
    fn test_rejects_id_above_i64() {
        let err = ActionRegistry::new(vec![ActionRecord::new(u64::MAX, "doc", "READ", 1)]).unwrap_err();
        assert!(matches!(err, RegistryError::InvalidRecord { .. }));
    }

    #[test]
    fn test_declared_name_wins_over_alias() {
        let registry = ActionRegistry::new(vec![ActionRecord::new(1, "bookmarks", "VIEW", 1)]).unwrap();
        assert_eq!(registry.canonical_resource_type("bookmarks"), "bookmarks");
        assert_eq!(registry.canonical_resource_type("bookmarks-entry"), MDL_BOOKMARKS_ENTRY);
        assert_eq!(registry.records_for_resource_type("bookmarks").count(), 1);
    }

    #[test]
    fn test_rejects_duplicate_bit_within_resource_type() {
        let err = ActionRegistry::new(vec![
            ActionRecord::new(1, "model", "VIEW", 1),
            ActionRecord::new(2, "model", "UPDATE", 1),
        ])
        .unwrap_err();
        match err {
            RegistryError::DuplicateBit {
                existing,
                duplicate,
                ..
            } => {
                assert_eq!(existing, "VIEW");
                assert_eq!(duplicate, "UPDATE");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_same_bit_allowed_across_resource_types() {
        let registry = ActionRegistry::new(vec![
            ActionRecord::new(1, "a", "VIEW", 1),
            ActionRecord::new(2, "b", "VIEW", 1),
        ])
        .unwrap();
        assert_eq!(registry.resource_types(), vec!["a", "b"]);
    }

    #[test]
    fn test_rejects_empty_names() {
        let err = ActionRegistry::new(vec![ActionRecord::new(9, "model", "", 1)]).unwrap_err();
        assert!(matches!(err, RegistryError::InvalidRecord { id: 9, .. }));
    }

    #[test]
    fn test_shared_builtin_is_reused() {
        let first = ActionRegistry::shared_builtin().unwrap();
        let second = ActionRegistry::shared_builtin().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }
}
