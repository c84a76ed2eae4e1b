//! Schema checking - Dry-run every role override against the stats field tables

use super::RolesSchema;
use crate::merge::apply_document;
use crate::stats::Stats;
use serde_json::Value;
use thiserror::Error;

/// Every problem found in a roles schema, each list sorted
#[derive(Error, Debug, Clone, Default, PartialEq, Eq)]
#[error(
    "roles config validation issues: unknown_roles={unknown_roles:?}, non_object_roles={non_object_roles:?}, unknown_keys={unknown_keys:?}, type_errors={type_errors:?}"
)]
pub struct SchemaError {
    /// Override entries whose key is not a valid role token
    pub unknown_roles: Vec<String>,
    pub non_object_roles: Vec<String>,
    /// `role.path.to.key`
    pub unknown_keys: Vec<String>,
    pub type_errors: Vec<String>,
}

impl SchemaError {
    fn is_empty(&self) -> bool {
        self.unknown_roles.is_empty()
            && self.non_object_roles.is_empty()
            && self.unknown_keys.is_empty()
            && self.type_errors.is_empty()
    }
}

/// Check every override entry without building any unit
///
/// The result does not depend on the schema's mode; callers decide whether a
/// failure is fatal.
pub fn validate_roles_schema(schema: &RolesSchema) -> Result<(), SchemaError> {
    let valid_roles = schema.valid_role_keys();
    let mut issues = SchemaError::default();

    for (raw_role, entry) in &schema.stats_per_roles {
        let role_key = raw_role.to_lowercase();
        if !valid_roles.contains(&role_key) {
            issues.unknown_roles.push(raw_role.clone());
            continue;
        }
        let Value::Object(role_doc) = entry else {
            issues.non_object_roles.push(raw_role.clone());
            continue;
        };

        let mut scratch = Stats::baseline();
        let report = apply_document(&mut scratch, role_doc);
        issues
            .unknown_keys
            .extend(report.unknown_keys.into_iter().map(|k| format!("{}.{}", role_key, k)));
        issues
            .type_errors
            .extend(report.type_errors.into_iter().map(|e| format!("{}.{}", role_key, e)));
    }

    if issues.is_empty() {
        return Ok(());
    }
    issues.unknown_roles.sort();
    issues.non_object_roles.sort();
    issues.unknown_keys.sort();
    issues.type_errors.sort();
    Err(issues)
}
