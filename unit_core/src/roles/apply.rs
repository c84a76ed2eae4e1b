//! Role overrides - Resolving a label and merging its override onto built stats

use super::{parse_role_label, RolesSchema};
use crate::error::StatsError;
use crate::merge::apply_document;
use crate::stats::{build_stats, StatOption, Stats};
use log::{debug, info, warn};

/// Build stats from `options`, then merge the override of the role named by `label`
///
/// An unresolvable label is always fatal. Override discrepancies are fatal in
/// strict mode and logged otherwise. The merged value is re-sanitized and
/// re-validated; a validation failure is fatal in both modes.
pub fn stats_for_role(label: &str, schema: &RolesSchema, options: &[StatOption]) -> Result<Stats, StatsError> {
    let base = build_stats(options)?;
    apply_role_override(base, label, schema)
}

/// Merge the override of the role named by `label` onto `base`
pub fn apply_role_override(base: Stats, label: &str, schema: &RolesSchema) -> Result<Stats, StatsError> {
    let roles = schema.valid_role_keys();
    let damage_types = schema.damage_type_tokens();

    let resolved = parse_role_label(label, &roles, &damage_types).map_err(|reason| StatsError::InvalidRoleLabel {
        label: label.to_string(),
        reason,
    })?;
    // Damage type is checked against the vocabulary but does not select overrides yet
    debug!(
        "[roles] label={:?} resolved to role={:?} damage_type={:?}",
        label, resolved.role, resolved.damage_type
    );

    let Some(role_doc) = schema.override_for(&resolved.role) else {
        info!("[roles] no overrides for role={:?} (normalized={:?})", label, resolved.role);
        return Ok(base);
    };

    let mut applied = base;
    let report = apply_document(&mut applied, role_doc);

    if !report.is_empty() {
        if schema.is_strict() {
            return Err(StatsError::OverrideIssues {
                label: label.to_string(),
                unknown_keys: report.unknown_keys,
                type_errors: report.type_errors,
            });
        }
        warn!(
            "[roles] role={:?} override warnings: unknown_keys={:?}, type_errors={:?}",
            label, report.unknown_keys, report.type_errors
        );
    }

    let applied = applied.sanitized();
    applied.validate().map_err(|e| StatsError::InvalidRoleStats {
        label: label.to_string(),
        source: Box::new(e),
    })?;
    Ok(applied)
}
