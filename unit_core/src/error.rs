//! Errors raised while building stats and units

use crate::roles::LabelError;
use thiserror::Error;

/// Stats construction error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    #[error("stats contain non-finite values (NaN/±Inf) at {field}")]
    NonFinite { field: &'static str },
    #[error("resource contains non-finite values")]
    NonFiniteResource,
    #[error("range must be >= 1, got {range}")]
    RangeTooLow { range: f64 },
    #[error("invalid role label {label:?}: must contain a valid role token and optional valid damage type ({reason})")]
    InvalidRoleLabel { label: String, reason: LabelError },
    #[error("invalid role stats ({label}): override issues: unknown_keys={unknown_keys:?}, type_errors={type_errors:?}")]
    OverrideIssues {
        label: String,
        unknown_keys: Vec<String>,
        type_errors: Vec<String>,
    },
    #[error("invalid role stats ({label}): {source}")]
    InvalidRoleStats {
        label: String,
        #[source]
        source: Box<StatsError>,
    },
    #[error("no role provided for unit {name:?}")]
    MissingRole { name: String },
}
