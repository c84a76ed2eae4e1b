//! Roles - Label resolution and per-role stat overrides

mod apply;
mod check;
mod label;
mod schema;

pub use apply::{apply_role_override, stats_for_role};
pub use check::{validate_roles_schema, SchemaError};
pub use label::{parse_role_label, LabelError, ResolvedRole};
pub use schema::{OverrideMode, RolesSchema, Vocabulary, BUILTIN_DAMAGE_TYPES, BUILTIN_ROLE_KEYS};
