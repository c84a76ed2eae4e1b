//! unit_core - Stats pipeline for game units
//!
//! This library provides:
//! - Stats: Offense, defense and resource profile with sanitization and validation
//! - StatOption: Ordered mutation commands applied on top of a fixed baseline
//! - Document merging: Untyped override documents projected onto typed stats
//! - Roles: Label resolution and strict/lenient per-role overrides
//! - Unit: Assembly of a named unit from its primary role

pub mod config;
pub mod error;
pub mod merge;
pub mod prelude;
pub mod roles;
pub mod stats;
pub mod unit;

// Re-export core types for convenience
pub use config::{default_roles, load_roles, ConfigError};
pub use error::StatsError;
pub use merge::{apply_document, ApplyReport, FieldDescriptor, FieldKind, FieldTable};
pub use roles::{
    parse_role_label, stats_for_role, validate_roles_schema, LabelError, OverrideMode, ResolvedRole, RolesSchema,
    SchemaError,
};
pub use stats::{
    build_stats, DefenseStats, ManaFromDamage, OffenseStats, Omnivamp, ResourceStats, StatOption, Stats,
};
pub use unit::{build_unit, build_unit_with_rng, Unit, UnitId, UnitRequest};
