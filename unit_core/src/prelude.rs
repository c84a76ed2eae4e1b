//! Prelude module for convenient imports
//!
//! ```rust
//! use unit_core::prelude::*;
//! ```

// Stats
pub use crate::stats::{build_stats, StatOption, Stats};

// Roles
pub use crate::roles::{stats_for_role, OverrideMode, RolesSchema};

// Units
pub use crate::unit::{build_unit, Unit, UnitRequest};

// Errors
pub use crate::error::StatsError;
