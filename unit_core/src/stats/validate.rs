//! Validation - Fail-fast checks for conditions that are never auto-corrected

use super::Stats;
use crate::error::StatsError;

/// Smallest range that still reaches adjacent hexes
pub const MIN_RANGE: f64 = 1.0;

impl Stats {
    /// Check the profile without modifying it
    ///
    /// Finiteness is checked first and independently of sign, so a NaN or
    /// infinity is reported even where sanitization would otherwise clamp.
    pub fn validate(&self) -> Result<(), StatsError> {
        if let Some((field, _)) = self.numeric_fields().into_iter().find(|(_, v)| !v.is_finite()) {
            return Err(StatsError::NonFinite { field });
        }
        if self.offense.range < MIN_RANGE {
            return Err(StatsError::RangeTooLow {
                range: self.offense.range,
            });
        }
        Ok(())
    }
}
