//! Stats - The attribute profile of a unit (offense, defense, resource)

mod options;
mod sanitize;
mod validate;

pub use options::{build_stats, DefenseField, OffenseField, ResourceUpdate, StatGroup, StatOption};
pub use sanitize::{clamp_interval, floor_at, non_negative};

pub(crate) use sanitize::{sanitize_defense, sanitize_offense, sanitize_resource};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Complete attribute profile for a unit
///
/// Every value handed out by the pipeline is sanitized and validated, see
/// [`Stats::sanitized`] and [`Stats::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub offense: OffenseStats,
    pub defense: DefenseStats,
    pub resource: ResourceStats,
}

/// Offensive stats
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OffenseStats {
    /// Attack range in hexes (must be at least 1)
    pub range: f64,
    pub base_attack_damage: f64,
    pub attack_damage: f64,
    pub ability_power: f64,
    pub attack_speed: f64,
    /// Not capped at 1.0 here; overflow is converted by the combat engine
    #[serde(rename = "critical_strike_chance")]
    pub crit_chance: f64,
    /// Crit multiplier, floored at 1.0
    #[serde(rename = "critical_strike_damage")]
    pub crit_damage: f64,
    pub omnivamp: Omnivamp,
    /// Flat damage amplification, the only signed stat
    pub damage_amp: f64,
}

/// Healing from damage dealt, bounded by `min..=max`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Omnivamp {
    #[serde(rename = "omnivamp_min")]
    pub min: f64,
    #[serde(rename = "omnivamp_max")]
    pub max: f64,
    #[serde(rename = "current_omnivamp")]
    pub current: f64,
}

/// Defensive stats
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DefenseStats {
    pub hp: f64,
    pub armor: f64,
    pub magic_resist: f64,
    pub durability: f64,
    /// Tie-break bias in [-1, +1]: -1 less likely to be targeted, +1 more likely.
    /// Targeting only consults it when distance and other primary criteria tie.
    pub target_priority: f64,
}

/// Mana gauge and its gain rules
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceStats {
    pub mana_min: f64,
    pub mana_max: f64,
    pub mana_start: f64,
    /// Mana per second
    pub mana_regen: f64,
    pub mana_from_damage: ManaFromDamage,
    /// Flat mana gained per attack landed
    pub mana_per_hit: f64,
}

/// Mana generated when taking damage
///
/// Gain per instance = `pre_mitigation_ratio × damage_before_reductions
/// + post_mitigation_ratio × damage_after_reductions`, capped at
/// `per_instance_cap` (0 = no cap).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ManaFromDamage {
    pub enabled: bool,
    pub pre_mitigation_ratio: f64,
    pub post_mitigation_ratio: f64,
    pub per_instance_cap: f64,
}

const BASELINE: Stats = Stats {
    offense: OffenseStats {
        range: 1.0,
        base_attack_damage: 0.0,
        attack_damage: 0.0,
        ability_power: 0.0,
        attack_speed: 0.0,
        crit_chance: 0.25,
        crit_damage: 1.4,
        omnivamp: Omnivamp {
            min: 0.0,
            max: 0.0,
            current: 0.0,
        },
        damage_amp: 0.0,
    },
    defense: DefenseStats {
        hp: 0.0,
        armor: 0.0,
        magic_resist: 0.0,
        durability: 0.0,
        target_priority: 0.0,
    },
    resource: ResourceStats {
        mana_min: 0.0,
        mana_max: 0.0,
        mana_start: 0.0,
        mana_regen: 0.0,
        mana_from_damage: ManaFromDamage {
            enabled: false,
            pre_mitigation_ratio: 0.0,
            post_mitigation_ratio: 0.0,
            per_instance_cap: 0.0,
        },
        mana_per_hit: 0.0,
    },
};

impl Default for Stats {
    fn default() -> Self {
        Self::baseline()
    }
}

impl Stats {
    /// Fresh copy of the baseline every unit starts from
    pub fn baseline() -> Self {
        BASELINE
    }

    /// Re-apply every sub-group sanitizer
    pub fn sanitized(self) -> Self {
        Stats {
            offense: sanitize_offense(self.offense),
            defense: sanitize_defense(self.defense),
            resource: sanitize_resource(self.resource),
        }
    }

    /// Every numeric field paired with its dotted document path
    pub fn numeric_fields(&self) -> Vec<(&'static str, f64)> {
        let o = &self.offense;
        let d = &self.defense;
        let r = &self.resource;
        vec![
            ("offense.range", o.range),
            ("offense.base_attack_damage", o.base_attack_damage),
            ("offense.attack_damage", o.attack_damage),
            ("offense.ability_power", o.ability_power),
            ("offense.attack_speed", o.attack_speed),
            ("offense.critical_strike_chance", o.crit_chance),
            ("offense.critical_strike_damage", o.crit_damage),
            ("offense.omnivamp.omnivamp_min", o.omnivamp.min),
            ("offense.omnivamp.omnivamp_max", o.omnivamp.max),
            ("offense.omnivamp.current_omnivamp", o.omnivamp.current),
            ("offense.damage_amp", o.damage_amp),
            ("defense.hp", d.hp),
            ("defense.armor", d.armor),
            ("defense.magic_resist", d.magic_resist),
            ("defense.durability", d.durability),
            ("defense.target_priority", d.target_priority),
            ("resource.mana_min", r.mana_min),
            ("resource.mana_max", r.mana_max),
            ("resource.mana_start", r.mana_start),
            ("resource.mana_regen", r.mana_regen),
            ("resource.mana_per_hit", r.mana_per_hit),
            (
                "resource.mana_from_damage.pre_mitigation_ratio",
                r.mana_from_damage.pre_mitigation_ratio,
            ),
            (
                "resource.mana_from_damage.post_mitigation_ratio",
                r.mana_from_damage.post_mitigation_ratio,
            ),
            (
                "resource.mana_from_damage.per_instance_cap",
                r.mana_from_damage.per_instance_cap,
            ),
        ]
    }
}

impl ResourceStats {
    /// True when any numeric field, including the mana-from-damage rule, is NaN or infinite
    pub fn has_non_finite(&self) -> bool {
        let mfd = &self.mana_from_damage;
        [
            self.mana_min,
            self.mana_max,
            self.mana_start,
            self.mana_regen,
            self.mana_per_hit,
            mfd.pre_mitigation_ratio,
            mfd.post_mitigation_ratio,
            mfd.per_instance_cap,
        ]
        .iter()
        .any(|v| !v.is_finite())
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string_pretty(self) {
            Ok(json) => f.write_str(&json),
            Err(e) => write!(f, "Stats<serialize error: {}>", e),
        }
    }
}
