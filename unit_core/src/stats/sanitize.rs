//! Sanitization - Deterministic, idempotent correction of out-of-range values
//!
//! Only data invariants live here. Mechanics (attack speed caps, crit overflow
//! conversion, anti-heal) belong to the combat engine.
//!
//! Non-finite values always pass through untouched so that validation can
//! reject them instead of having them silently clamped away.

use super::{DefenseStats, ManaFromDamage, OffenseStats, Omnivamp, ResourceStats};

/// Lowest allowed crit multiplier
pub const CRIT_DAMAGE_FLOOR: f64 = 1.0;

/// Bounds of the targeting tie-break bias
pub const TARGET_PRIORITY_MIN: f64 = -1.0;
pub const TARGET_PRIORITY_MAX: f64 = 1.0;

/// Clamp negatives to 0, leaving NaN and ±Inf as-is
pub fn non_negative(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    if value < 0.0 {
        0.0
    } else {
        value
    }
}

/// Raise `value` to at least `floor`, leaving NaN and ±Inf as-is
pub fn floor_at(value: f64, floor: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    if value < floor {
        floor
    } else {
        value
    }
}

/// Two-sided clamp, leaving NaN and ±Inf as-is
///
/// Unlike [`f64::clamp`] this never panics: NaN bounds fall through the
/// comparisons and the value is returned unchanged.
pub fn clamp_interval(value: f64, lo: f64, hi: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    if value < lo {
        lo
    } else if value > hi {
        hi
    } else {
        value
    }
}

pub(crate) fn sanitize_offense(o: OffenseStats) -> OffenseStats {
    OffenseStats {
        range: non_negative(o.range),
        base_attack_damage: non_negative(o.base_attack_damage),
        attack_damage: non_negative(o.attack_damage),
        ability_power: non_negative(o.ability_power),
        attack_speed: non_negative(o.attack_speed),
        crit_chance: non_negative(o.crit_chance),
        crit_damage: floor_at(o.crit_damage, CRIT_DAMAGE_FLOOR),
        omnivamp: sanitize_omnivamp(o.omnivamp),
        damage_amp: o.damage_amp,
    }
}

fn sanitize_omnivamp(v: Omnivamp) -> Omnivamp {
    let (min, max, current) = bounded_triple(v.min, v.max, v.current);
    Omnivamp { min, max, current }
}

pub(crate) fn sanitize_defense(d: DefenseStats) -> DefenseStats {
    DefenseStats {
        hp: non_negative(d.hp),
        armor: non_negative(d.armor),
        magic_resist: non_negative(d.magic_resist),
        durability: non_negative(d.durability),
        target_priority: clamp_interval(d.target_priority, TARGET_PRIORITY_MIN, TARGET_PRIORITY_MAX),
    }
}

pub(crate) fn sanitize_resource(r: ResourceStats) -> ResourceStats {
    let (mana_min, mana_max, mana_start) = bounded_triple(r.mana_min, r.mana_max, r.mana_start);
    ResourceStats {
        mana_min,
        mana_max,
        mana_start,
        mana_regen: non_negative(r.mana_regen),
        mana_from_damage: sanitize_mana_from_damage(r.mana_from_damage),
        mana_per_hit: non_negative(r.mana_per_hit),
    }
}

fn sanitize_mana_from_damage(m: ManaFromDamage) -> ManaFromDamage {
    ManaFromDamage {
        enabled: m.enabled,
        pre_mitigation_ratio: non_negative(m.pre_mitigation_ratio),
        post_mitigation_ratio: non_negative(m.post_mitigation_ratio),
        per_instance_cap: non_negative(m.per_instance_cap),
    }
}

/// `min' = non_negative(min)`, `max' >= min'`, `value` clamped into `[min', max']`
fn bounded_triple(min: f64, max: f64, value: f64) -> (f64, f64, f64) {
    let min = non_negative(min);
    let max = floor_at(max, min);
    let value = clamp_interval(value, min, max);
    (min, max, value)
}
