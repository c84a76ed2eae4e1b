//! StatOption - Ordered mutation commands applied on top of the baseline
//!
//! Each command edits one sub-group and immediately re-sanitizes it, so every
//! intermediate value is internally consistent. A terminal validation pass
//! runs once all commands are applied.

use super::{sanitize_defense, sanitize_offense, sanitize_resource};
use super::{DefenseStats, ManaFromDamage, OffenseStats, Omnivamp, ResourceStats, Stats};
use crate::error::StatsError;

/// Leaf fields of [`OffenseStats`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OffenseField {
    Range,
    BaseAttackDamage,
    AttackDamage,
    AbilityPower,
    AttackSpeed,
    CritChance,
    CritDamage,
    OmnivampMin,
    OmnivampMax,
    OmnivampCurrent,
    DamageAmp,
}

impl OffenseField {
    fn set(self, o: &mut OffenseStats, value: f64) {
        let slot = match self {
            OffenseField::Range => &mut o.range,
            OffenseField::BaseAttackDamage => &mut o.base_attack_damage,
            OffenseField::AttackDamage => &mut o.attack_damage,
            OffenseField::AbilityPower => &mut o.ability_power,
            OffenseField::AttackSpeed => &mut o.attack_speed,
            OffenseField::CritChance => &mut o.crit_chance,
            OffenseField::CritDamage => &mut o.crit_damage,
            OffenseField::OmnivampMin => &mut o.omnivamp.min,
            OffenseField::OmnivampMax => &mut o.omnivamp.max,
            OffenseField::OmnivampCurrent => &mut o.omnivamp.current,
            OffenseField::DamageAmp => &mut o.damage_amp,
        };
        *slot = value;
    }
}

/// Leaf fields of [`DefenseStats`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefenseField {
    Hp,
    Armor,
    MagicResist,
    Durability,
    TargetPriority,
}

impl DefenseField {
    fn set(self, d: &mut DefenseStats, value: f64) {
        let slot = match self {
            DefenseField::Hp => &mut d.hp,
            DefenseField::Armor => &mut d.armor,
            DefenseField::MagicResist => &mut d.magic_resist,
            DefenseField::Durability => &mut d.durability,
            DefenseField::TargetPriority => &mut d.target_priority,
        };
        *slot = value;
    }
}

/// A whole sub-group swapped in at once
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatGroup {
    Offense(OffenseStats),
    Defense(DefenseStats),
    /// Replaces only the omnivamp bounds, other offense fields are kept
    Omnivamp(Omnivamp),
}

/// Resource changes; non-finite input is rejected before sanitizing
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResourceUpdate {
    /// Set the gauge, keeping the mana-from-damage rule
    Mana {
        min: f64,
        max: f64,
        start: f64,
        regen: f64,
        per_hit: f64,
    },
    Full(ResourceStats),
    ManaFromDamage(ManaFromDamage),
}

/// One mutation step
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatOption {
    Offense(OffenseField, f64),
    Defense(DefenseField, f64),
    Replace(StatGroup),
    Resource(ResourceUpdate),
}

impl StatOption {
    pub fn range(v: f64) -> Self {
        StatOption::Offense(OffenseField::Range, v)
    }

    pub fn base_attack_damage(v: f64) -> Self {
        StatOption::Offense(OffenseField::BaseAttackDamage, v)
    }

    pub fn attack_damage(v: f64) -> Self {
        StatOption::Offense(OffenseField::AttackDamage, v)
    }

    pub fn ability_power(v: f64) -> Self {
        StatOption::Offense(OffenseField::AbilityPower, v)
    }

    pub fn attack_speed(v: f64) -> Self {
        StatOption::Offense(OffenseField::AttackSpeed, v)
    }

    /// Not capped at 1.0: the engine converts overflow into crit damage
    pub fn crit_chance(v: f64) -> Self {
        StatOption::Offense(OffenseField::CritChance, v)
    }

    pub fn crit_damage(v: f64) -> Self {
        StatOption::Offense(OffenseField::CritDamage, v)
    }

    pub fn damage_amp(v: f64) -> Self {
        StatOption::Offense(OffenseField::DamageAmp, v)
    }

    /// Set the omnivamp bounds and current value together
    pub fn omnivamp(min: f64, max: f64, current: f64) -> Self {
        StatOption::Replace(StatGroup::Omnivamp(Omnivamp { min, max, current }))
    }

    pub fn offense(offense: OffenseStats) -> Self {
        StatOption::Replace(StatGroup::Offense(offense))
    }

    pub fn hp(v: f64) -> Self {
        StatOption::Defense(DefenseField::Hp, v)
    }

    pub fn armor(v: f64) -> Self {
        StatOption::Defense(DefenseField::Armor, v)
    }

    pub fn magic_resist(v: f64) -> Self {
        StatOption::Defense(DefenseField::MagicResist, v)
    }

    pub fn durability(v: f64) -> Self {
        StatOption::Defense(DefenseField::Durability, v)
    }

    pub fn target_priority(v: f64) -> Self {
        StatOption::Defense(DefenseField::TargetPriority, v)
    }

    pub fn defense(defense: DefenseStats) -> Self {
        StatOption::Replace(StatGroup::Defense(defense))
    }

    pub fn mana(min: f64, max: f64, start: f64, regen: f64, per_hit: f64) -> Self {
        StatOption::Resource(ResourceUpdate::Mana {
            min,
            max,
            start,
            regen,
            per_hit,
        })
    }

    pub fn resource(resource: ResourceStats) -> Self {
        StatOption::Resource(ResourceUpdate::Full(resource))
    }

    pub fn mana_from_damage(enabled: bool, pre_mitigation_ratio: f64, post_mitigation_ratio: f64, per_instance_cap: f64) -> Self {
        StatOption::Resource(ResourceUpdate::ManaFromDamage(ManaFromDamage {
            enabled,
            pre_mitigation_ratio,
            post_mitigation_ratio,
            per_instance_cap,
        }))
    }

    /// Apply this step, re-sanitizing the touched sub-group
    pub fn apply(&self, stats: &mut Stats) -> Result<(), StatsError> {
        match *self {
            StatOption::Offense(field, value) => {
                let mut offense = stats.offense;
                field.set(&mut offense, value);
                stats.offense = sanitize_offense(offense);
            }
            StatOption::Defense(field, value) => {
                let mut defense = stats.defense;
                field.set(&mut defense, value);
                stats.defense = sanitize_defense(defense);
            }
            StatOption::Replace(StatGroup::Offense(offense)) => {
                stats.offense = sanitize_offense(offense);
            }
            StatOption::Replace(StatGroup::Defense(defense)) => {
                stats.defense = sanitize_defense(defense);
            }
            StatOption::Replace(StatGroup::Omnivamp(omnivamp)) => {
                let mut offense = stats.offense;
                offense.omnivamp = omnivamp;
                stats.offense = sanitize_offense(offense);
            }
            StatOption::Resource(update) => {
                let resource = update.resolve(stats.resource);
                if resource.has_non_finite() {
                    return Err(StatsError::NonFiniteResource);
                }
                stats.resource = sanitize_resource(resource);
            }
        }
        Ok(())
    }
}

impl ResourceUpdate {
    /// Raw resource value after this update, before any guard or sanitizing
    fn resolve(self, current: ResourceStats) -> ResourceStats {
        match self {
            ResourceUpdate::Mana {
                min,
                max,
                start,
                regen,
                per_hit,
            } => ResourceStats {
                mana_min: min,
                mana_max: max,
                mana_start: start,
                mana_regen: regen,
                mana_per_hit: per_hit,
                mana_from_damage: current.mana_from_damage,
            },
            ResourceUpdate::Full(resource) => resource,
            ResourceUpdate::ManaFromDamage(rule) => ResourceStats {
                mana_from_damage: rule,
                ..current
            },
        }
    }
}

impl Stats {
    /// Apply `options` to a copy of `self`, then sanitize and validate the result
    ///
    /// The first failing step aborts the whole construction; no partially
    /// mutated value is ever returned.
    pub fn with(&self, options: &[StatOption]) -> Result<Stats, StatsError> {
        let mut stats = *self;
        for option in options {
            option.apply(&mut stats)?;
        }
        let stats = stats.sanitized();
        stats.validate()?;
        Ok(stats)
    }
}

/// Build stats from the baseline plus `options`
pub fn build_stats(options: &[StatOption]) -> Result<Stats, StatsError> {
    Stats::baseline().with(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Prepends a valid range so validation passes unless a later option overrides it
    fn build(options: &[StatOption]) -> Stats {
        let mut all = vec![StatOption::range(1.0)];
        all.extend_from_slice(options);
        build_stats(&all).unwrap()
    }

    #[test]
    fn test_non_negatives() {
        let stats = build(&[
            StatOption::attack_damage(-10.0),
            StatOption::ability_power(-1.0),
            StatOption::hp(-5.0),
            StatOption::armor(-2.0),
            StatOption::magic_resist(-3.0),
            StatOption::durability(-4.0),
            StatOption::omnivamp(0.0, 0.0, -0.10),
        ]);
        assert!((stats.offense.attack_damage - 0.0).abs() < f64::EPSILON);
        assert!((stats.offense.ability_power - 0.0).abs() < f64::EPSILON);
        assert!((stats.defense.hp - 0.0).abs() < f64::EPSILON);
        assert!((stats.defense.armor - 0.0).abs() < f64::EPSILON);
        assert!((stats.defense.magic_resist - 0.0).abs() < f64::EPSILON);
        assert!((stats.defense.durability - 0.0).abs() < f64::EPSILON);
        assert_eq!(stats.offense.omnivamp, Omnivamp::default());
    }

    #[test]
    fn test_crit_damage_floor() {
        let low = build(&[StatOption::crit_damage(0.5)]);
        assert!((low.offense.crit_damage - 1.0).abs() < f64::EPSILON);
        let high = build(&[StatOption::crit_damage(1.7)]);
        assert!((high.offense.crit_damage - 1.7).abs() < f64::EPSILON);
    }

    #[test]
    fn test_attack_speed_has_no_cap() {
        let stats = build(&[StatOption::attack_speed(7.0)]);
        assert!((stats.offense.attack_speed - 7.0).abs() < f64::EPSILON);
        let stats = build(&[StatOption::attack_speed(-0.3)]);
        assert!((stats.offense.attack_speed - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_crit_chance_and_damage_amp() {
        let stats = build(&[StatOption::crit_chance(-0.3)]);
        assert!((stats.offense.crit_chance - 0.0).abs() < f64::EPSILON);
        let stats = build(&[StatOption::crit_chance(1.7)]);
        assert!((stats.offense.crit_chance - 1.7).abs() < f64::EPSILON);
        let stats = build(&[StatOption::damage_amp(-0.25)]);
        assert!((stats.offense.damage_amp + 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_mana_sanitized_on_entry() {
        let stats = build(&[StatOption::mana(80.0, 30.0, 150.0, -3.0, -10.0)]);
        let r = stats.resource;
        assert!((r.mana_min - 80.0).abs() < f64::EPSILON);
        assert!((r.mana_max - 80.0).abs() < f64::EPSILON);
        assert!((r.mana_start - 80.0).abs() < f64::EPSILON);
        assert!((r.mana_regen - 0.0).abs() < f64::EPSILON);
        assert!((r.mana_per_hit - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_mana_start_clamped() {
        let above = build(&[StatOption::mana(100.0, 200.0, 300.0, 5.0, 0.0)]);
        assert!((above.resource.mana_start - 200.0).abs() < f64::EPSILON);
        assert!((above.resource.mana_regen - 5.0).abs() < f64::EPSILON);

        let below = build(&[StatOption::mana(50.0, 120.0, 25.0, 3.0, 0.0)]);
        assert!((below.resource.mana_start - 50.0).abs() < f64::EPSILON);

        let negative = build(&[StatOption::mana(-10.0, 40.0, 0.0, -5.0, 0.0)]);
        assert!((negative.resource.mana_min - 0.0).abs() < f64::EPSILON);
        assert!((negative.resource.mana_regen - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_mana_keeps_mana_from_damage_rule() {
        let stats = build(&[
            StatOption::mana_from_damage(true, 0.01, 0.03, 42.5),
            StatOption::mana(0.0, 70.0, 30.0, 0.0, 10.0),
        ]);
        assert!(stats.resource.mana_from_damage.enabled);
        assert!((stats.resource.mana_from_damage.per_instance_cap - 42.5).abs() < f64::EPSILON);
        assert!((stats.resource.mana_max - 70.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_mana_from_damage_sanitized() {
        let stats = build(&[StatOption::mana_from_damage(true, -0.01, 0.02, -5.0)]);
        let mfd = stats.resource.mana_from_damage;
        assert!(mfd.enabled);
        assert!((mfd.pre_mitigation_ratio - 0.0).abs() < f64::EPSILON);
        assert!((mfd.post_mitigation_ratio - 0.02).abs() < f64::EPSILON);
        assert!((mfd.per_instance_cap - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_target_priority_clamped() {
        let stats = build(&[StatOption::target_priority(2.5)]);
        assert!((stats.defense.target_priority - 1.0).abs() < f64::EPSILON);
        let stats = build(&[StatOption::target_priority(-3.0)]);
        assert!((stats.defense.target_priority + 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_omnivamp_triple() {
        let stats = build(&[StatOption::omnivamp(0.10, 0.05, 0.20)]);
        let v = stats.offense.omnivamp;
        assert!((v.min - 0.10).abs() < f64::EPSILON);
        assert!((v.max - 0.10).abs() < f64::EPSILON);
        assert!((v.current - 0.10).abs() < f64::EPSILON);
    }

    #[test]
    fn test_omnivamp_keeps_other_offense_fields() {
        let stats = build(&[StatOption::attack_damage(55.0), StatOption::omnivamp(0.0, 0.2, 0.1)]);
        assert!((stats.offense.attack_damage - 55.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bulk_matches_granular_offense() {
        let bulk = build(&[StatOption::offense(OffenseStats {
            range: 1.0,
            attack_damage: 55.0,
            omnivamp: Omnivamp {
                min: 0.0,
                max: 0.0,
                current: -0.10,
            },
            crit_chance: 0.25,
            crit_damage: 1.4,
            ..OffenseStats::default()
        })]);
        let granular = build(&[StatOption::attack_damage(55.0), StatOption::omnivamp(0.0, 0.0, -0.10)]);
        assert_eq!(bulk.offense, granular.offense);
    }

    #[test]
    fn test_bulk_defense_sanitized() {
        let stats = build(&[StatOption::defense(DefenseStats {
            hp: -1.0,
            armor: 30.0,
            target_priority: 4.0,
            ..DefenseStats::default()
        })]);
        assert!((stats.defense.hp - 0.0).abs() < f64::EPSILON);
        assert!((stats.defense.armor - 30.0).abs() < f64::EPSILON);
        assert!((stats.defense.target_priority - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_with_is_idempotent() {
        let first = build(&[
            StatOption::attack_damage(60.0),
            StatOption::attack_speed(0.9),
            StatOption::armor(30.0),
            StatOption::mana(0.0, 60.0, 30.0, 5.0, 0.0),
            StatOption::crit_damage(1.4),
            StatOption::omnivamp(0.0, 0.0, 0.10),
        ]);
        let second = first.with(&[]).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_with_leaves_original_untouched() {
        let base = build(&[StatOption::attack_damage(10.0)]);
        let changed = base.with(&[StatOption::attack_damage(20.0)]).unwrap();
        assert!((base.offense.attack_damage - 10.0).abs() < f64::EPSILON);
        assert!((changed.offense.attack_damage - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_non_finite_offense_and_defense_caught_by_validation() {
        for option in [
            StatOption::attack_damage(f64::NAN),
            StatOption::attack_damage(f64::INFINITY),
            StatOption::attack_damage(f64::NEG_INFINITY),
            StatOption::armor(f64::NAN),
            StatOption::armor(f64::INFINITY),
            StatOption::armor(f64::NEG_INFINITY),
            StatOption::omnivamp(0.0, 0.2, f64::NAN),
            StatOption::omnivamp(0.0, 0.2, f64::INFINITY),
            StatOption::omnivamp(0.0, f64::NEG_INFINITY, 0.0),
            StatOption::omnivamp(0.0, f64::INFINITY, 0.1),
            StatOption::crit_damage(f64::NEG_INFINITY),
            StatOption::crit_damage(f64::INFINITY),
            StatOption::target_priority(f64::INFINITY),
            StatOption::target_priority(f64::NEG_INFINITY),
        ] {
            let err = build_stats(&[option]).unwrap_err();
            assert!(matches!(err, StatsError::NonFinite { .. }), "{:?}", option);
            assert!(err.to_string().contains("non-finite"));
        }
    }

    #[test]
    fn test_non_finite_resource_rejected_at_boundary() {
        for v in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = build_stats(&[StatOption::mana(v, v, v, v, v)]).unwrap_err();
            assert_eq!(err, StatsError::NonFiniteResource);
            assert!(err.to_string().contains("non-finite"));
        }
    }

    #[test]
    fn test_non_finite_resource_substruct_rejected() {
        let err = build_stats(&[
            StatOption::range(1.0),
            StatOption::resource(ResourceStats {
                mana_max: 100.0,
                mana_regen: 5.0,
                mana_per_hit: 1.0,
                mana_from_damage: ManaFromDamage {
                    enabled: true,
                    pre_mitigation_ratio: f64::NAN,
                    ..ManaFromDamage::default()
                },
                ..ResourceStats::default()
            }),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("resource contains non-finite"));

        let err = build_stats(&[StatOption::mana_from_damage(true, f64::NAN, 0.03, 40.0)]).unwrap_err();
        assert!(err.to_string().contains("non-finite"));
    }

    #[test]
    fn test_failing_step_short_circuits() {
        // The range violation below would also fail, but the resource guard fires first
        let err = build_stats(&[
            StatOption::mana(f64::NAN, 0.0, 0.0, 0.0, 0.0),
            StatOption::range(0.5),
        ])
        .unwrap_err();
        assert_eq!(err, StatsError::NonFiniteResource);
    }

    #[test]
    fn test_range_gate() {
        let err = build_stats(&[StatOption::range(0.5)]).unwrap_err();
        assert!(err.to_string().to_lowercase().contains("range"));
        assert!(build_stats(&[StatOption::range(1.0)]).is_ok());
        assert!(build_stats(&[StatOption::range(3.0)]).is_ok());
    }
}
