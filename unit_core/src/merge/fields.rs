//! Field tables for the stats sub-groups

use super::{apply_fields, FieldDescriptor, FieldKind, FieldTable};
use crate::stats::{DefenseStats, ManaFromDamage, OffenseStats, Omnivamp, ResourceStats, Stats};

impl FieldTable for Stats {
    const FIELDS: &'static [FieldDescriptor<Self>] = &[
        FieldDescriptor {
            key: "offense",
            kind: FieldKind::Group(|s, doc, path, report| apply_fields(&mut s.offense, doc, path, report)),
        },
        FieldDescriptor {
            key: "defense",
            kind: FieldKind::Group(|s, doc, path, report| apply_fields(&mut s.defense, doc, path, report)),
        },
        FieldDescriptor {
            key: "resource",
            kind: FieldKind::Group(|s, doc, path, report| apply_fields(&mut s.resource, doc, path, report)),
        },
    ];
}

impl FieldTable for OffenseStats {
    const FIELDS: &'static [FieldDescriptor<Self>] = &[
        FieldDescriptor {
            key: "range",
            kind: FieldKind::Number(|o, v| o.range = v),
        },
        FieldDescriptor {
            key: "base_attack_damage",
            kind: FieldKind::Number(|o, v| o.base_attack_damage = v),
        },
        FieldDescriptor {
            key: "attack_damage",
            kind: FieldKind::Number(|o, v| o.attack_damage = v),
        },
        FieldDescriptor {
            key: "ability_power",
            kind: FieldKind::Number(|o, v| o.ability_power = v),
        },
        FieldDescriptor {
            key: "attack_speed",
            kind: FieldKind::Number(|o, v| o.attack_speed = v),
        },
        FieldDescriptor {
            key: "critical_strike_chance",
            kind: FieldKind::Number(|o, v| o.crit_chance = v),
        },
        FieldDescriptor {
            key: "critical_strike_damage",
            kind: FieldKind::Number(|o, v| o.crit_damage = v),
        },
        FieldDescriptor {
            key: "omnivamp",
            kind: FieldKind::Group(|o, doc, path, report| apply_fields(&mut o.omnivamp, doc, path, report)),
        },
        FieldDescriptor {
            key: "damage_amp",
            kind: FieldKind::Number(|o, v| o.damage_amp = v),
        },
    ];
}

impl FieldTable for Omnivamp {
    const FIELDS: &'static [FieldDescriptor<Self>] = &[
        FieldDescriptor {
            key: "omnivamp_min",
            kind: FieldKind::Number(|o, v| o.min = v),
        },
        FieldDescriptor {
            key: "omnivamp_max",
            kind: FieldKind::Number(|o, v| o.max = v),
        },
        FieldDescriptor {
            key: "current_omnivamp",
            kind: FieldKind::Number(|o, v| o.current = v),
        },
    ];
}

impl FieldTable for DefenseStats {
    const FIELDS: &'static [FieldDescriptor<Self>] = &[
        FieldDescriptor {
            key: "hp",
            kind: FieldKind::Number(|d, v| d.hp = v),
        },
        FieldDescriptor {
            key: "armor",
            kind: FieldKind::Number(|d, v| d.armor = v),
        },
        FieldDescriptor {
            key: "magic_resist",
            kind: FieldKind::Number(|d, v| d.magic_resist = v),
        },
        FieldDescriptor {
            key: "durability",
            kind: FieldKind::Number(|d, v| d.durability = v),
        },
        FieldDescriptor {
            key: "target_priority",
            kind: FieldKind::Number(|d, v| d.target_priority = v),
        },
    ];
}

impl FieldTable for ResourceStats {
    const FIELDS: &'static [FieldDescriptor<Self>] = &[
        FieldDescriptor {
            key: "mana_min",
            kind: FieldKind::Number(|r, v| r.mana_min = v),
        },
        FieldDescriptor {
            key: "mana_max",
            kind: FieldKind::Number(|r, v| r.mana_max = v),
        },
        FieldDescriptor {
            key: "mana_start",
            kind: FieldKind::Number(|r, v| r.mana_start = v),
        },
        FieldDescriptor {
            key: "mana_regen",
            kind: FieldKind::Number(|r, v| r.mana_regen = v),
        },
        FieldDescriptor {
            key: "mana_from_damage",
            kind: FieldKind::Group(|r, doc, path, report| apply_fields(&mut r.mana_from_damage, doc, path, report)),
        },
        FieldDescriptor {
            key: "mana_per_hit",
            kind: FieldKind::Number(|r, v| r.mana_per_hit = v),
        },
    ];
}

impl FieldTable for ManaFromDamage {
    const FIELDS: &'static [FieldDescriptor<Self>] = &[
        FieldDescriptor {
            key: "enabled",
            kind: FieldKind::Flag(|m, v| m.enabled = v),
        },
        FieldDescriptor {
            key: "pre_mitigation_ratio",
            kind: FieldKind::Number(|m, v| m.pre_mitigation_ratio = v),
        },
        FieldDescriptor {
            key: "post_mitigation_ratio",
            kind: FieldKind::Number(|m, v| m.post_mitigation_ratio = v),
        },
        FieldDescriptor {
            key: "per_instance_cap",
            kind: FieldKind::Number(|m, v| m.per_instance_cap = v),
        },
    ];
}
