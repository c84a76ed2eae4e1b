//! unit_demo - Assemble a sample unit from a roles config and print it
//!
//! ```text
//! unit_demo --roles unit_core/config/roles.json --label "Attack Tank"
//! ```

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use unit_core::{build_unit, default_roles, load_roles, OverrideMode, StatOption, Unit, UnitRequest};

#[derive(Parser, Debug)]
#[command(name = "unit_demo", about = "Build a unit from a roles config")]
struct Args {
    /// Roles config (.json or .toml); the embedded config is used when omitted
    #[arg(long)]
    roles: Option<PathBuf>,

    /// Log override discrepancies instead of failing
    #[arg(long)]
    lenient: bool,

    /// Primary role label
    #[arg(long, default_value = "Attack Tank")]
    label: String,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let schema = match &args.roles {
        Some(path) => match load_roles(path) {
            Ok(schema) => schema,
            Err(e) => {
                eprintln!("failed to load roles from {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => default_roles(),
    };
    let mode = if args.lenient {
        OverrideMode::Lenient
    } else {
        OverrideMode::Strict
    };
    let schema = schema.with_mode(mode);

    let request = UnitRequest::new("Garen", 1)
        .with_traits(["Warlord", "Vanguard"])
        .with_roles([args.label.clone()]);
    let options = [
        StatOption::hp(650.0),
        StatOption::armor(35.0),
        StatOption::magic_resist(35.0),
        StatOption::attack_damage(55.0),
        StatOption::attack_speed(0.55),
        StatOption::range(1.0),
        // mana(min, max, start, regen/s, per hit)
        StatOption::mana(0.0, 70.0, 30.0, 0.0, 10.0),
        StatOption::crit_chance(0.25),
        StatOption::crit_damage(1.4),
    ];

    match build_unit(request, &schema, &options) {
        Ok(unit) => {
            print_unit(&unit);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("failed to build unit: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn print_unit(unit: &Unit) {
    let s = &unit.stats;
    println!("\nUnit created successfully!");
    println!("- Id: {}", unit.id);
    println!("- Name: {}", unit.name);
    println!("- Cost: {}", unit.cost);
    println!("- Traits: {:?}", unit.traits);
    println!("- Roles: {:?}", unit.roles);

    println!("\nBase Stats:");
    println!("- HP: {:.0}", s.defense.hp);
    println!("- Armor: {:.0}", s.defense.armor);
    println!("- Magic Resist: {:.0}", s.defense.magic_resist);
    println!("- Attack Damage: {:.0}", s.offense.attack_damage);
    println!("- Ability Power: {:.0}", s.offense.ability_power);
    println!("- Attack Speed: {:.2}", s.offense.attack_speed);
    println!("- Range: {:.0}", s.offense.range);
    println!("- Crit Chance: {:.0}%", s.offense.crit_chance * 100.0);
    println!("- Crit Damage: {:.0}%", s.offense.crit_damage * 100.0);
    println!(
        "- Mana: {:.0}/{:.0} (start: {:.0}, regen: {:.1}/s, per-hit: {:.0})",
        s.resource.mana_min, s.resource.mana_max, s.resource.mana_start, s.resource.mana_regen, s.resource.mana_per_hit
    );
    let mfd = &s.resource.mana_from_damage;
    if mfd.enabled {
        println!(
            "- Mana from damage: {:.1}% pre / {:.1}% post mitigation (cap {:.1})",
            mfd.pre_mitigation_ratio * 100.0,
            mfd.post_mitigation_ratio * 100.0,
            mfd.per_instance_cap
        );
    }
}
