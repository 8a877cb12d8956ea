//! Builtin archetype data tables
//!
//! Warrior, Rogue and Wizard are data, not code: each is an
//! [`ArchetypeDef`] literal the resolution algorithm knows nothing about.
//! New classes go through the same tables (or the `config` loaders).

use crate::combat::archetype::{Archetype, ArchetypeDef};
use crate::combat::effect::EffectKind;
use crate::combat::skill::{EffectSpec, SkillDef, TargetMode};
use crate::core::error::Result;
use std::sync::Arc;

fn skill(name: &str, damage_min: u32, damage_max: u32, hit_bonus: u32) -> SkillDef {
    SkillDef {
        name: name.into(),
        damage_min,
        damage_max,
        hit_bonus,
        charges: None,
        target: TargetMode::Enemy,
        effect: None,
        icon: String::new(),
        description: String::new(),
    }
}

pub fn warrior() -> ArchetypeDef {
    ArchetypeDef {
        name: "Warrior".into(),
        max_health: 400,
        base_armor: 5,
        icon: "warrior.png".into(),
        style: "fighterclass-warrior".into(),
        skills: vec![
            SkillDef {
                icon: "Slash.png".into(),
                description: "Slash opponent for 10-15 damage. (+15 attack)".into(),
                ..skill("Slash", 10, 15, 15)
            },
            SkillDef {
                icon: "Bash.png".into(),
                description: "Bash opponent for 5-40 damage. (+10 attack)".into(),
                ..skill("Bash", 5, 40, 10)
            },
            SkillDef {
                charges: Some(3),
                effect: Some(EffectSpec {
                    kind: EffectKind::Stun,
                    duration: 1,
                }),
                icon: "Bonk.png".into(),
                description: "Bonk opponent on the head for 15-20 damage, \
                              stunning them for 1 round. (+10 attack)"
                    .into(),
                ..skill("Bonk!", 15, 20, 10)
            },
            SkillDef {
                charges: Some(3),
                effect: Some(EffectSpec {
                    kind: EffectKind::Burn,
                    duration: 2,
                }),
                icon: "smash.png".into(),
                description: "Hit opponent with a flaming blade for 50 damage \
                              and inflict burn for 2 rounds. (+5 attack)"
                    .into(),
                ..skill("Flame blade", 50, 50, 5)
            },
        ],
    }
}

pub fn rogue() -> ArchetypeDef {
    ArchetypeDef {
        name: "Rogue".into(),
        max_health: 300,
        base_armor: 4,
        icon: "rogue.png".into(),
        style: "fighterclass-rogue".into(),
        skills: vec![
            SkillDef {
                icon: "Stab.png".into(),
                description: "Stab opponent for 5-15 damage. (+15 attack)".into(),
                ..skill("Stab", 5, 15, 15)
            },
            SkillDef {
                charges: Some(5),
                effect: Some(EffectSpec {
                    kind: EffectKind::Riposte,
                    duration: 1,
                }),
                icon: "backstab.png".into(),
                description: "Backstab opponent for 40-70 damage and riposte \
                              incoming attacks for 1 turn, retaliating for 15 \
                              damage. (+10 attack)"
                    .into(),
                ..skill("Backstab", 40, 70, 10)
            },
            SkillDef {
                charges: Some(3),
                target: TargetMode::SelfTarget,
                effect: Some(EffectSpec {
                    kind: EffectKind::Evade,
                    duration: 3,
                }),
                icon: "evasion.png".into(),
                description: "Evade attacks for three rounds (+15 defense).".into(),
                ..skill("Evasion", 0, 0, 0)
            },
            SkillDef {
                charges: Some(3),
                target: TargetMode::SelfTarget,
                effect: Some(EffectSpec {
                    kind: EffectKind::Heal,
                    duration: 2,
                }),
                icon: "potion.png".into(),
                description: "Heal yourself for 30-35 health and regen 10 \
                              health for 2 rounds."
                    .into(),
                ..skill("Potion", 30, 35, 10)
            },
        ],
    }
}

pub fn wizard() -> ArchetypeDef {
    ArchetypeDef {
        name: "Wizard".into(),
        max_health: 200,
        base_armor: 3,
        icon: "mage.png".into(),
        style: "fighterclass-mage".into(),
        skills: vec![
            SkillDef {
                icon: "Rayoffrost.png".into(),
                description: "Freeze opponent with a ray of frost doing 10-15 \
                              damage. (+15 attack)"
                    .into(),
                ..skill("Ray of Frost", 10, 15, 15)
            },
            SkillDef {
                charges: Some(6),
                effect: Some(EffectSpec {
                    kind: EffectKind::Burn,
                    duration: 3,
                }),
                icon: "Ig-miss.png".into(),
                description: "Attempt to scorch opponent for 35-40 damage with \
                              a firebolt, burning for 10 damage over 3 rounds. \
                              (+5 attack)"
                    .into(),
                ..skill("Ig-miss", 35, 40, 10)
            },
            SkillDef {
                charges: Some(3),
                effect: Some(EffectSpec {
                    kind: EffectKind::Stun,
                    duration: 1,
                }),
                icon: "lightning.png".into(),
                description: "Electrocute opponent with a lightning bolt for \
                              50-60 damage, stunning for 1 round. (+10 attack)"
                    .into(),
                ..skill("Lightning", 50, 60, 10)
            },
            SkillDef {
                charges: Some(3),
                target: TargetMode::SelfTarget,
                effect: Some(EffectSpec {
                    kind: EffectKind::Cure,
                    duration: 0,
                }),
                icon: "heal.png".into(),
                description: "Heal yourself for 50 health and cure burning.".into(),
                ..skill("Heal", 50, 50, 10)
            },
        ],
    }
}

/// All builtin archetypes, validated and ready to share across a match
pub fn builtin() -> Result<Vec<Arc<Archetype>>> {
    [warrior(), rogue(), wizard()]
        .into_iter()
        .map(|def| Archetype::new(def).map(Arc::new))
        .collect()
}

/// Look up a builtin archetype by its display name
pub fn by_name(name: &str) -> Result<Option<Arc<Archetype>>> {
    Ok(builtin()?.into_iter().find(|a| a.name() == name))
}
