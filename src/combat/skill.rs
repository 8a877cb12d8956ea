//! Skill definitions and the skill-resolution algorithm
//!
//! A [`Skill`] is immutable data owned by its archetype; per-match charge
//! counters live on the combatant using it. [`Skill::resolve`] is the heart
//! of the engine: hit/miss opposed rolls, damage/healing computation and
//! status-effect application all happen here.

use crate::combat::combatant::Combatant;
use crate::combat::constants::{HIT_DIE_SIDES, MAX_HIT_BONUS, RIPOSTE_DAMAGE};
use crate::combat::dice::Dice;
use crate::combat::effect::EffectKind;
use crate::combat::events::{CombatEvent, EventSink};
use crate::core::error::{EngineError, Result};
use serde::{Deserialize, Serialize};

/// Whether a skill affects its user or the opponent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetMode {
    /// Self-targeted skills are assumed to be beneficial
    #[serde(rename = "self")]
    SelfTarget,
    #[default]
    Enemy,
}

/// How many times a skill can be used per match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Charges {
    Unlimited,
    Limited(u32),
}

/// Status effect configured on a skill: what to apply and for how long.
///
/// A duration of 0 means the effect is instant-only (e.g. Cure healing
/// without attaching anything) and nothing gets attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectSpec {
    pub kind: EffectKind,
    #[serde(default)]
    pub duration: u32,
}

/// Raw, serializable skill definition. Validated into a [`Skill`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillDef {
    pub name: String,
    #[serde(default)]
    pub damage_min: u32,
    #[serde(default)]
    pub damage_max: u32,
    #[serde(default = "default_hit_bonus")]
    pub hit_bonus: u32,
    /// Uses per match; omitted means unlimited
    #[serde(default)]
    pub charges: Option<u32>,
    #[serde(default)]
    pub target: TargetMode,
    #[serde(default)]
    pub effect: Option<EffectSpec>,
    /// Opaque display data, passed through unmodified
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub description: String,
}

fn default_hit_bonus() -> u32 {
    10
}

/// Result of resolving one skill use
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Name of the skill that was used
    pub skill: String,
    /// Damage or healing actually applied (post-clamp). `None` means the
    /// attack missed and had no effect, distinct from a numeric zero.
    pub applied: Option<u32>,
    pub missed: bool,
    /// Opposed rolls, present for enemy-targeted resolutions
    pub rolls: Option<OpposedRolls>,
}

/// The opposed attack/defense rolls of one enemy-targeted resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpposedRolls {
    pub attack: u32,
    pub defense: u32,
}

/// An immutable, validated skill definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    name: String,
    damage_min: u32,
    damage_max: u32,
    hit_bonus: u32,
    charges: Charges,
    target: TargetMode,
    effect: Option<EffectSpec>,
    icon: String,
    description: String,
}

impl Skill {
    pub fn new(def: SkillDef) -> Result<Self> {
        if def.name.is_empty() {
            return Err(EngineError::InvalidSkill("skill name is empty".into()));
        }
        if def.damage_min > def.damage_max {
            return Err(EngineError::InvalidSkill(format!(
                "{}: damage_min {} exceeds damage_max {}",
                def.name, def.damage_min, def.damage_max
            )));
        }
        if def.hit_bonus > MAX_HIT_BONUS {
            return Err(EngineError::InvalidSkill(format!(
                "{}: hit bonus {} outside 0-{MAX_HIT_BONUS}",
                def.name, def.hit_bonus
            )));
        }
        let charges = match def.charges {
            None => Charges::Unlimited,
            Some(0) => {
                return Err(EngineError::InvalidSkill(format!(
                    "{}: limited charges must be positive",
                    def.name
                )))
            }
            Some(n) => Charges::Limited(n),
        };

        Ok(Self {
            name: def.name,
            damage_min: def.damage_min,
            damage_max: def.damage_max,
            hit_bonus: def.hit_bonus,
            charges,
            target: def.target,
            effect: def.effect,
            icon: def.icon,
            description: def.description,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn damage_min(&self) -> u32 {
        self.damage_min
    }

    pub fn damage_max(&self) -> u32 {
        self.damage_max
    }

    /// Attack bonus added to the d20 hit roll (0-20)
    pub fn hit_bonus(&self) -> u32 {
        self.hit_bonus
    }

    pub fn charges(&self) -> Charges {
        self.charges
    }

    pub fn target(&self) -> TargetMode {
        self.target
    }

    pub fn effect(&self) -> Option<EffectSpec> {
        self.effect
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Use this skill: attacker acts, defender receives.
    ///
    /// Fails with `ChargeExhausted` before any state changes if the
    /// attacker's charge counter for this skill is spent. The damage roll
    /// is always drawn, even when the attack then misses (the roll is
    /// pre-declared and discarded), so pacing decisions outside the engine
    /// cannot change randomness ordering.
    pub fn resolve(
        &self,
        attacker: &mut Combatant,
        defender: &mut Combatant,
        dice: &mut dyn Dice,
        sink: &mut dyn EventSink,
    ) -> Result<Outcome> {
        if attacker.charges_left(&self.name) == Some(0) {
            return Err(EngineError::ChargeExhausted(self.name.clone()));
        }

        let roll = dice.between(self.damage_min, self.damage_max);
        attacker.spend_charge(&self.name);

        match self.target {
            TargetMode::SelfTarget => Ok(self.resolve_on_self(roll, attacker, sink)),
            TargetMode::Enemy => Ok(self.resolve_on_enemy(roll, attacker, defender, dice, sink)),
        }
    }

    fn resolve_on_self(
        &self,
        roll: u32,
        attacker: &mut Combatant,
        sink: &mut dyn EventSink,
    ) -> Outcome {
        let mut applied = 0;

        if self.effect.is_some_and(|e| e.kind.heals_user()) {
            applied = attacker.heal(roll);
            sink.emit(CombatEvent::SelfHeal {
                actor: attacker.name().to_string(),
                amount: applied,
            });
        }
        if self.effect.is_some_and(|e| e.kind == EffectKind::Cure)
            && attacker.remove_status_effect(EffectKind::Burn, sink) > 0
        {
            sink.emit(CombatEvent::Cured {
                target: attacker.name().to_string(),
            });
        }
        if let Some(effect) = self.effect {
            // Duration 0 configures an instant-only effect; nothing attaches
            attacker.add_status_effect(effect.kind, effect.duration, sink);
        }

        tracing::debug!(skill = %self.name, actor = %attacker.name(), applied, "self skill resolved");
        Outcome {
            skill: self.name.clone(),
            applied: Some(applied),
            missed: false,
            rolls: None,
        }
    }

    fn resolve_on_enemy(
        &self,
        roll: u32,
        attacker: &mut Combatant,
        defender: &mut Combatant,
        dice: &mut dyn Dice,
        sink: &mut dyn EventSink,
    ) -> Outcome {
        let attack = dice.die(HIT_DIE_SIDES) + self.hit_bonus;
        let defense = dice.die(HIT_DIE_SIDES) + defender.effective_armor();
        let rolls = OpposedRolls { attack, defense };

        if attack < defense {
            sink.emit(CombatEvent::Miss {
                attacker: attacker.name().to_string(),
                defender: defender.name().to_string(),
                skill: self.name.clone(),
                attack_roll: attack,
                defense_roll: defense,
            });
            tracing::debug!(skill = %self.name, attack, defense, "attack missed");
            return Outcome {
                skill: self.name.clone(),
                applied: None,
                missed: true,
                rolls: Some(rolls),
            };
        }

        let applied = defender.take_damage(roll);
        sink.emit(CombatEvent::Attack {
            attacker: attacker.name().to_string(),
            defender: defender.name().to_string(),
            skill: self.name.clone(),
            damage: applied,
            attack_roll: attack,
            defense_roll: defense,
        });

        if let Some(effect) = self.effect {
            if effect.kind == EffectKind::Riposte {
                // Riposte arms the attacker against future incoming attacks
                attacker.add_status_effect(effect.kind, effect.duration, sink);
            } else {
                defender.add_status_effect(effect.kind, effect.duration, sink);
            }
        }

        // A defender already riposting strikes back in the same resolution
        if defender.has_status_effect(EffectKind::Riposte) {
            let retaliation = attacker.take_damage(RIPOSTE_DAMAGE);
            sink.emit(CombatEvent::Riposted {
                attacker: attacker.name().to_string(),
                defender: defender.name().to_string(),
                amount: retaliation,
            });
        }

        tracing::debug!(skill = %self.name, attack, defense, applied, "attack landed");
        Outcome {
            skill: self.name.clone(),
            applied: Some(applied),
            missed: false,
            rolls: Some(rolls),
        }
    }
}
