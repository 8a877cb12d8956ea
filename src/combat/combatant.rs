//! Combatant - one participant's mutable per-match state
//!
//! Health, active status effects, remaining skill charges and the turn
//! counter all live here; the archetype it points at stays immutable and
//! shared.

use crate::combat::archetype::Archetype;
use crate::combat::constants::{EVADE_ARMOR_BONUS, NAME_MAX_LEN, NAME_MIN_LEN};
use crate::combat::effect::{EffectKind, StatusEffect, TickAction};
use crate::combat::events::{CombatEvent, EventSink};
use crate::combat::skill::{Charges, Skill};
use crate::core::error::{EngineError, Result};
use crate::core::types::PlayerId;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Combatant {
    id: PlayerId,
    name: String,
    archetype: Arc<Archetype>,
    health: u32,
    effects: Vec<StatusEffect>,
    /// Remaining uses per limited-charge skill; unlimited skills are absent
    charges: HashMap<String, u32>,
    turns_taken: u32,
}

impl Combatant {
    /// Fails with `InvalidName` unless the display name is 2-20 characters.
    pub fn new(id: PlayerId, name: &str, archetype: Arc<Archetype>) -> Result<Self> {
        let len = name.chars().count();
        if len < NAME_MIN_LEN || len > NAME_MAX_LEN {
            return Err(EngineError::InvalidName(name.to_string()));
        }

        let charges = archetype
            .skills()
            .iter()
            .filter_map(|skill| match skill.charges() {
                Charges::Limited(n) => Some((skill.name().to_string(), n)),
                Charges::Unlimited => None,
            })
            .collect();

        Ok(Self {
            id,
            name: name.to_string(),
            health: archetype.max_health(),
            archetype,
            effects: Vec::new(),
            charges,
            turns_taken: 0,
        })
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn archetype(&self) -> &Archetype {
        &self.archetype
    }

    pub(crate) fn archetype_arc(&self) -> Arc<Archetype> {
        Arc::clone(&self.archetype)
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn max_health(&self) -> u32 {
        self.archetype.max_health()
    }

    pub fn is_defeated(&self) -> bool {
        self.health == 0
    }

    /// Base armor plus the Evade bonus while an Evade effect is active
    pub fn effective_armor(&self) -> u32 {
        let evade = if self.has_status_effect(EffectKind::Evade) {
            EVADE_ARMOR_BONUS
        } else {
            0
        };
        self.archetype.base_armor() + evade
    }

    /// Turns this combatant has taken so far
    pub fn turns_taken(&self) -> u32 {
        self.turns_taken
    }

    pub(crate) fn begin_turn(&mut self) {
        self.turns_taken += 1;
    }

    /// Apply damage, clamped to remaining health. Returns the amount
    /// actually applied; never fails.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let applied = amount.min(self.health);
        self.health -= applied;
        applied
    }

    /// Restore health, clamped to the archetype's pool size. Returns the
    /// amount actually applied; never fails.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let applied = amount.min(self.max_health() - self.health);
        self.health += applied;
        applied
    }

    /// Remaining uses of a skill; `None` means unlimited
    pub fn charges_left(&self, skill_name: &str) -> Option<u32> {
        self.charges.get(skill_name).copied()
    }

    pub(crate) fn spend_charge(&mut self, skill_name: &str) {
        if let Some(left) = self.charges.get_mut(skill_name) {
            *left = left.saturating_sub(1);
        }
    }

    /// The archetype catalog filtered to skills with uses remaining.
    ///
    /// Fails with `NoSkillsAvailable` if everything is spent - archetype
    /// validation guarantees an unlimited skill, so this only fires on a
    /// malformed hand-built archetype.
    pub fn usable_skills(&self) -> Result<Vec<&Skill>> {
        let usable: Vec<&Skill> = self
            .archetype
            .skills()
            .iter()
            .filter(|skill| self.charges_left(skill.name()) != Some(0))
            .collect();

        if usable.is_empty() {
            return Err(EngineError::NoSkillsAvailable);
        }
        Ok(usable)
    }

    /// Read-only view of active effects, in the order they were attached
    pub fn status_effects(&self) -> &[StatusEffect] {
        &self.effects
    }

    pub fn has_status_effect(&self, kind: EffectKind) -> bool {
        self.effects.iter().any(|e| e.kind() == kind)
    }

    /// Attach a status effect.
    ///
    /// A non-positive duration is silently ignored by design (permissive
    /// policy, not an error): skills may configure instant-only effects.
    /// Reapplying an active kind replaces it with a fresh instance -
    /// durations reset, they never stack.
    pub fn add_status_effect(&mut self, kind: EffectKind, duration: u32, sink: &mut dyn EventSink) {
        if duration == 0 {
            return;
        }
        self.effects.retain(|e| e.kind() != kind);
        self.effects.push(StatusEffect::new(kind, duration));
        sink.emit(CombatEvent::EffectApplied {
            target: self.name.clone(),
            kind,
            duration,
        });
    }

    /// Remove an active effect of the given kind, emitting its expiry.
    /// Returns the number removed (0 or 1, effects never stack).
    pub fn remove_status_effect(&mut self, kind: EffectKind, sink: &mut dyn EventSink) -> usize {
        let before = self.effects.len();
        self.effects.retain(|e| e.kind() != kind);
        let removed = before - self.effects.len();
        for _ in 0..removed {
            sink.emit(CombatEvent::EffectExpired {
                target: self.name.clone(),
                kind,
            });
        }
        removed
    }

    /// Round update: tick every active effect in attach order, apply any
    /// per-turn damage/regen, then drop expired effects, emitting their
    /// expiries in attach order.
    pub fn advance_status_effects(&mut self, sink: &mut dyn EventSink) {
        let mut actions = Vec::new();
        for effect in &mut self.effects {
            if let Some(action) = effect.tick() {
                actions.push(action);
            }
        }
        for action in actions {
            match action {
                TickAction::Damage(amount) => {
                    let applied = self.take_damage(amount);
                    sink.emit(CombatEvent::BurnTick {
                        target: self.name.clone(),
                        amount: applied,
                    });
                }
                TickAction::Heal(amount) => {
                    let applied = self.heal(amount);
                    sink.emit(CombatEvent::RegenTick {
                        target: self.name.clone(),
                        amount: applied,
                    });
                }
            }
        }

        let mut kept = Vec::with_capacity(self.effects.len());
        for effect in std::mem::take(&mut self.effects) {
            if effect.expired() {
                sink.emit(CombatEvent::EffectExpired {
                    target: self.name.clone(),
                    kind: effect.kind(),
                });
            } else {
                kept.push(effect);
            }
        }
        self.effects = kept;
    }
}
