//! Status effects - timed modifiers attached to a combatant
//!
//! Valid kinds and what they do while active:
//! - `Heal`    - health regen over time: 10 health/round
//! - `Cure`    - instant heal + cures burning (rarely attached with a duration)
//! - `Evade`   - +15 defense bonus
//! - `Burn`    - damage over time: 10 damage/round
//! - `Stun`    - affected combatant skips their turn
//! - `Riposte` - retaliates against incoming attacks for 15 damage
//!
//! Evade, Stun and Riposte do nothing on tick beyond counting down; their
//! effect is read passively by armor computation, the turn sequencer and
//! attack resolution respectively.

use crate::combat::constants::{BURN_TICK_DAMAGE, HEAL_TICK_AMOUNT};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of status-effect kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectKind {
    Heal,
    Cure,
    Evade,
    Burn,
    Stun,
    Riposte,
}

impl EffectKind {
    /// Display name shown next to a combatant's active effects
    pub fn display_name(self) -> &'static str {
        match self {
            EffectKind::Heal => "Health regen",
            EffectKind::Cure => "Healing",
            EffectKind::Evade => "Evading",
            EffectKind::Burn => "Burning",
            EffectKind::Stun => "Stunned",
            EffectKind::Riposte => "Riposting",
        }
    }

    /// Does a skill carrying this effect heal its user on resolution?
    pub fn heals_user(self) -> bool {
        matches!(self, EffectKind::Heal | EffectKind::Cure)
    }
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Side effect produced by ticking an active status effect.
///
/// The effect itself holds no reference back to its combatant; the owner
/// applies the action to its own health pool and emits the matching event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickAction {
    Damage(u32),
    Heal(u32),
}

/// One active, timed modifier on a combatant.
///
/// Owned exclusively by the combatant it is attached to. An effect whose
/// remaining duration reaches 0 is dropped by the owner at the end of the
/// same tick pass, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEffect {
    kind: EffectKind,
    remaining: u32,
}

impl StatusEffect {
    /// Callers must filter out non-positive durations before constructing.
    pub(crate) fn new(kind: EffectKind, duration: u32) -> Self {
        debug_assert!(duration > 0);
        Self {
            kind,
            remaining: duration,
        }
    }

    pub fn kind(&self) -> EffectKind {
        self.kind
    }

    /// Rounds left until this effect expires
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn expired(&self) -> bool {
        self.remaining == 0
    }

    /// Round update: count down and report any per-turn side effect
    pub(crate) fn tick(&mut self) -> Option<TickAction> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        match self.kind {
            EffectKind::Burn => Some(TickAction::Damage(BURN_TICK_DAMAGE)),
            EffectKind::Heal => Some(TickAction::Heal(HEAL_TICK_AMOUNT)),
            _ => None,
        }
    }
}

impl fmt::Display for StatusEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.kind.display_name(), self.remaining)
    }
}
