//! Combat notifications
//!
//! Every observable thing the engine does is reported as a [`CombatEvent`]
//! through an [`EventSink`] owned by the caller. The engine never stores
//! events past emission and never performs I/O itself; the presentation
//! layer decides what to do with the log. `Display` renders each event as a
//! human-readable combat-log line.

use crate::combat::effect::EffectKind;
use std::fmt;

/// One entry of the ordered combat log
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombatEvent {
    /// A status effect was attached to a combatant
    EffectApplied {
        target: String,
        kind: EffectKind,
        duration: u32,
    },
    /// A status effect ran out or was explicitly removed
    EffectExpired { target: String, kind: EffectKind },
    /// A Cure skill removed an active Burn
    Cured { target: String },
    /// Burn dealt its per-turn damage
    BurnTick { target: String, amount: u32 },
    /// Heal restored its per-turn health
    RegenTick { target: String, amount: u32 },
    /// A self-targeted skill healed its user
    SelfHeal { actor: String, amount: u32 },
    /// An enemy-targeted skill landed
    Attack {
        attacker: String,
        defender: String,
        skill: String,
        damage: u32,
        attack_roll: u32,
        defense_roll: u32,
    },
    /// An enemy-targeted skill missed
    Miss {
        attacker: String,
        defender: String,
        skill: String,
        attack_roll: u32,
        defense_roll: u32,
    },
    /// The defender's active Riposte struck back
    Riposted {
        attacker: String,
        defender: String,
        amount: u32,
    },
    /// A new turn began
    TurnStarted { round: u32, actor: String },
    /// A stunned combatant lost their turn
    TurnSkipped { round: u32, actor: String },
    /// A combatant was knocked out
    GameOver { winner: String, loser: String },
}

impl fmt::Display for CombatEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CombatEvent::EffectApplied {
                target,
                kind,
                duration,
            } => match kind {
                EffectKind::Heal => write!(
                    f,
                    "{target} is regenerating health for {duration} rounds!"
                ),
                EffectKind::Cure => write!(f, "{target} is being healed for {duration} rounds!"),
                EffectKind::Evade => {
                    write!(f, "{target} is evading attacks for {duration} rounds!")
                }
                EffectKind::Burn => write!(f, "{target} is burning for {duration} rounds!"),
                EffectKind::Stun => write!(f, "{target} is stunned for {duration} rounds!"),
                EffectKind::Riposte => {
                    write!(f, "{target} is riposting attacks for {duration} rounds!")
                }
            },
            CombatEvent::EffectExpired { target, kind } => match kind {
                EffectKind::Heal => write!(f, "{target} stopped regenerating health."),
                EffectKind::Cure => write!(f, "{target} is no longer being healed."),
                EffectKind::Evade => write!(f, "{target} stopped evading attacks."),
                EffectKind::Burn => write!(f, "{target} is no longer burning."),
                EffectKind::Stun => write!(f, "{target} recovered from stun."),
                EffectKind::Riposte => write!(f, "{target} stopped riposting attacks."),
            },
            CombatEvent::Cured { target } => write!(f, "{target} cured themselves of burning."),
            CombatEvent::BurnTick { target, amount } => {
                write!(f, "{target} takes {amount} damage from burning.")
            }
            CombatEvent::RegenTick { target, amount } => {
                write!(f, "{target} regenerates {amount} health.")
            }
            CombatEvent::SelfHeal { actor, amount } => {
                write!(f, "{actor} healed themselves for {amount} health.")
            }
            CombatEvent::Attack {
                attacker,
                defender,
                skill,
                damage,
                attack_roll,
                defense_roll,
            } => write!(
                f,
                "{attacker} attacked {defender} with {skill} for {damage} damage. \
                 ({attack_roll} vs. {defense_roll})"
            ),
            CombatEvent::Miss {
                attacker,
                defender,
                skill,
                attack_roll,
                defense_roll,
            } => write!(
                f,
                "{attacker} attacked {defender} with {skill} but missed! \
                 ({attack_roll} vs. {defense_roll})"
            ),
            CombatEvent::Riposted {
                attacker,
                defender,
                amount,
            } => write!(
                f,
                "{defender} riposted {attacker}'s attack dealing {amount} damage in return."
            ),
            CombatEvent::TurnStarted { round, actor } => {
                write!(f, "Round {round}: {actor}'s turn!")
            }
            CombatEvent::TurnSkipped { round, actor } => {
                write!(f, "Round {round}: {actor} is stunned, skipping turn!")
            }
            CombatEvent::GameOver { winner, loser } => {
                write!(f, "GAME OVER: {loser} is knocked out, {winner} wins!")
            }
        }
    }
}

/// Receives the ordered notification stream of a match.
///
/// The sink is dependency-injected by the caller; the engine holds no
/// reference to any global presentation state.
pub trait EventSink {
    fn emit(&mut self, event: CombatEvent);
}

/// Vec-backed sink for callers that want to collect and drain the log
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<CombatEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// All events emitted since the last drain
    pub fn events(&self) -> &[CombatEvent] {
        &self.events
    }

    /// Take the accumulated events, leaving the log empty
    pub fn drain(&mut self) -> Vec<CombatEvent> {
        std::mem::take(&mut self.events)
    }
}

impl EventSink for EventLog {
    fn emit(&mut self, event: CombatEvent) {
        tracing::debug!(%event, "combat event");
        self.events.push(event);
    }
}

/// Sink for callers that do not care about the log
#[derive(Debug, Default)]
pub struct DiscardEvents;

impl EventSink for DiscardEvents {
    fn emit(&mut self, _event: CombatEvent) {}
}
