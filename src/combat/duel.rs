//! The turn sequencer and termination authority for one match
//!
//! A [`Duel`] owns both combatants and drives the state machine
//! `AwaitingFirstTurn -> PlayerTurn(One) <-> PlayerTurn(Two) -> GameOver`.
//! Resolving an action and advancing the turn are separate calls so the
//! presentation layer can show an outcome before the next turn begins.

use crate::combat::archetype::Archetype;
use crate::combat::combatant::Combatant;
use crate::combat::constants::STUN_SKIP_BOUND;
use crate::combat::dice::Dice;
use crate::combat::effect::EffectKind;
use crate::combat::events::{CombatEvent, EventSink};
use crate::combat::skill::Outcome;
use crate::core::error::{EngineError, Result};
use crate::core::types::PlayerId;
use std::sync::Arc;

/// Where the match stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuelState {
    /// Constructed, but `advance_turn` has not been called yet
    AwaitingFirstTurn,
    PlayerTurn(PlayerId),
    GameOver { winner: PlayerId },
}

/// What `advance_turn` produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnResult {
    /// A new active turn began (any stun skips already processed)
    TurnStarted { actor: PlayerId, round: u32 },
    /// A combatant was knocked out; the match is frozen
    GameOver { winner: PlayerId },
}

#[derive(Debug)]
pub struct Duel {
    combatants: [Combatant; 2],
    state: DuelState,
    round: u32,
}

impl Duel {
    /// Start a match between two named combatants.
    ///
    /// Names must be 2-20 characters (`InvalidName`). Archetypes are taken
    /// as data; anything that passed [`Archetype::new`] validation plays.
    pub fn new(
        archetype_one: Arc<Archetype>,
        name_one: &str,
        archetype_two: Arc<Archetype>,
        name_two: &str,
    ) -> Result<Self> {
        let one = Combatant::new(PlayerId::One, name_one, archetype_one)?;
        let two = Combatant::new(PlayerId::Two, name_two, archetype_two)?;
        Ok(Self {
            combatants: [one, two],
            state: DuelState::AwaitingFirstTurn,
            round: 0,
        })
    }

    pub fn state(&self) -> DuelState {
        self.state
    }

    /// Round counter; increments each time both sides have taken an equal
    /// number of turns
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn combatant(&self, id: PlayerId) -> &Combatant {
        &self.combatants[id.index()]
    }

    /// The combatant whose turn it is, once the first turn has begun
    pub fn current_actor(&self) -> Option<&Combatant> {
        match self.state {
            DuelState::PlayerTurn(id) => Some(self.combatant(id)),
            _ => None,
        }
    }

    /// The combatant waiting for their turn
    pub fn opponent(&self) -> Option<&Combatant> {
        match self.state {
            DuelState::PlayerTurn(id) => Some(self.combatant(id.opponent())),
            _ => None,
        }
    }

    pub fn winner(&self) -> Option<PlayerId> {
        match self.state {
            DuelState::GameOver { winner } => Some(winner),
            _ => None,
        }
    }

    /// Resolve the acting combatant using the named skill against their
    /// opponent. Does NOT advance the turn; call [`Duel::advance_turn`]
    /// separately once the outcome has been displayed.
    pub fn resolve_action(
        &mut self,
        skill_name: &str,
        dice: &mut dyn Dice,
        sink: &mut dyn EventSink,
    ) -> Result<Outcome> {
        let actor = match self.state {
            DuelState::PlayerTurn(id) => id,
            DuelState::AwaitingFirstTurn => return Err(EngineError::NoActiveTurn),
            DuelState::GameOver { .. } => return Err(EngineError::MatchAlreadyEnded),
        };

        // Keep the archetype alive independently so the skill reference
        // does not pin a borrow of the attacker.
        let archetype = self.combatant(actor).archetype_arc();
        let skill = archetype.skill(skill_name)?;

        let (attacker, defender) = self.pair_mut(actor);
        skill.resolve(attacker, defender, dice, sink)
    }

    /// Hand the turn to the other side.
    ///
    /// Processes round counting, stun skips (iteratively, never
    /// recursively), per-turn status ticks and knockout detection. Fails
    /// with `MatchAlreadyEnded` once the match is over.
    pub fn advance_turn(&mut self, sink: &mut dyn EventSink) -> Result<TurnResult> {
        if let DuelState::GameOver { .. } = self.state {
            return Err(EngineError::MatchAlreadyEnded);
        }

        for _ in 0..STUN_SKIP_BOUND {
            // Damage from the previous action or a burn tick may already
            // have decided the match.
            if let Some(winner) = self.check_knockout(sink) {
                return Ok(TurnResult::GameOver { winner });
            }

            if self.combatants[0].turns_taken() == self.combatants[1].turns_taken() {
                self.round += 1;
            }

            let next = match self.state {
                DuelState::AwaitingFirstTurn => PlayerId::One,
                DuelState::PlayerTurn(current) => current.opponent(),
                DuelState::GameOver { .. } => return Err(EngineError::MatchAlreadyEnded),
            };
            self.state = DuelState::PlayerTurn(next);
            self.combatants[next.index()].begin_turn();

            // Stun consumes the turn but still decays while skipped.
            if self.combatant(next).has_status_effect(EffectKind::Stun) {
                sink.emit(CombatEvent::TurnSkipped {
                    round: self.round,
                    actor: self.combatant(next).name().to_string(),
                });
                self.combatants[next.index()].advance_status_effects(sink);
                continue;
            }

            sink.emit(CombatEvent::TurnStarted {
                round: self.round,
                actor: self.combatant(next).name().to_string(),
            });
            self.combatants[next.index()].advance_status_effects(sink);

            if let Some(winner) = self.check_knockout(sink) {
                return Ok(TurnResult::GameOver { winner });
            }

            tracing::debug!(round = self.round, actor = %self.combatant(next).name(), "turn started");
            return Ok(TurnResult::TurnStarted {
                actor: next,
                round: self.round,
            });
        }

        // Stun durations decay on every skip, so the loop always resolves
        // unless effect state is corrupt.
        Err(EngineError::Internal(
            "stun-skip bound exceeded without yielding a turn".into(),
        ))
    }

    fn check_knockout(&mut self, sink: &mut dyn EventSink) -> Option<PlayerId> {
        let loser = if self.combatants[0].is_defeated() {
            PlayerId::One
        } else if self.combatants[1].is_defeated() {
            PlayerId::Two
        } else {
            return None;
        };
        let winner = loser.opponent();
        self.state = DuelState::GameOver { winner };
        sink.emit(CombatEvent::GameOver {
            winner: self.combatant(winner).name().to_string(),
            loser: self.combatant(loser).name().to_string(),
        });
        tracing::debug!(winner = %self.combatant(winner).name(), "match over");
        Some(winner)
    }

    fn pair_mut(&mut self, actor: PlayerId) -> (&mut Combatant, &mut Combatant) {
        let (left, right) = self.combatants.split_at_mut(1);
        match actor {
            PlayerId::One => (&mut left[0], &mut right[0]),
            PlayerId::Two => (&mut right[0], &mut left[0]),
        }
    }
}
