pub mod archetype;
pub mod combatant;
pub mod constants;
pub mod dice;
pub mod duel;
pub mod effect;
pub mod events;
pub mod skill;

pub use archetype::{Archetype, ArchetypeDef};
pub use combatant::Combatant;
pub use dice::{Dice, ScriptedDice, SeededDice};
pub use duel::{Duel, DuelState, TurnResult};
pub use effect::{EffectKind, StatusEffect};
pub use events::{CombatEvent, DiscardEvents, EventLog, EventSink};
pub use skill::{Charges, EffectSpec, OpposedRolls, Outcome, Skill, SkillDef, TargetMode};
