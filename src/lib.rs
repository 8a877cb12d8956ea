//! Duel Arena - a two-player turn-based combat resolution engine
//!
//! The crate exposes a pure decision/state API: a presentation layer
//! constructs a [`combat::Duel`] from catalog archetypes, asks the active
//! combatant for usable skills, resolves the chosen action, then advances
//! the turn. Everything observable is reported through an injected
//! [`combat::EventSink`]; the engine itself performs no I/O.

pub mod catalog;
pub mod combat;
pub mod core;
