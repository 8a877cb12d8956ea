//! Dice rolling abstraction
//!
//! The resolution rules only ever need two draws: a single die (opposed d20
//! rolls) and an inclusive uniform range (damage/healing rolls). Putting
//! them behind a trait keeps the engine deterministic under test and lets a
//! match be replayed from a seed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;

pub trait Dice {
    /// Roll one die, returning a value in `1..=sides`
    fn die(&mut self, sides: u32) -> u32;

    /// Draw uniformly from `min..=max` (inclusive both ends; `min <= max`)
    fn between(&mut self, min: u32, max: u32) -> u32;
}

/// ChaCha8-backed dice. Seed a match to make it reproducible.
pub struct SeededDice {
    rng: ChaCha8Rng,
}

impl SeededDice {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }
}

impl Dice for SeededDice {
    fn die(&mut self, sides: u32) -> u32 {
        self.rng.gen_range(1..=sides)
    }

    fn between(&mut self, min: u32, max: u32) -> u32 {
        self.rng.gen_range(min..=max)
    }
}

/// Replays a fixed script of rolls, in order, ignoring the requested bounds
/// except to clamp range draws. For deterministic tests and replay tooling.
///
/// Panics if the script runs dry; a dry script is a bug in the caller.
pub struct ScriptedDice {
    rolls: VecDeque<u32>,
}

impl ScriptedDice {
    pub fn new(rolls: impl IntoIterator<Item = u32>) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
        }
    }

    fn next(&mut self) -> u32 {
        self.rolls.pop_front().expect("dice script exhausted")
    }
}

impl Dice for ScriptedDice {
    fn die(&mut self, _sides: u32) -> u32 {
        self.next()
    }

    fn between(&mut self, min: u32, max: u32) -> u32 {
        self.next().clamp(min, max)
    }
}
