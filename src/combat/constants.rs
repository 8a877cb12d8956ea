//! Combat tuning constants - all fixed values in one place
//!
//! Every flat modifier in the resolution rules lives here. All of these are
//! ADDITIVE, never multiplicative.

/// Sides on the opposed hit-resolution die
pub const HIT_DIE_SIDES: u32 = 20;

/// Upper bound of a skill's attack bonus (0..=20)
pub const MAX_HIT_BONUS: u32 = 20;

/// Flat damage dealt to a burning combatant at the start of their turn
pub const BURN_TICK_DAMAGE: u32 = 10;

/// Flat health restored to a regenerating combatant at the start of their turn
pub const HEAL_TICK_AMOUNT: u32 = 10;

/// Defense bonus granted by an active Evade effect
pub const EVADE_ARMOR_BONUS: u32 = 15;

/// Flat retaliation damage dealt by an active Riposte effect
pub const RIPOSTE_DAMAGE: u32 = 15;

/// Upper bound on consecutive stun-skipped turns processed by one
/// `advance_turn` call. Stun durations decay on every skip, so the bound is
/// unreachable unless effect bookkeeping is broken.
pub const STUN_SKIP_BOUND: u32 = 32;

/// Display-name length limits, shared by player names and archetype names
pub const NAME_MIN_LEN: usize = 2;
pub const NAME_MAX_LEN: usize = 20;
