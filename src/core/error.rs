use thiserror::Error;

/// Engine-level failures.
///
/// Validation variants (`InvalidName`, `InvalidArchetype`, `InvalidSkill`)
/// are rejected at construction time and never leave partially built state
/// behind. Rule violations (`ChargeExhausted`, `UnknownSkill`,
/// `NoSkillsAvailable`, `MatchAlreadyEnded`, `NoActiveTurn`) leave engine
/// state unchanged.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid name {0:?}: must be 2-20 characters")]
    InvalidName(String),

    #[error("Invalid archetype: {0}")]
    InvalidArchetype(String),

    #[error("Invalid skill: {0}")]
    InvalidSkill(String),

    #[error("No uses of {0} remain this match")]
    ChargeExhausted(String),

    #[error("Unknown skill: {0}")]
    UnknownSkill(String),

    #[error("No skills available to use")]
    NoSkillsAvailable,

    #[error("The match has already ended")]
    MatchAlreadyEnded,

    #[error("No turn is in progress")]
    NoActiveTurn,

    #[error("Engine invariant violated: {0}")]
    Internal(String),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
