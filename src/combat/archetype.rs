//! Archetypes - static character-class definitions
//!
//! An archetype is a data record, not a type: base stats plus an ordered
//! skill catalog. New classes are new data tables (see `catalog`), never new
//! code paths in the resolution algorithm.

use crate::combat::constants::{NAME_MAX_LEN, NAME_MIN_LEN};
use crate::combat::skill::{Charges, Skill, SkillDef};
use crate::core::error::{EngineError, Result};
use serde::{Deserialize, Serialize};

/// Raw, serializable archetype definition. Validated into an [`Archetype`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchetypeDef {
    pub name: String,
    pub max_health: u32,
    pub base_armor: u32,
    pub skills: Vec<SkillDef>,
    /// Opaque display data, passed through unmodified
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub style: String,
}

/// A validated, immutable character class.
///
/// Shared by reference (`Arc`) across the combatants of a match; every
/// skill it references stays valid for the lifetime of any combatant
/// using it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Archetype {
    name: String,
    max_health: u32,
    base_armor: u32,
    skills: Vec<Skill>,
    icon: String,
    style: String,
}

impl Archetype {
    pub fn new(def: ArchetypeDef) -> Result<Self> {
        let name_len = def.name.chars().count();
        if name_len < NAME_MIN_LEN || name_len > NAME_MAX_LEN {
            return Err(EngineError::InvalidArchetype(format!(
                "name {:?} must be {NAME_MIN_LEN}-{NAME_MAX_LEN} characters",
                def.name
            )));
        }
        if def.max_health == 0 {
            return Err(EngineError::InvalidArchetype(format!(
                "{}: max health must be positive",
                def.name
            )));
        }
        if def.skills.is_empty() {
            return Err(EngineError::InvalidArchetype(format!(
                "{}: no skills assigned",
                def.name
            )));
        }

        let skills = def
            .skills
            .into_iter()
            .map(Skill::new)
            .collect::<Result<Vec<_>>>()?;

        for (i, skill) in skills.iter().enumerate() {
            if skills[..i].iter().any(|s| s.name() == skill.name()) {
                return Err(EngineError::InvalidArchetype(format!(
                    "{}: duplicate skill {:?}",
                    def.name,
                    skill.name()
                )));
            }
        }
        // Without at least one unlimited skill a combatant could run out of
        // legal actions mid-match; that is a configuration error here, not a
        // runtime condition.
        if !skills.iter().any(|s| s.charges() == Charges::Unlimited) {
            return Err(EngineError::InvalidArchetype(format!(
                "{}: needs at least one unlimited-use skill",
                def.name
            )));
        }

        Ok(Self {
            name: def.name,
            max_health: def.max_health,
            base_armor: def.base_armor,
            skills,
            icon: def.icon,
            style: def.style,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    pub fn base_armor(&self) -> u32 {
        self.base_armor
    }

    /// The full ordered skill catalog, usable or not
    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn style(&self) -> &str {
        &self.style
    }

    /// Look up a catalog entry by name
    pub fn skill(&self, name: &str) -> Result<&Skill> {
        self.skills
            .iter()
            .find(|s| s.name() == name)
            .ok_or_else(|| EngineError::UnknownSkill(name.to_string()))
    }
}
