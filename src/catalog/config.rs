//! Catalog loaders for external archetype definitions
//!
//! The engine accepts archetypes as data; these loaders parse a catalog
//! from TOML or JSON and run it through the same validation as the builtin
//! tables, so future classes never touch the resolution algorithm.

use crate::combat::archetype::{Archetype, ArchetypeDef};
use crate::core::error::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Serializable catalog: a list of archetype definitions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDef {
    pub archetypes: Vec<ArchetypeDef>,
}

impl CatalogDef {
    /// Validate every definition, producing shareable archetypes
    pub fn build(self) -> Result<Vec<Arc<Archetype>>> {
        self.archetypes
            .into_iter()
            .map(|def| Archetype::new(def).map(Arc::new))
            .collect()
    }
}

/// Parse and validate a TOML catalog
pub fn from_toml(source: &str) -> Result<Vec<Arc<Archetype>>> {
    let catalog: CatalogDef = toml::from_str(source)?;
    catalog.build()
}

/// Parse and validate a JSON catalog
pub fn from_json(source: &str) -> Result<Vec<Arc<Archetype>>> {
    let catalog: CatalogDef = serde_json::from_str(source)?;
    catalog.build()
}
