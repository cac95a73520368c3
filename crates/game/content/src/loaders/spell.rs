//! Spell catalog loader.

use std::path::Path;

use anyhow::Context;
use combat_core::SpellDefinition;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};
use crate::records::SpellRecord;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpellCatalog {
    pub spells: Vec<SpellRecord>,
}

/// Loader for spell catalog from RON files.
///
/// A record whose `type` or `special_effect` cannot be mapped fails the whole
/// load with the offending spell id in the error chain.
pub struct SpellLoader;

impl SpellLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<SpellDefinition>> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("in {}", path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<Vec<SpellDefinition>> {
        let catalog: SpellCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse spell catalog RON: {}", e))?;

        catalog
            .spells
            .into_iter()
            .map(|record| {
                let id = record.id.clone();
                SpellDefinition::try_from(record)
                    .with_context(|| format!("Failed to convert spell '{}'", id))
            })
            .collect()
    }
}
