//! Item catalog loader.

use std::path::Path;

use combat_core::{CombatConfig, ItemDefinition};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};
use crate::records::ItemRecord;

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub items: Vec<ItemRecord>,
}

/// Loader for item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load item catalog from a RON file.
    ///
    /// Unrecognized effect keys are kept as inert effects, never rejected.
    /// Timed effects without a `duration` key last `config.item_effect_duration` turns.
    pub fn load(path: &Path, config: &CombatConfig) -> LoadResult<Vec<ItemDefinition>> {
        let content = read_file(path)?;
        Self::parse(&content, config)
    }

    pub fn parse(content: &str, config: &CombatConfig) -> LoadResult<Vec<ItemDefinition>> {
        let catalog: ItemCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        Ok(catalog
            .items
            .into_iter()
            .map(|record| record.into_definition(config.item_effect_duration))
            .collect())
    }
}
