//! Shared loot group loader.

use std::collections::BTreeMap;
use std::path::Path;

use combat_core::{LootEntry, LootGroupId};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LootGroupCatalog {
    pub groups: BTreeMap<LootGroupId, Vec<LootEntry>>,
}

/// Loader for shared loot groups from RON files.
pub struct LootGroupLoader;

impl LootGroupLoader {
    pub fn load(path: &Path) -> LoadResult<BTreeMap<LootGroupId, Vec<LootEntry>>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<BTreeMap<LootGroupId, Vec<LootEntry>>> {
        let catalog: LootGroupCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse loot group RON: {}", e))?;

        for (id, entries) in &catalog.groups {
            if let Some(entry) = entries
                .iter()
                .find(|entry| !(0.0..=1.0).contains(&entry.chance))
            {
                anyhow::bail!(
                    "Loot group '{}' gives '{}' an out-of-range chance {}",
                    id,
                    entry.item_id,
                    entry.chance
                );
            }
        }

        Ok(catalog.groups)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_groups_by_id() {
        let groups = LootGroupLoader::parse(
            r#"(
                groups: {
                    "goblin_common_junk": [
                        (item_id: "pebble_shiny", chance: 0.8),
                        (item_id: "goblin_ear", chance: 0.5),
                    ],
                },
            )"#,
        )
        .unwrap();

        let junk = &groups[&LootGroupId::from("goblin_common_junk")];
        assert_eq!(junk.len(), 2);
        assert_eq!(junk[1].chance, 0.5);
    }

    #[test]
    fn rejects_out_of_range_chance() {
        let err = LootGroupLoader::parse(
            r#"(groups: {"broken": [(item_id: "pebble_shiny", chance: 1.5)]})"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("out-of-range"));
    }
}
