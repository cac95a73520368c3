//! Enemy template loader.

use std::path::Path;

use combat_core::{EnemyTemplate, LegacyLootTable};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::loaders::{LoadResult, read_file};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyCatalog {
    pub enemies: Vec<EnemyTemplate>,
}

/// Loader for enemy templates from RON files.
pub struct EnemyLoader;

impl EnemyLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<EnemyTemplate>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<EnemyTemplate>> {
        let catalog: EnemyCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse enemy catalog RON: {}", e))?;

        for enemy in &catalog.enemies {
            Self::validate(enemy)?;
        }

        Ok(catalog.enemies)
    }

    fn validate(enemy: &EnemyTemplate) -> LoadResult<()> {
        if enemy.health == 0 {
            anyhow::bail!("Enemy '{}' has zero health", enemy.id);
        }
        if enemy.attack_min > enemy.attack_max {
            anyhow::bail!(
                "Enemy '{}' has attack_min {} above attack_max {}",
                enemy.id,
                enemy.attack_min,
                enemy.attack_max
            );
        }

        for ability in &enemy.special_abilities {
            let stun_chance = ability.stun.map_or(0.0, |stun| stun.chance);
            if !(0.0..=1.0).contains(&ability.chance) || !(0.0..=1.0).contains(&stun_chance) {
                anyhow::bail!(
                    "Special ability '{}' of enemy '{}' has a chance outside [0, 1]",
                    ability.id,
                    enemy.id
                );
            }
        }

        let weighted = match &enemy.loot_table {
            Some(LegacyLootTable::Weighted(entries)) => entries.as_slice(),
            Some(LegacyLootTable::Guaranteed(_)) => {
                debug!(enemy = %enemy.id, "enemy still uses a flat loot table");
                &[]
            }
            None => &[],
        };
        if let Some(entry) = enemy
            .unique_loot
            .iter()
            .chain(weighted)
            .find(|entry| !(0.0..=1.0).contains(&entry.chance))
        {
            anyhow::bail!(
                "Enemy '{}' gives '{}' an out-of-range drop chance {}",
                enemy.id,
                entry.item_id,
                entry.chance
            );
        }

        Ok(())
    }
}
