//! Data set shipped with the game, embedded at compile time.
use combat_core::{Catalog, CombatConfig};
use tracing::warn;

use crate::audit::dangling_references;
use crate::loaders::{
    ConfigLoader, EnemyLoader, ItemLoader, LoadResult, LootGroupLoader, SkillLoader, SpellLoader,
};

const CONFIG: &str = include_str!("../data/config.toml");
const ITEMS: &str = include_str!("../data/items.ron");
const SPELLS: &str = include_str!("../data/spells.ron");
const SKILLS: &str = include_str!("../data/skills.ron");
const ENEMIES: &str = include_str!("../data/enemies.ron");
const LOOT_GROUPS: &str = include_str!("../data/loot_groups.ron");

/// Rules plus every record a combat can reference.
#[derive(Clone, Debug)]
pub struct Content {
    pub config: CombatConfig,
    pub catalog: Catalog,
}

impl Content {
    pub fn new(config: CombatConfig, catalog: Catalog) -> Self {
        Self { config, catalog }
    }

    /// Parses the embedded data directory.
    pub fn bundled() -> LoadResult<Self> {
        let config = ConfigLoader::parse(CONFIG)?;

        let mut catalog = Catalog::new();
        for item in ItemLoader::parse(ITEMS, &config)? {
            catalog.insert_item(item);
        }
        for spell in SpellLoader::parse(SPELLS)? {
            catalog.insert_spell(spell);
        }
        for skill in SkillLoader::parse(SKILLS)? {
            catalog.insert_skill(skill);
        }
        for (id, entries) in LootGroupLoader::parse(LOOT_GROUPS)? {
            catalog.insert_loot_group(id, entries);
        }
        for enemy in EnemyLoader::parse(ENEMIES)? {
            catalog.insert_enemy(enemy);
        }

        let content = Self::new(config, catalog);
        content.audit();
        Ok(content)
    }

    /// Logs every dangling reference and returns how many there were.
    pub fn audit(&self) -> usize {
        let found = dangling_references(&self.catalog);
        for reference in &found {
            warn!(%reference, "dangling content reference");
        }
        found.len()
    }
}
